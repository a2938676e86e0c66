//! `paltex formats` - print the format resolution table.

use paltex::texture::{BlockFormat, PaletteFormat, TextureEncoding};

use super::common::EncodingKind;
use crate::error::CliError;

/// Run the formats command.
pub fn run(kind: Option<EncodingKind>) -> Result<(), CliError> {
    for line in table(kind) {
        println!("{}", line);
    }
    Ok(())
}

/// Render the table rows for the selected families.
pub fn table(kind: Option<EncodingKind>) -> Vec<String> {
    let mut lines = Vec::new();

    if kind.is_none() || kind == Some(EncodingKind::Paletted) {
        lines.push(format!(
            "{:<20} {:<8} {:>5} {:>8} {:>6}",
            "PALETTED", "CONST", "BITS", "ENTRIES", "ENTRY"
        ));
        for format in PaletteFormat::ALL {
            lines.push(format!(
                "{:<20} {:<8} {:>5} {:>8} {:>6}",
                format.to_string(),
                format.resolve_format().to_string(),
                format.index_bits(),
                format.palette_entries(),
                format.entry_size()
            ));
        }
    }

    if kind.is_none() || kind == Some(EncodingKind::Block) {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("{:<20} {:<8} {:>5}", "BLOCK", "CONST", "BYTES"));
        for format in BlockFormat::ALL {
            lines.push(format!(
                "{:<20} {:<8} {:>5}",
                format.to_string(),
                format.resolve_format().to_string(),
                format.block_size()
            ));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_paletted_only() {
        let lines = table(Some(EncodingKind::Paletted));
        assert_eq!(lines.len(), 11);
        assert!(lines[7].starts_with("PALETTE8_RGBA8"));
        assert!(lines[7].contains("0x8B96"));
    }

    #[test]
    fn test_table_block_only() {
        let lines = table(Some(EncodingKind::Block));
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("0x83F1"));
    }

    #[test]
    fn test_table_all_families() {
        let lines = table(None);
        // header + 10, blank, header + 2
        assert_eq!(lines.len(), 15);
        assert!(lines[11].is_empty());
    }
}
