//! `paltex inspect` - build a texture from level files and describe it.

use std::path::PathBuf;

use bytes::Bytes;
use paltex::config::ConfigFile;
use paltex::texture::{CompressedTexture, TextureBuilder, TextureEncoding};
use tracing::{debug, info};

use super::common::FormatArg;
use crate::error::CliError;

/// Arguments for the inspect command.
#[derive(Debug, Clone)]
pub struct InspectArgs {
    pub format: Option<String>,
    pub dimensions: Option<(u32, u32)>,
    pub name: Option<String>,
    pub files: Vec<PathBuf>,
}

/// Run the inspect command.
pub fn run(args: InspectArgs, config: &ConfigFile) -> Result<(), CliError> {
    for line in inspect(args, config)? {
        println!("{}", line);
    }
    Ok(())
}

/// Read the level files, build the texture and render its description.
pub fn inspect(args: InspectArgs, config: &ConfigFile) -> Result<Vec<String>, CliError> {
    let format = match &args.format {
        Some(name) => FormatArg::parse(name)?,
        None => FormatArg::Paletted(config.texture.default_format),
    };

    let name = args
        .name
        .clone()
        .unwrap_or_else(|| default_name(&args.files));
    let levels = read_levels(&args.files)?;

    // Size checks can be switched off for payloads with non-standard padding;
    // the declared extent is then only reported
    let check_sizes = config.texture.validate_level_sizes;

    let mut lines = match format {
        FormatArg::Paletted(format) => {
            build_and_describe(name, format, levels, args.dimensions, check_sizes)?
        }
        FormatArg::Block(format) => {
            build_and_describe(name, format, levels, args.dimensions, check_sizes)?
        }
    };

    if let (false, Some((width, height))) = (check_sizes, args.dimensions) {
        // Keep the dimensions line where a checked texture would show it
        lines.insert(4, format!("Dimensions:   {}×{} (unchecked)", width, height));
    }
    Ok(lines)
}

fn build_and_describe<E: TextureEncoding>(
    name: String,
    encoding: E,
    levels: Vec<Bytes>,
    dimensions: Option<(u32, u32)>,
    check_sizes: bool,
) -> Result<Vec<String>, CliError> {
    let mut builder = TextureBuilder::new(name, encoding).with_levels(levels);
    if let (true, Some((width, height))) = (check_sizes, dimensions) {
        builder = builder.with_dimensions(width, height);
    }
    let texture = builder.build()?;
    info!(name = %texture.name(), texel_format = %texture.texel_format(), "Texture is valid");
    Ok(describe(&texture))
}

/// Human-readable description of a texture.
pub fn describe<E: TextureEncoding>(texture: &CompressedTexture<E>) -> Vec<String> {
    let mut lines = vec![
        format!("Name:         {}", texture.name()),
        format!("Format:       {}", texture.encoding()),
        format!("Compression:  {}", texture.compression()),
        format!("Texel format: {}", texture.texel_format()),
    ];
    if let Some(dims) = texture.dimensions() {
        lines.push(format!("Dimensions:   {}", dims));
    }
    lines.push(format!(
        "Mip levels:   {} ({} bytes total)",
        texture.mip_count(),
        texture.total_size()
    ));
    for (index, level) in texture.levels().iter().enumerate() {
        lines.push(format!("  level {}: {} bytes", index, level.len()));
    }
    lines
}

fn read_levels(files: &[PathBuf]) -> Result<Vec<Bytes>, CliError> {
    files
        .iter()
        .map(|path| {
            debug!(path = %path.display(), "Reading mip level");
            std::fs::read(path)
                .map(Bytes::from)
                .map_err(|source| CliError::ReadFile {
                    path: path.clone(),
                    source,
                })
        })
        .collect()
}

fn default_name(files: &[PathBuf]) -> String {
    files
        .first()
        .and_then(|path| path.file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "texture".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use paltex::texture::{PaletteFormat, TextureError};
    use tempfile::TempDir;

    fn write_level(dir: &TempDir, name: &str, len: usize) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, vec![0u8; len]).unwrap();
        path
    }

    fn args(files: Vec<PathBuf>) -> InspectArgs {
        InspectArgs {
            format: None,
            dimensions: None,
            name: None,
            files,
        }
    }

    #[test]
    fn test_inspect_uses_default_format_and_file_stem() {
        let dir = TempDir::new().unwrap();
        let file = write_level(&dir, "grass.pal", 1100);

        let lines = inspect(args(vec![file]), &ConfigFile::default()).unwrap();

        assert_eq!(lines[0], "Name:         grass");
        assert_eq!(lines[1], "Format:       PALETTE8_RGBA8");
        assert_eq!(lines[3], "Texel format: 0x8B96");
    }

    #[test]
    fn test_inspect_validates_dimensions() {
        let dir = TempDir::new().unwrap();
        let format = PaletteFormat::Palette4Rgb8;
        let good = write_level(&dir, "l0.bin", format.level_size(4, 4));
        let bad = write_level(&dir, "l1.bin", 3);

        let mut request = args(vec![good, bad]);
        request.format = Some("PALETTE4_RGB8".to_string());
        request.dimensions = Some((4, 4));

        let result = inspect(request.clone(), &ConfigFile::default());
        assert!(matches!(
            result,
            Err(CliError::Texture(TextureError::Configuration(_)))
        ));

        let mut lenient = ConfigFile::default();
        lenient.texture.validate_level_sizes = false;
        let lines = inspect(request, &lenient).unwrap();
        assert!(lines.iter().any(|l| l == "  level 1: 3 bytes"));
    }

    #[test]
    fn test_inspect_reports_dimensions_when_sizes_unchecked() {
        let dir = TempDir::new().unwrap();
        let file = write_level(&dir, "padded.bin", 100);

        let mut request = args(vec![file]);
        request.format = Some("PALETTE4_RGB8".to_string());
        request.dimensions = Some((16, 16));

        let mut lenient = ConfigFile::default();
        lenient.texture.validate_level_sizes = false;
        let lines = inspect(request, &lenient).unwrap();

        assert_eq!(lines[4], "Dimensions:   16×16 (unchecked)");
        assert!(lines[5].starts_with("Mip levels:   1"));
    }

    #[test]
    fn test_inspect_block_format() {
        let dir = TempDir::new().unwrap();
        let file = write_level(&dir, "stone.bc1", 32);

        let mut request = args(vec![file]);
        request.format = Some("bc1".to_string());
        request.dimensions = Some((8, 8));
        request.name = Some("stone".to_string());

        let lines = inspect(request, &ConfigFile::default()).unwrap();
        assert_eq!(lines[2], "Compression:  block");
        assert_eq!(lines[3], "Texel format: 0x83F1");
        assert_eq!(lines[4], "Dimensions:   8×8");
    }

    #[test]
    fn test_inspect_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = inspect(
            args(vec![dir.path().join("absent.bin")]),
            &ConfigFile::default(),
        );
        assert!(matches!(result, Err(CliError::ReadFile { .. })));
    }

    #[test]
    fn test_inspect_unknown_format() {
        let dir = TempDir::new().unwrap();
        let file = write_level(&dir, "x.bin", 4);
        let mut request = args(vec![file]);
        request.format = Some("ASTC_4x4".to_string());

        assert!(matches!(
            inspect(request, &ConfigFile::default()),
            Err(CliError::Texture(TextureError::UnknownFormatName(_)))
        ));
    }
}
