//! Common types and utilities shared across CLI commands.

use clap::ValueEnum;
use paltex::texture::{BlockFormat, PaletteFormat, TextureError};

/// Encoding family selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum EncodingKind {
    /// OES_compressed_paletted_texture formats
    Paletted,
    /// S3TC block formats (BC1/BC3)
    Block,
}

/// A format named on the command line, from either family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Paletted(PaletteFormat),
    Block(BlockFormat),
}

impl FormatArg {
    /// Parse a format name, trying palette formats first.
    pub fn parse(name: &str) -> Result<Self, TextureError> {
        if let Ok(format) = name.parse::<PaletteFormat>() {
            return Ok(FormatArg::Paletted(format));
        }
        name.parse::<BlockFormat>().map(FormatArg::Block)
    }
}
