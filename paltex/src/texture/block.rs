//! Block-compressed (S3TC) texture formats.
//!
//! Texels are encoded in independent 4×4 blocks, so every level occupies a
//! whole number of blocks regardless of its extent.

use std::fmt;
use std::str::FromStr;

use super::{Compression, TexelFormat, TextureEncoding, TextureError};

pub const GL_COMPRESSED_RGBA_S3TC_DXT1_EXT: u32 = 0x83F1;
pub const GL_COMPRESSED_RGBA_S3TC_DXT5_EXT: u32 = 0x83F3;

/// Block compression format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockFormat {
    /// BC1/DXT1 (8 bytes per block, 1-bit alpha)
    Bc1,
    /// BC3/DXT5 (16 bytes per block, interpolated alpha)
    Bc3,
}

impl BlockFormat {
    pub const ALL: [BlockFormat; 2] = [BlockFormat::Bc1, BlockFormat::Bc3];

    pub const fn texel_format(self) -> TexelFormat {
        match self {
            BlockFormat::Bc1 => TexelFormat::new(GL_COMPRESSED_RGBA_S3TC_DXT1_EXT),
            BlockFormat::Bc3 => TexelFormat::new(GL_COMPRESSED_RGBA_S3TC_DXT5_EXT),
        }
    }

    /// Bytes per 4×4 block.
    pub const fn block_size(self) -> usize {
        match self {
            BlockFormat::Bc1 => 8,
            BlockFormat::Bc3 => 16,
        }
    }

    pub fn from_texel_format(raw: u32) -> Result<Self, TextureError> {
        Self::ALL
            .into_iter()
            .find(|format| format.texel_format().raw() == raw)
            .ok_or(TextureError::UnknownTexelFormat(raw))
    }
}

impl TextureEncoding for BlockFormat {
    fn compression(&self) -> Compression {
        Compression::Block
    }

    fn resolve_format(&self) -> TexelFormat {
        self.texel_format()
    }

    fn checked_level_size(&self, width: u32, height: u32) -> Option<usize> {
        let blocks_wide = width.div_ceil(4) as usize;
        let blocks_high = height.div_ceil(4) as usize;
        blocks_wide
            .checked_mul(blocks_high)?
            .checked_mul(self.block_size())
    }
}

impl fmt::Display for BlockFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockFormat::Bc1 => write!(f, "BC1"),
            BlockFormat::Bc3 => write!(f, "BC3"),
        }
    }
}

impl FromStr for BlockFormat {
    type Err = TextureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bc1" | "dxt1" => Ok(BlockFormat::Bc1),
            "bc3" | "dxt5" => Ok(BlockFormat::Bc3),
            _ => Err(TextureError::UnknownFormatName(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_constants() {
        assert_eq!(BlockFormat::Bc1.resolve_format().raw(), 0x83F1);
        assert_eq!(BlockFormat::Bc3.resolve_format().raw(), 0x83F3);
    }

    #[test]
    fn test_level_size_4096_bc1() {
        // 1024×1024 blocks * 8
        assert_eq!(BlockFormat::Bc1.level_size(4096, 4096), 8_388_608);
    }

    #[test]
    fn test_level_size_rounds_to_whole_blocks() {
        assert_eq!(BlockFormat::Bc1.level_size(1, 1), 8);
        assert_eq!(BlockFormat::Bc3.level_size(5, 3), 2 * 16);
        assert_eq!(BlockFormat::Bc3.level_size(2, 2), 16);
    }

    #[test]
    fn test_level_size_overflow_is_detected() {
        assert_eq!(BlockFormat::Bc3.checked_level_size(u32::MAX, u32::MAX), None);
        assert_eq!(BlockFormat::Bc3.level_size(u32::MAX, u32::MAX), usize::MAX);
    }

    #[test]
    fn test_compression_is_block() {
        assert_eq!(BlockFormat::Bc3.compression(), Compression::Block);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("dxt1".parse::<BlockFormat>(), Ok(BlockFormat::Bc1));
        assert_eq!("BC3".parse::<BlockFormat>(), Ok(BlockFormat::Bc3));
        assert!("bc7".parse::<BlockFormat>().is_err());
    }

    #[test]
    fn test_from_texel_format() {
        assert_eq!(BlockFormat::from_texel_format(0x83F3), Ok(BlockFormat::Bc3));
        assert_eq!(
            BlockFormat::from_texel_format(0x8B96),
            Err(TextureError::UnknownTexelFormat(0x8B96))
        );
    }
}
