//! Paletted (indexed-color) texture formats.
//!
//! Each texel is a 4- or 8-bit index into a palette of 16 or 256 entries
//! stored at the front of the payload. The driver constants come from the
//! Khronos `OES_compressed_paletted_texture` extension (`gl2ext.h`).

use std::fmt;
use std::str::FromStr;

use super::{Compression, TexelFormat, TextureEncoding, TextureError};

pub const GL_PALETTE4_RGB8_OES: u32 = 0x8B90;
pub const GL_PALETTE4_RGBA8_OES: u32 = 0x8B91;
pub const GL_PALETTE4_R5_G6_B5_OES: u32 = 0x8B92;
pub const GL_PALETTE4_RGBA4_OES: u32 = 0x8B93;
pub const GL_PALETTE4_RGB5_A1_OES: u32 = 0x8B94;
pub const GL_PALETTE8_RGB8_OES: u32 = 0x8B95;
pub const GL_PALETTE8_RGBA8_OES: u32 = 0x8B96;
pub const GL_PALETTE8_R5_G6_B5_OES: u32 = 0x8B97;
pub const GL_PALETTE8_RGBA4_OES: u32 = 0x8B98;
pub const GL_PALETTE8_RGB5_A1_OES: u32 = 0x8B99;

/// Palette index width combined with palette entry layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteFormat {
    Palette4Rgb8,
    Palette4Rgba8,
    Palette4R5G6B5,
    Palette4Rgba4,
    Palette4Rgb5A1,
    Palette8Rgb8,
    #[default]
    Palette8Rgba8,
    Palette8R5G6B5,
    Palette8Rgba4,
    Palette8Rgb5A1,
}

impl PaletteFormat {
    /// Every palette format, in extension constant order.
    pub const ALL: [PaletteFormat; 10] = [
        PaletteFormat::Palette4Rgb8,
        PaletteFormat::Palette4Rgba8,
        PaletteFormat::Palette4R5G6B5,
        PaletteFormat::Palette4Rgba4,
        PaletteFormat::Palette4Rgb5A1,
        PaletteFormat::Palette8Rgb8,
        PaletteFormat::Palette8Rgba8,
        PaletteFormat::Palette8R5G6B5,
        PaletteFormat::Palette8Rgba4,
        PaletteFormat::Palette8Rgb5A1,
    ];

    /// The `GL_*_OES` constant for this format.
    ///
    /// No wildcard arm: a new variant must be given its constant here.
    pub const fn texel_format(self) -> TexelFormat {
        let raw = match self {
            PaletteFormat::Palette4Rgb8 => GL_PALETTE4_RGB8_OES,
            PaletteFormat::Palette4Rgba8 => GL_PALETTE4_RGBA8_OES,
            PaletteFormat::Palette4R5G6B5 => GL_PALETTE4_R5_G6_B5_OES,
            PaletteFormat::Palette4Rgba4 => GL_PALETTE4_RGBA4_OES,
            PaletteFormat::Palette4Rgb5A1 => GL_PALETTE4_RGB5_A1_OES,
            PaletteFormat::Palette8Rgb8 => GL_PALETTE8_RGB8_OES,
            PaletteFormat::Palette8Rgba8 => GL_PALETTE8_RGBA8_OES,
            PaletteFormat::Palette8R5G6B5 => GL_PALETTE8_R5_G6_B5_OES,
            PaletteFormat::Palette8Rgba4 => GL_PALETTE8_RGBA4_OES,
            PaletteFormat::Palette8Rgb5A1 => GL_PALETTE8_RGB5_A1_OES,
        };
        TexelFormat::new(raw)
    }

    /// Reverse lookup from a raw driver constant.
    pub fn from_texel_format(raw: u32) -> Result<Self, TextureError> {
        Self::ALL
            .into_iter()
            .find(|format| format.texel_format().raw() == raw)
            .ok_or(TextureError::UnknownTexelFormat(raw))
    }

    /// Canonical name, e.g. `PALETTE8_RGBA8`.
    pub const fn name(self) -> &'static str {
        match self {
            PaletteFormat::Palette4Rgb8 => "PALETTE4_RGB8",
            PaletteFormat::Palette4Rgba8 => "PALETTE4_RGBA8",
            PaletteFormat::Palette4R5G6B5 => "PALETTE4_R5_G6_B5",
            PaletteFormat::Palette4Rgba4 => "PALETTE4_RGBA4",
            PaletteFormat::Palette4Rgb5A1 => "PALETTE4_RGB5_A1",
            PaletteFormat::Palette8Rgb8 => "PALETTE8_RGB8",
            PaletteFormat::Palette8Rgba8 => "PALETTE8_RGBA8",
            PaletteFormat::Palette8R5G6B5 => "PALETTE8_R5_G6_B5",
            PaletteFormat::Palette8Rgba4 => "PALETTE8_RGBA4",
            PaletteFormat::Palette8Rgb5A1 => "PALETTE8_RGB5_A1",
        }
    }

    /// Bits per texel index (4 or 8).
    pub const fn index_bits(self) -> u32 {
        match self {
            PaletteFormat::Palette4Rgb8
            | PaletteFormat::Palette4Rgba8
            | PaletteFormat::Palette4R5G6B5
            | PaletteFormat::Palette4Rgba4
            | PaletteFormat::Palette4Rgb5A1 => 4,
            PaletteFormat::Palette8Rgb8
            | PaletteFormat::Palette8Rgba8
            | PaletteFormat::Palette8R5G6B5
            | PaletteFormat::Palette8Rgba4
            | PaletteFormat::Palette8Rgb5A1 => 8,
        }
    }

    /// Number of palette entries (16 or 256).
    pub const fn palette_entries(self) -> usize {
        1 << self.index_bits()
    }

    /// Bytes per palette entry.
    pub const fn entry_size(self) -> usize {
        match self {
            PaletteFormat::Palette4Rgb8 | PaletteFormat::Palette8Rgb8 => 3,
            PaletteFormat::Palette4Rgba8 | PaletteFormat::Palette8Rgba8 => 4,
            PaletteFormat::Palette4R5G6B5
            | PaletteFormat::Palette4Rgba4
            | PaletteFormat::Palette4Rgb5A1
            | PaletteFormat::Palette8R5G6B5
            | PaletteFormat::Palette8Rgba4
            | PaletteFormat::Palette8Rgb5A1 => 2,
        }
    }

    /// Size of the palette block in bytes.
    pub const fn palette_size(self) -> usize {
        self.palette_entries() * self.entry_size()
    }

    /// Size of the packed index data for one level, rounded up to a byte.
    ///
    /// `None` if the size overflows `usize`.
    pub fn index_data_size(self, width: u32, height: u32) -> Option<usize> {
        let bits = (width as u64)
            .checked_mul(height as u64)?
            .checked_mul(self.index_bits() as u64)?;
        usize::try_from(bits.div_ceil(8)).ok()
    }
}

/// Resolve a palette format to its driver constant.
pub fn resolve(format: PaletteFormat) -> TexelFormat {
    format.texel_format()
}

impl TextureEncoding for PaletteFormat {
    fn compression(&self) -> Compression {
        Compression::Paletted
    }

    fn resolve_format(&self) -> TexelFormat {
        self.texel_format()
    }

    /// Each level carries its own palette followed by packed indices.
    fn checked_level_size(&self, width: u32, height: u32) -> Option<usize> {
        self.index_data_size(width, height)?
            .checked_add(self.palette_size())
    }
}

impl fmt::Display for PaletteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteFormat {
    type Err = TextureError;

    /// Accepts the canonical name or the `GL_..._OES` spelling, in any case,
    /// with `-` allowed in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        let bare = normalized.strip_prefix("GL_").unwrap_or(&normalized);
        let bare = bare.strip_suffix("_OES").unwrap_or(bare);

        Self::ALL
            .into_iter()
            .find(|format| format.name() == bare)
            .ok_or_else(|| TextureError::UnknownFormatName(s.to_string()))
    }
}
