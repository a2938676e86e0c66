//! Encoding strategy shared by every compressed texture variant.

use std::fmt;

use bytes::Bytes;

use super::TextureError;

/// Driver texel-format constant (the `internalformat` handed to
/// `glCompressedTexImage2D`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TexelFormat(u32);

impl TexelFormat {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw constant.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TexelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06X}", self.0)
    }
}

impl From<TexelFormat> for u32 {
    fn from(format: TexelFormat) -> Self {
        format.0
    }
}

/// Compression family tag carried by every texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compression {
    /// Indexed-color palette (`OES_compressed_paletted_texture`).
    Paletted,
    /// 4×4 block compression (`EXT_texture_compression_s3tc`).
    Block,
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compression::Paletted => write!(f, "paletted"),
            Compression::Block => write!(f, "block"),
        }
    }
}

/// Width and height of mip level 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Create dimensions, rejecting a zero extent.
    pub fn new(width: u32, height: u32) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::InvalidDimensions {
                width,
                height,
                reason: "width and height must be non-zero".to_string(),
            });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Extent of mip level `level`, clamped to 1×1.
    pub fn level(&self, level: usize) -> (u32, u32) {
        let shift = level.min(31) as u32;
        ((self.width >> shift).max(1), (self.height >> shift).max(1))
    }

    /// Length of the full mip chain down to 1×1.
    pub fn max_mip_levels(&self) -> usize {
        let largest = self.width.max(self.height);
        (u32::BITS - largest.leading_zeros()) as usize
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}

/// A closed family of hardware texture encodings.
///
/// Each implementor is a plain value enumerating the formats of one family.
/// [`CompressedTexture`](super::CompressedTexture) holds one of these and
/// asks it for the driver constant whenever the format changes, so the
/// resolved constant never outlives the format it was derived from.
pub trait TextureEncoding:
    Copy + fmt::Debug + fmt::Display + PartialEq + Eq + Send + Sync + 'static
{
    /// Compression family of this encoding.
    fn compression(&self) -> Compression;

    /// The driver constant for this format.
    fn resolve_format(&self) -> TexelFormat;

    /// Expected byte length of a single mip level of the given extent, or
    /// `None` when it does not fit in `usize`.
    fn checked_level_size(&self, width: u32, height: u32) -> Option<usize>;

    /// Expected byte length of a single mip level, saturating at `usize::MAX`.
    fn level_size(&self, width: u32, height: u32) -> usize {
        self.checked_level_size(width, height).unwrap_or(usize::MAX)
    }

    /// Check encoded mip levels against declared dimensions.
    ///
    /// Without dimensions there is nothing to measure against and any
    /// payload is accepted.
    fn validate(
        &self,
        levels: &[Bytes],
        dimensions: Option<Dimensions>,
    ) -> Result<(), TextureError> {
        let Some(dims) = dimensions else {
            return Ok(());
        };

        let max_levels = dims.max_mip_levels();
        if levels.len() > max_levels {
            return Err(TextureError::configuration(format!(
                "{} mip levels supplied but a {} texture has at most {}",
                levels.len(),
                dims,
                max_levels
            )));
        }

        for (index, level) in levels.iter().enumerate() {
            let (width, height) = dims.level(index);
            let expected = self.checked_level_size(width, height).ok_or_else(|| {
                TextureError::InvalidDimensions {
                    width: dims.width(),
                    height: dims.height(),
                    reason: format!(
                        "mip level {} is too large to address as {}",
                        index, self
                    ),
                }
            })?;
            if level.len() != expected {
                return Err(TextureError::configuration(format!(
                    "mip level {} is {} bytes, expected {} for {}×{} {}",
                    index,
                    level.len(),
                    expected,
                    width,
                    height,
                    self
                )));
            }
        }

        Ok(())
    }
}
