//! Builder for textures whose payload should be checked against declared
//! dimensions and mip count before the texture exists.

use bytes::Bytes;

use super::{CompressedTexture, Dimensions, TextureEncoding, TextureError};

/// Collects levels and declarations for a [`CompressedTexture`].
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use paltex::texture::{PaletteFormat, TextureBuilder, TextureEncoding};
///
/// let format = PaletteFormat::Palette4Rgb8;
/// let texture = TextureBuilder::new("grass", format)
///     .with_dimensions(4, 4)
///     .with_mipmap_count(2)
///     .with_level(Bytes::from(vec![0u8; format.level_size(4, 4)]))
///     .with_level(Bytes::from(vec![0u8; format.level_size(2, 2)]))
///     .build()
///     .unwrap();
///
/// assert_eq!(texture.mip_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TextureBuilder<E: TextureEncoding> {
    name: String,
    encoding: E,
    levels: Vec<Bytes>,
    dimensions: Option<(u32, u32)>,
    mipmap_count: Option<usize>,
}

impl<E: TextureEncoding> TextureBuilder<E> {
    pub fn new(name: impl Into<String>, encoding: E) -> Self {
        Self {
            name: name.into(),
            encoding,
            levels: Vec::new(),
            dimensions: None,
            mipmap_count: None,
        }
    }

    /// Append the next (less detailed) mip level.
    pub fn with_level(mut self, level: impl Into<Bytes>) -> Self {
        self.levels.push(level.into());
        self
    }

    /// Append several mip levels in order.
    pub fn with_levels<I>(mut self, levels: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Bytes>,
    {
        self.levels.extend(levels.into_iter().map(Into::into));
        self
    }

    /// Declare the extent of level 0, enabling per-level size checks.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.dimensions = Some((width, height));
        self
    }

    /// Declare how many mip levels must be supplied.
    pub fn with_mipmap_count(mut self, count: usize) -> Self {
        self.mipmap_count = Some(count);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn encoding(&self) -> E {
        self.encoding
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Validate and build the texture.
    ///
    /// # Errors
    ///
    /// - [`TextureError::Configuration`] if no levels were supplied, the
    ///   declared mip count differs from the supplied levels, the chain is
    ///   longer than the dimensions allow, or a level has the wrong size
    /// - [`TextureError::InvalidDimensions`] if a declared extent is zero or a
    ///   level size for it overflows `usize`
    pub fn build(self) -> Result<CompressedTexture<E>, TextureError> {
        if let Some(count) = self.mipmap_count {
            if count != self.levels.len() {
                return Err(TextureError::configuration(format!(
                    "texture '{}' declares {} mip levels but {} were supplied",
                    self.name,
                    count,
                    self.levels.len()
                )));
            }
        }

        let dimensions = self
            .dimensions
            .map(|(width, height)| Dimensions::new(width, height))
            .transpose()?;

        CompressedTexture::configure(self.name, self.levels, dimensions, self.encoding)
    }
}
