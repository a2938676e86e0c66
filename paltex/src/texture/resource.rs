//! Compressed texture resource.
//!
//! A [`CompressedTexture`] owns the encoded payload of every mip level
//! together with the encoding that describes it. The driver texel-format
//! constant is cached next to the encoding but only ever written from
//! [`TextureEncoding::resolve_format`], so the two cannot disagree.
//!
//! # Lifecycle
//!
//! ```text
//!   new / from_single / builder / duplicate
//!                  │
//!                  ▼
//!            ┌────────────┐  set_encoding, set_from
//!            │ Configured │◄──────────────┐
//!            └─────┬──────┘───────────────┘
//!                  │ dispose
//!                  ▼
//!            ┌────────────┐
//!            │  Disposed  │  (terminal)
//!            └────────────┘
//! ```
//!
//! Construction either succeeds with a configured texture or returns an
//! error, so no half-initialized texture is ever observable.
//!
//! # Payload ownership
//!
//! Levels are stored as [`Bytes`]. Duplicating a texture shares the
//! underlying buffers instead of copying them; they are immutable, so the
//! duplicate can never observe a change made through the source.

use bytes::Bytes;
use tracing::debug;

use super::{
    BlockFormat, Compression, Dimensions, PaletteFormat, TexelFormat, TextureEncoding,
    TextureError,
};
use crate::log::{Logger, TracingLogger};

/// Lifecycle state of a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureState {
    /// Levels attached and texel format resolved.
    Configured,
    /// Levels released; no further mutation allowed.
    Disposed,
}

/// A texture whose mip levels are stored in a hardware-compressed encoding.
#[derive(Debug)]
pub struct CompressedTexture<E: TextureEncoding> {
    name: String,
    levels: Vec<Bytes>,
    dimensions: Option<Dimensions>,
    encoding: E,
    texel_format: TexelFormat,
    compression: Compression,
    state: TextureState,
}

/// Texture using `OES_compressed_paletted_texture` encodings.
pub type PalettedTexture = CompressedTexture<PaletteFormat>;

/// Texture using S3TC block encodings.
pub type BlockTexture = CompressedTexture<BlockFormat>;

impl<E: TextureEncoding> CompressedTexture<E> {
    /// Create a texture from encoded mip levels, most detailed first.
    ///
    /// # Errors
    ///
    /// Returns [`TextureError::Configuration`] if `levels` is empty or any
    /// level has no data.
    pub fn new(
        name: impl Into<String>,
        levels: Vec<Bytes>,
        encoding: E,
    ) -> Result<Self, TextureError> {
        Self::configure(name.into(), levels, None, encoding)
    }

    /// Create a texture with a single mip level.
    pub fn from_single(
        name: impl Into<String>,
        level: Bytes,
        encoding: E,
    ) -> Result<Self, TextureError> {
        Self::new(name, vec![level], encoding)
    }

    /// Shared construction path for every entry point.
    pub(crate) fn configure(
        name: String,
        levels: Vec<Bytes>,
        dimensions: Option<Dimensions>,
        encoding: E,
    ) -> Result<Self, TextureError> {
        if levels.is_empty() {
            return Err(TextureError::configuration(format!(
                "texture '{}' has no mip levels",
                name
            )));
        }
        if let Some(index) = levels.iter().position(|level| level.is_empty()) {
            return Err(TextureError::configuration(format!(
                "texture '{}' mip level {} is empty",
                name, index
            )));
        }
        encoding.validate(&levels, dimensions)?;

        let texel_format = encoding.resolve_format();
        debug!(
            name = %name,
            encoding = %encoding,
            texel_format = %texel_format,
            levels = levels.len(),
            "Configured compressed texture"
        );

        Ok(Self {
            name,
            levels,
            dimensions,
            encoding,
            texel_format,
            compression: encoding.compression(),
            state: TextureState::Configured,
        })
    }

    /// Build an equivalent texture.
    ///
    /// The texel format of the result is resolved again from the encoding
    /// rather than copied, and the levels go through the same validation as
    /// a fresh construction. Level buffers are shared, not copied.
    ///
    /// # Errors
    ///
    /// Returns [`TextureError::Disposed`] if this texture has been disposed.
    pub fn duplicate(&self) -> Result<Self, TextureError> {
        self.ensure_configured()?;
        Self::configure(
            self.name.clone(),
            self.levels.clone(),
            self.dimensions,
            self.encoding,
        )
    }

    /// Re-initialize this texture from `other`.
    ///
    /// On error `self` is left untouched.
    pub fn set_from(&mut self, other: &Self) -> Result<(), TextureError> {
        self.ensure_configured()?;
        *self = other.duplicate()?;
        Ok(())
    }

    /// Duplicate, reporting failure to `logger` instead of the caller.
    ///
    /// Returns `None` (after logging exactly one error) when duplication
    /// fails.
    pub fn clone_logged(&self, logger: &dyn Logger) -> Option<Self> {
        match self.duplicate() {
            Ok(texture) => Some(texture),
            Err(e) => {
                logger.error(&format!("Failed to clone texture '{}': {}", self.name, e));
                None
            }
        }
    }

    /// [`clone_logged`](Self::clone_logged) with a [`TracingLogger`].
    pub fn clone_or_log(&self) -> Option<Self> {
        self.clone_logged(&TracingLogger)
    }

    /// Change the encoding and re-resolve the texel format.
    ///
    /// When dimensions were declared the existing levels are checked against
    /// the new encoding first; a mismatch leaves the texture unchanged.
    pub fn set_encoding(&mut self, encoding: E) -> Result<(), TextureError> {
        self.ensure_configured()?;
        encoding.validate(&self.levels, self.dimensions)?;

        self.encoding = encoding;
        self.texel_format = encoding.resolve_format();
        debug!(
            name = %self.name,
            encoding = %encoding,
            texel_format = %self.texel_format,
            "Texture encoding changed"
        );
        Ok(())
    }

    /// Release the level buffers. Idempotent.
    pub fn dispose(&mut self) {
        if self.state == TextureState::Disposed {
            return;
        }
        self.levels = Vec::new();
        self.state = TextureState::Disposed;
        debug!(name = %self.name, "Texture disposed");
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn encoding(&self) -> E {
        self.encoding
    }

    /// The resolved driver constant for the current encoding.
    pub fn texel_format(&self) -> TexelFormat {
        self.texel_format
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Encoded mip levels, most detailed first. Empty once disposed.
    pub fn levels(&self) -> &[Bytes] {
        &self.levels
    }

    pub fn level(&self, index: usize) -> Option<&Bytes> {
        self.levels.get(index)
    }

    pub fn mip_count(&self) -> usize {
        self.levels.len()
    }

    /// Combined size of all levels in bytes.
    pub fn total_size(&self) -> usize {
        self.levels.iter().map(Bytes::len).sum()
    }

    pub fn dimensions(&self) -> Option<Dimensions> {
        self.dimensions
    }

    pub fn state(&self) -> TextureState {
        self.state
    }

    pub fn is_disposed(&self) -> bool {
        self.state == TextureState::Disposed
    }

    fn ensure_configured(&self) -> Result<(), TextureError> {
        match self.state {
            TextureState::Configured => Ok(()),
            TextureState::Disposed => Err(TextureError::Disposed {
                name: self.name.clone(),
            }),
        }
    }
}

impl CompressedTexture<PaletteFormat> {
    pub fn palette_format(&self) -> PaletteFormat {
        self.encoding
    }

    /// Change the palette format; the texel format follows immediately.
    pub fn set_palette_format(&mut self, format: PaletteFormat) -> Result<(), TextureError> {
        self.set_encoding(format)
    }
}
