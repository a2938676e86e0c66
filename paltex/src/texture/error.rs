//! Error types for texture construction and format resolution.

use thiserror::Error;

/// Errors that can occur while building or mutating a compressed texture.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextureError {
    /// The texture cannot be configured from the supplied state.
    #[error("Texture configuration failed: {0}")]
    Configuration(String),

    /// Declared dimensions are unusable.
    #[error("Invalid dimensions {width}×{height}: {reason}")]
    InvalidDimensions {
        width: u32,
        height: u32,
        reason: String,
    },

    /// A raw texel constant does not belong to the requested format family.
    #[error("Unknown texel format: {0:#06X}")]
    UnknownTexelFormat(u32),

    /// A format name could not be parsed.
    #[error("Unknown format name: {0}")]
    UnknownFormatName(String),

    /// The texture has been disposed and can no longer be used.
    #[error("Texture '{name}' has been disposed")]
    Disposed { name: String },
}

impl TextureError {
    /// Shorthand for a [`TextureError::Configuration`] error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        TextureError::Configuration(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_error_display_configuration() {
        let err = TextureError::configuration("no mip levels");
        assert_eq!(
            err.to_string(),
            "Texture configuration failed: no mip levels"
        );
    }

    #[test]
    fn test_texture_error_display_invalid_dimensions() {
        let err = TextureError::InvalidDimensions {
            width: 0,
            height: 64,
            reason: "width must be non-zero".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid dimensions 0×64: width must be non-zero"
        );
    }

    #[test]
    fn test_texture_error_display_unknown_texel_format() {
        let err = TextureError::UnknownTexelFormat(0x1908);
        assert_eq!(err.to_string(), "Unknown texel format: 0x1908");
    }

    #[test]
    fn test_texture_error_display_disposed() {
        let err = TextureError::Disposed {
            name: "grass".to_string(),
        };
        assert_eq!(err.to_string(), "Texture 'grass' has been disposed");
    }
}
