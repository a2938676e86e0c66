//! Compressed texture resources.
//!
//! This module models textures whose payload is already encoded for the GPU.
//! The texture itself is generic; everything format specific lives behind the
//! [`TextureEncoding`] trait so new encoding families can be added without
//! touching the resource type.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │   CompressedTexture<E>       │
//! │  name, levels: Vec<Bytes>,   │
//! │  encoding: E, texel_format   │
//! └──────────────┬───────────────┘
//!                │ resolve_format() / validate()
//!                ▼
//! ┌──────────────────────────────┐
//! │     TextureEncoding          │ (trait)
//! └──────────────┬───────────────┘
//!           ┌────┴─────┐
//!           ▼          ▼
//!   ┌─────────────┐ ┌─────────────┐
//!   │PaletteFormat│ │ BlockFormat │
//!   │ (OES, 10)   │ │ (S3TC, 2)   │
//!   └─────────────┘ └─────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use paltex::log::MemoryLogger;
//! use paltex::texture::{PaletteFormat, PalettedTexture};
//!
//! let mut texture = PalettedTexture::new(
//!     "tex1",
//!     vec![Bytes::from_static(b"level0"), Bytes::from_static(b"l1")],
//!     PaletteFormat::Palette8Rgba8,
//! )
//! .unwrap();
//!
//! let logger = MemoryLogger::new();
//! let copy = texture.clone_logged(&logger).unwrap();
//! assert_eq!(copy.texel_format(), texture.texel_format());
//!
//! texture.dispose();
//! assert!(texture.clone_logged(&logger).is_none());
//! assert_eq!(logger.errors().len(), 1);
//! ```

mod block;
mod builder;
mod encoding;
mod error;
mod palette;
mod resource;

pub use block::{BlockFormat, GL_COMPRESSED_RGBA_S3TC_DXT1_EXT, GL_COMPRESSED_RGBA_S3TC_DXT5_EXT};
pub use builder::TextureBuilder;
pub use encoding::{Compression, Dimensions, TexelFormat, TextureEncoding};
pub use error::TextureError;
pub use palette::{
    resolve, PaletteFormat, GL_PALETTE4_R5_G6_B5_OES, GL_PALETTE4_RGB5_A1_OES,
    GL_PALETTE4_RGB8_OES, GL_PALETTE4_RGBA4_OES, GL_PALETTE4_RGBA8_OES,
    GL_PALETTE8_R5_G6_B5_OES, GL_PALETTE8_RGB5_A1_OES, GL_PALETTE8_RGB8_OES,
    GL_PALETTE8_RGBA4_OES, GL_PALETTE8_RGBA8_OES,
};
pub use resource::{BlockTexture, CompressedTexture, PalettedTexture, TextureState};
