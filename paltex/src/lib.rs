//! PalTex - compressed texture resource model
//!
//! This library represents GPU textures whose pixel data is stored in a
//! hardware-compressed encoding, resolves semantic format selections to the
//! texel-format constants a graphics driver expects, and manages the encoded
//! mip level payloads through construction, duplication and disposal.
//!
//! The main entry point is [`texture::CompressedTexture`], usually through the
//! [`texture::PalettedTexture`] alias for `OES_compressed_paletted_texture`
//! payloads.
//!
//! ```
//! use bytes::Bytes;
//! use paltex::texture::{PaletteFormat, PalettedTexture, TextureEncoding};
//!
//! let level0 = Bytes::from_static(&[0u8; 1032]);
//! let mut texture =
//!     PalettedTexture::from_single("tex1", level0, PaletteFormat::Palette8Rgba8).unwrap();
//! assert_eq!(texture.texel_format().raw(), 0x8B96);
//!
//! texture.set_palette_format(PaletteFormat::Palette4Rgb5A1).unwrap();
//! assert_eq!(texture.texel_format(), PaletteFormat::Palette4Rgb5A1.resolve_format());
//! ```

pub mod config;
pub mod log;
pub mod texture;
