//! Integration tests for paletted textures.
//!
//! These tests exercise the public API end to end:
//! - Construction from one or many mip levels
//! - Palette format changes and texel format resolution
//! - Duplication, re-initialization and logged cloning
//! - Size validation through the builder
//!
//! Run with: `cargo test --test paletted_texture_integration`

use std::collections::HashSet;

use bytes::Bytes;

use paltex::log::{LogLevel, MemoryLogger};
use paltex::texture::{
    resolve, Compression, PaletteFormat, PalettedTexture, TextureBuilder, TextureEncoding,
    TextureError, TextureState,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Build a level filled with a recognizable byte pattern.
fn pattern_level(len: usize, seed: u8) -> Bytes {
    Bytes::from((0..len).map(|i| seed.wrapping_add(i as u8)).collect::<Vec<u8>>())
}

/// Build a correctly sized mip chain for `format`.
fn mip_chain(format: PaletteFormat, width: u32, height: u32, count: usize) -> Vec<Bytes> {
    (0..count)
        .map(|level| {
            let w = (width >> level).max(1);
            let h = (height >> level).max(1);
            pattern_level(format.level_size(w, h), level as u8)
        })
        .collect()
}

/// Documented `OES_compressed_paletted_texture` constants.
const EXTENSION_TABLE: &[(PaletteFormat, u32)] = &[
    (PaletteFormat::Palette4Rgb8, 0x8B90),
    (PaletteFormat::Palette4Rgba8, 0x8B91),
    (PaletteFormat::Palette4R5G6B5, 0x8B92),
    (PaletteFormat::Palette4Rgba4, 0x8B93),
    (PaletteFormat::Palette4Rgb5A1, 0x8B94),
    (PaletteFormat::Palette8Rgb8, 0x8B95),
    (PaletteFormat::Palette8Rgba8, 0x8B96),
    (PaletteFormat::Palette8R5G6B5, 0x8B97),
    (PaletteFormat::Palette8Rgba4, 0x8B98),
    (PaletteFormat::Palette8Rgb5A1, 0x8B99),
];

// ============================================================================
// Integration Tests
// ============================================================================

#[test]
fn test_resolution_is_total_and_unique() {
    let mut seen = HashSet::new();
    for &(format, raw) in EXTENSION_TABLE {
        let resolved = resolve(format);
        assert_eq!(resolved.raw(), raw, "{} resolved incorrectly", format);
        assert!(seen.insert(resolved), "{} shares a constant", format);
    }
    assert_eq!(seen.len(), PaletteFormat::ALL.len());
}

#[test]
fn test_construct_then_change_format_scenario() {
    let mut texture = PalettedTexture::new(
        "tex1",
        vec![pattern_level(1040, 0)],
        PaletteFormat::Palette8Rgba8,
    )
    .unwrap();

    assert_eq!(texture.palette_format(), PaletteFormat::Palette8Rgba8);
    assert_eq!(texture.texel_format().raw(), 0x8B96);
    assert_eq!(texture.compression(), Compression::Paletted);

    texture
        .set_palette_format(PaletteFormat::Palette4Rgb5A1)
        .unwrap();
    assert_eq!(texture.palette_format(), PaletteFormat::Palette4Rgb5A1);
    assert_eq!(texture.texel_format().raw(), 0x8B94);
}

#[test]
fn test_invariant_holds_after_every_format_change() {
    let mut texture =
        PalettedTexture::from_single("cycle", pattern_level(12, 1), PaletteFormat::Palette4Rgb8)
            .unwrap();

    for &(format, raw) in EXTENSION_TABLE.iter().rev() {
        texture.set_palette_format(format).unwrap();
        assert_eq!(texture.palette_format(), format);
        assert_eq!(texture.texel_format(), resolve(format));
        assert_eq!(texture.texel_format().raw(), raw);
    }
}

#[test]
fn test_duplicate_is_faithful_and_independent() {
    let levels = vec![pattern_level(64, 3), pattern_level(32, 9)];
    let mut source =
        PalettedTexture::new("source", levels.clone(), PaletteFormat::Palette8R5G6B5).unwrap();

    let copy = source.duplicate().unwrap();
    assert_eq!(copy.palette_format(), PaletteFormat::Palette8R5G6B5);
    assert_eq!(copy.texel_format(), resolve(PaletteFormat::Palette8R5G6B5));
    assert_eq!(copy.levels(), levels.as_slice());

    source
        .set_palette_format(PaletteFormat::Palette4Rgba4)
        .unwrap();
    source.dispose();

    assert_eq!(copy.palette_format(), PaletteFormat::Palette8R5G6B5);
    assert_eq!(copy.texel_format().raw(), 0x8B97);
    assert_eq!(copy.levels(), levels.as_slice());
    assert_eq!(copy.state(), TextureState::Configured);
}

#[test]
fn test_clone_failure_is_contained_and_logged_once() {
    let logger = MemoryLogger::new();
    let mut texture =
        PalettedTexture::from_single("doomed", pattern_level(8, 0), PaletteFormat::Palette8Rgb8)
            .unwrap();
    texture.dispose();

    let result = texture.clone_logged(&logger);

    assert!(result.is_none());
    let errors: Vec<_> = logger
        .entries()
        .into_iter()
        .filter(|(level, _)| *level == LogLevel::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].1.contains("doomed"));
}

#[test]
fn test_construction_rejects_zero_buffers() {
    let result = PalettedTexture::new("nothing", Vec::new(), PaletteFormat::Palette4Rgba8);
    assert!(matches!(result, Err(TextureError::Configuration(_))));
}

#[test]
fn test_set_from_reinitializes_in_place() {
    let other = PalettedTexture::new(
        "other",
        mip_chain(PaletteFormat::Palette4Rgb8, 4, 4, 3),
        PaletteFormat::Palette4Rgb8,
    )
    .unwrap();
    let mut target =
        PalettedTexture::from_single("target", pattern_level(4, 7), PaletteFormat::Palette8Rgba8)
            .unwrap();

    target.set_from(&other).unwrap();

    assert_eq!(target.name(), "other");
    assert_eq!(target.palette_format(), PaletteFormat::Palette4Rgb8);
    assert_eq!(target.texel_format().raw(), 0x8B90);
    assert_eq!(target.mip_count(), 3);
}

#[test]
fn test_builder_validates_full_mip_chain() {
    for format in PaletteFormat::ALL {
        let texture = TextureBuilder::new("chain", format)
            .with_dimensions(16, 8)
            .with_mipmap_count(5)
            .with_levels(mip_chain(format, 16, 8, 5))
            .build()
            .unwrap();

        assert_eq!(texture.mip_count(), 5);
        assert_eq!(texture.texel_format(), format.resolve_format());
    }
}

#[test]
fn test_builder_rejects_level_sized_for_other_format() {
    let levels = mip_chain(PaletteFormat::Palette8Rgb8, 8, 8, 1);
    let result = TextureBuilder::new("mismatch", PaletteFormat::Palette8Rgba8)
        .with_dimensions(8, 8)
        .with_levels(levels)
        .build();

    assert!(matches!(result, Err(TextureError::Configuration(_))));
}

#[test]
fn test_duplicate_revalidates_dimensions() {
    let texture = TextureBuilder::new("sized", PaletteFormat::Palette4Rgba8)
        .with_dimensions(4, 2)
        .with_levels(mip_chain(PaletteFormat::Palette4Rgba8, 4, 2, 3))
        .build()
        .unwrap();

    let copy = texture.duplicate().unwrap();
    assert_eq!(copy.dimensions(), texture.dimensions());
    assert_eq!(copy.total_size(), texture.total_size());
}
