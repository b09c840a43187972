//! Assertion helpers for tests.

use palette_engine::ColorSet;
use pretty_assertions::assert_eq;

/// Assert a palette prints as the given canonical colors, in order
pub fn assert_palette(set: &ColorSet, expected: &[&str]) {
    let actual: Vec<String> = set.iter().map(|c| c.to_string()).collect();
    assert_eq!(actual, expected, "Palette mismatch");
}

/// Assert bytes are a PNG file
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert a PNG is a single row of 8-bit RGBA pixels, non-interlaced
pub fn assert_palette_png_header(bytes: &[u8], width: u32) {
    assert_png(bytes);
    let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
    let reader = decoder.read_info().expect("Readable PNG");
    let info = reader.info();
    assert_eq!(info.width, width, "Palette width");
    assert_eq!(info.height, 1, "Palette height");
    assert_eq!(info.color_type, png::ColorType::Rgba, "Color type");
    assert_eq!(info.bit_depth, png::BitDepth::Eight, "Bit depth");
    assert!(!info.interlaced, "Palette must not be interlaced");
}
