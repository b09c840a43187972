//! Test fixtures: in-memory PNGs and palette lists.

/// Colors used across tests, as written in list files
pub mod colors {
    pub const RED: &str = "#ff0000";
    pub const GREEN_HALF: &str = "00FF0080";
    pub const BLUE: &str = "0000ff";
    pub const CLEAR_BLACK: &str = "00000000";
}

/// A small list with a duplicate and blank lines
pub const SAMPLE_LIST: &str = "#ff0000\n00FF0080\n\nFF0000FF\n0000ff\n\n00000000\n";

/// Canonical palette of [`SAMPLE_LIST`]
pub const SAMPLE_PALETTE: [&str; 4] = ["FF0000FF", "00FF0080", "0000FFFF", "00000000"];

fn encode(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("PNG header");
        writer.write_image_data(data).expect("PNG data");
    }
    out
}

/// Encode RGB pixels (row-major) as a PNG
pub fn rgb_png(width: u32, height: u32, pixels: &[[u8; 3]]) -> Vec<u8> {
    encode(width, height, png::ColorType::Rgb, &pixels.concat())
}

/// Encode RGBA pixels (row-major) as a PNG
pub fn rgba_png(width: u32, height: u32, pixels: &[[u8; 4]]) -> Vec<u8> {
    encode(width, height, png::ColorType::Rgba, &pixels.concat())
}

/// Encode grayscale pixels (row-major) as a PNG
pub fn gray_png(width: u32, height: u32, pixels: &[u8]) -> Vec<u8> {
    encode(width, height, png::ColorType::Grayscale, pixels)
}
