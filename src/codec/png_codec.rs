use std::io::Cursor;

use palette_engine::{PixelGrid, PALETTE_CHANNELS};

use crate::error::{DecodeError, EncodeError};
use crate::models::Compression;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// Options for [`encode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    /// zlib effort for the initial encode
    pub compression: Compression,
    /// Re-compress with oxipng afterwards
    pub optimize: bool,
}

/// Default cap on what a single decode may allocate (256 MiB).
pub const DEFAULT_DECODE_LIMIT: usize = 256 * 1024 * 1024;

/// Decode a PNG into an 8-bit pixel grid with 3 (RGB) or 4 (RGBA) channels.
///
/// Indexed, low-bit-depth and 16-bit images are expanded to 8 bits per
/// channel, a tRNS chunk becomes an alpha channel, and grayscale is widened
/// to RGB so every pixel carries its full color.
pub fn decode(bytes: &[u8]) -> Result<PixelGrid, DecodeError> {
    decode_with_limit(bytes, DEFAULT_DECODE_LIMIT)
}

/// Like [`decode`], but fails with [`DecodeError::OutOfMemory`] before
/// allocating anything when the image would need more than `max_bytes`.
pub fn decode_with_limit(bytes: &[u8], max_bytes: usize) -> Result<PixelGrid, DecodeError> {
    if !bytes.starts_with(&PNG_SIGNATURE) {
        return Err(DecodeError::NotAnImage);
    }

    let mut decoder = png::Decoder::new_with_limits(
        Cursor::new(bytes),
        png::Limits { bytes: max_bytes },
    );
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info().map_err(map_decoding_error)?;

    // The header alone decides the size: check it against the limit before
    // touching any memory. Frame buffer plus the widest (RGBA) grid.
    let (width, height) = (reader.info().width, reader.info().height);
    let frame_bytes = reader.output_buffer_size();
    let needed = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(PALETTE_CHANNELS as usize))
        .and_then(|grid_bytes| grid_bytes.checked_add(frame_bytes));
    if !matches!(needed, Some(n) if n <= max_bytes) {
        tracing::debug!(width, height, max_bytes, "PNG exceeds decode limit");
        return Err(DecodeError::OutOfMemory);
    }

    let mut buf = Vec::new();
    buf.try_reserve_exact(frame_bytes)
        .map_err(|_| DecodeError::OutOfMemory)?;
    buf.resize(frame_bytes, 0);
    let info = reader.next_frame(&mut buf).map_err(map_decoding_error)?;

    let (in_channels, out_channels) = match info.color_type {
        png::ColorType::Grayscale => (1, 3),
        png::ColorType::GrayscaleAlpha => (2, 4),
        png::ColorType::Rgb => (3, 3),
        png::ColorType::Rgba => (4, 4),
        png::ColorType::Indexed => {
            return Err(DecodeError::Corrupted(
                "indexed image was not expanded".to_string(),
            ))
        }
    };

    let row_bytes = info.width as usize * in_channels;
    let mut data = Vec::new();
    data.try_reserve_exact(info.width as usize * info.height as usize * out_channels)
        .map_err(|_| DecodeError::OutOfMemory)?;
    for row in buf[..info.buffer_size()].chunks_exact(info.line_size) {
        let row = &row[..row_bytes];
        match in_channels {
            1 => row.iter().for_each(|&v| data.extend_from_slice(&[v, v, v])),
            2 => row
                .chunks_exact(2)
                .for_each(|ga| data.extend_from_slice(&[ga[0], ga[0], ga[0], ga[1]])),
            _ => data.extend_from_slice(row),
        }
    }

    tracing::debug!(
        width = info.width,
        height = info.height,
        color_type = ?info.color_type,
        "Decoded PNG"
    );

    PixelGrid::new(info.width, info.height, out_channels as u8, data)
        .map_err(|e| DecodeError::Corrupted(e.to_string()))
}

fn map_decoding_error(e: png::DecodingError) -> DecodeError {
    match e {
        png::DecodingError::LimitsExceeded => DecodeError::OutOfMemory,
        other => DecodeError::Corrupted(other.to_string()),
    }
}

/// Encode a 4-channel grid as an 8-bit RGBA, non-interlaced PNG.
pub fn encode(grid: &PixelGrid, options: &EncodeOptions) -> Result<Vec<u8>, EncodeError> {
    if grid.channels() != PALETTE_CHANNELS {
        return Err(EncodeError::CodecFailure(format!(
            "expected {PALETTE_CHANNELS} channels, got {}",
            grid.channels()
        )));
    }

    let mut out = Vec::new();
    // header + data is a reasonable upper bound for a palette row
    out.try_reserve(grid.as_bytes().len() + 128)
        .map_err(|_| EncodeError::OutOfMemory)?;
    let mut buf = Cursor::new(out);
    {
        let mut encoder = png::Encoder::new(&mut buf, grid.width(), grid.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(options.compression.into());
        let mut writer = encoder
            .write_header()
            .map_err(|e| EncodeError::CodecFailure(e.to_string()))?;
        writer
            .write_image_data(grid.as_bytes())
            .map_err(|e| EncodeError::CodecFailure(e.to_string()))?;
    }
    let png_bytes = buf.into_inner();

    if !options.optimize {
        return Ok(png_bytes);
    }

    // Lossless re-compression only: the file must stay 8-bit RGBA and keep
    // the color of fully transparent pixels
    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            bit_depth_reduction: false,
            color_type_reduction: false,
            palette_reduction: false,
            grayscale_reduction: false,
            ..Default::default()
        },
    );
    match optimized {
        Ok(bytes) => Ok(bytes),
        Err(e) => {
            tracing::warn!(%e, "oxipng failed, keeping unoptimized PNG");
            Ok(png_bytes)
        }
    }
}
