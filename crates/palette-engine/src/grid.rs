//! Row-major pixel buffers exchanged with an image codec.

use crate::palette::PaletteError;

/// A rectangular, row-major grid of 8-bit pixels.
///
/// This is the currency between the engine and whatever image codec sits
/// outside it: a decoder produces one (3 or 4 channels per pixel), the
/// serializer produces one for an encoder (always 4 channels).
///
/// The channel count itself is not validated here; the extractor rejects
/// anything other than 3 or 4 when it reads the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Wrap a pixel buffer.
    ///
    /// # Errors
    ///
    /// [`PaletteError::GridSize`] unless `data.len() == width * height * channels`.
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self, PaletteError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(channels as usize));
        if expected != Some(data.len()) {
            return Err(PaletteError::GridSize {
                width,
                height,
                channels,
                expected: expected.unwrap_or(usize::MAX),
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channels per pixel.
    #[inline]
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw row-major bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over pixels in row-major order, one `channels`-byte slice each.
    ///
    /// Yields nothing for a zero-channel grid, whose buffer is always empty.
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact((self.channels as usize).max(1))
    }
}
