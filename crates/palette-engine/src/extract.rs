//! Pixel grid to palette extraction.
//!
//! A single row-major pass over the grid: every pixel becomes a [`Color`]
//! (alpha synthesized as `0xFF` for RGB grids) and is offered to
//! [`ColorSet::insert`]. The grid is never modified.

use crate::color::Color;
use crate::grid::PixelGrid;
use crate::palette::{ColorSet, PaletteError};

/// Counters from one extraction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Pixels visited
    pub pixels: usize,
    /// Colors that were new to the set
    pub inserted: usize,
}

/// Read the color of one pixel from a 3- or 4-byte slice.
#[inline]
fn pixel_color(px: &[u8]) -> Color {
    match *px {
        [r, g, b, a] => Color::new(r, g, b, a),
        [r, g, b] => Color::opaque(r, g, b),
        _ => unreachable!("channel count is checked before the pass"),
    }
}

/// Add every distinct color of `grid` to `set`, in row-major order.
///
/// Colors already in `set` are skipped, so several grids can be folded
/// into one palette by calling this repeatedly.
///
/// # Errors
///
/// - [`PaletteError::UnsupportedChannelCount`] if the grid does not have 3
///   or 4 channels. Checked before any pixel is read, so `set` is untouched.
/// - [`PaletteError::OutOfMemory`] if the set cannot grow. Colors inserted
///   before the failure stay in `set`.
pub fn extract_into(grid: &PixelGrid, set: &mut ColorSet) -> Result<ExtractSummary, PaletteError> {
    let channels = grid.channels();
    if channels != 3 && channels != 4 {
        return Err(PaletteError::UnsupportedChannelCount { channels });
    }

    let mut summary = ExtractSummary::default();
    for px in grid.pixels() {
        summary.pixels += 1;
        if set.insert(pixel_color(px))?.is_inserted() {
            summary.inserted += 1;
        }
    }
    Ok(summary)
}

/// Extract the palette of a single grid into a fresh [`ColorSet`].
///
/// ```
/// use palette_engine::{extract_palette, PixelGrid};
///
/// let grid = PixelGrid::new(2, 1, 4, vec![10, 20, 30, 255, 10, 20, 30, 255]).unwrap();
/// assert_eq!(extract_palette(&grid).unwrap().len(), 1);
/// ```
pub fn extract_palette(grid: &PixelGrid) -> Result<ColorSet, PaletteError> {
    let mut set = ColorSet::new();
    extract_into(grid, &mut set)?;
    Ok(set)
}
