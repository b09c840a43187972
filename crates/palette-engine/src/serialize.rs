//! Palette serialization
//!
//! A palette image is a single row of RGBA pixels, one per color, in
//! palette order. [`to_grid`] builds that row from a [`ColorSet`];
//! [`from_grid`] reads one back. [`from_text_lines`] builds a set from a
//! text palette list (one hex color per line, blank lines ignored).

use crate::color::hex;
use crate::extract::extract_palette;
use crate::grid::PixelGrid;
use crate::palette::{ColorSet, PaletteError};

/// Channels per pixel in a palette image.
pub const PALETTE_CHANNELS: u8 = 4;

/// Lay the palette out as a 1xN RGBA grid.
///
/// Column `i` holds the bytes of `set.get(i)`.
///
/// # Errors
///
/// - [`PaletteError::EmptySet`] if `set` has no colors.
/// - [`PaletteError::OutOfMemory`] if the pixel buffer cannot be allocated.
pub fn to_grid(set: &ColorSet) -> Result<PixelGrid, PaletteError> {
    if set.is_empty() {
        return Err(PaletteError::EmptySet);
    }
    let width = u32::try_from(set.len()).map_err(|_| PaletteError::OutOfMemory)?;

    let mut data = Vec::new();
    data.try_reserve_exact(set.len() * PALETTE_CHANNELS as usize)
        .map_err(|_| PaletteError::OutOfMemory)?;
    for color in set {
        data.extend_from_slice(&color.to_bytes());
    }
    PixelGrid::new(width, 1, PALETTE_CHANNELS, data)
}

/// Rebuild a palette from a palette image grid.
///
/// Any grid shape is accepted; pixels are read row-major and duplicates are
/// dropped, so a grid produced by [`to_grid`] yields the original set.
pub fn from_grid(grid: &PixelGrid) -> Result<ColorSet, PaletteError> {
    extract_palette(grid)
}

/// Build a palette from the lines of a text palette list.
///
/// Each line may end in a single `\n`, which is stripped; nothing else is
/// trimmed. Empty lines are skipped. Every other line must be a valid hex
/// color.
///
/// # Errors
///
/// [`PaletteError::Format`] with the 1-based number of the first invalid
/// line. No partial palette is returned.
///
/// ```
/// use palette_engine::from_text_lines;
///
/// let set = from_text_lines(["AABBCCDD", "", "#aabbccdd", "00112233"]).unwrap();
/// assert_eq!(set.to_string(), "AABBCCDD\n00112233\n");
///
/// let err = from_text_lines(["000000", "111111", "GG0000"]).unwrap_err();
/// assert_eq!(err.line(), Some(3));
/// ```
pub fn from_text_lines<I, S>(lines: I) -> Result<ColorSet, PaletteError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut set = ColorSet::new();
    for (i, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let line = line.strip_suffix('\n').unwrap_or(line);
        if line.is_empty() {
            continue;
        }
        let color = hex::parse(line).map_err(|source| PaletteError::Format { line: i + 1, source })?;
        set.insert(color)?;
    }
    Ok(set)
}

/// Build a palette from a whole text palette list.
///
/// Lines are split on `\n` only, so a `\r` before the newline makes the
/// line invalid.
pub fn from_text(text: &str) -> Result<ColorSet, PaletteError> {
    from_text_lines(text.split_inclusive('\n'))
}
