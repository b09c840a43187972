//! Error types for palette operations

use thiserror::Error;

use crate::color::ParseColorError;

/// Error type for palette construction, extraction and serialization.
///
/// Every failure leaves any [`ColorSet`](super::ColorSet) involved exactly
/// as it was before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// Backing storage could not grow
    #[error("out of memory while growing palette storage")]
    OutOfMemory,

    /// Index past the end of the palette
    #[error("palette index {index} out of range (length {len})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Palette length at the time of the call
        len: usize,
    },

    /// Attempt to serialize a palette with no colors
    #[error("palette is empty")]
    EmptySet,

    /// Pixel grid with a channel count other than 3 or 4
    #[error("unsupported channel count {channels} (expected 3 or 4)")]
    UnsupportedChannelCount {
        /// Channel count reported by the grid
        channels: u8,
    },

    /// Malformed line in a text palette list
    #[error("line {line}: {source}")]
    Format {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        #[source]
        source: ParseColorError,
    },

    /// Pixel buffer length disagrees with the grid dimensions
    #[error("pixel buffer holds {actual} bytes, {width}x{height}x{channels} needs {expected}")]
    GridSize {
        /// Grid width in pixels
        width: u32,
        /// Grid height in pixels
        height: u32,
        /// Channels per pixel
        channels: u8,
        /// Byte count implied by the dimensions
        expected: usize,
        /// Byte count actually supplied
        actual: usize,
    },
}

impl PaletteError {
    /// Line number of a [`PaletteError::Format`] error.
    pub fn line(&self) -> Option<usize> {
        match self {
            PaletteError::Format { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_display_and_line() {
        let err = PaletteError::Format {
            line: 3,
            source: ParseColorError::InvalidFormat("GG0000".to_string()),
        };
        assert_eq!(err.line(), Some(3));
        assert!(err.to_string().starts_with("line 3: invalid hex color"));
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = PaletteError::IndexOutOfRange { index: 5, len: 2 };
        assert_eq!(err.to_string(), "palette index 5 out of range (length 2)");
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_unsupported_channel_count_display() {
        let err = PaletteError::UnsupportedChannelCount { channels: 2 };
        assert_eq!(err.to_string(), "unsupported channel count 2 (expected 3 or 4)");
    }
}
