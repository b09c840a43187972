//! palette-engine: lossless RGBA palette extraction and serialization
//!
//! This crate moves sets of colors between three representations:
//!
//! - hex strings (`RRGGBB` / `RRGGBBAA`, optional `#`), see [`color::hex`]
//! - decoded pixel grids from an image codec, see [`extract_palette`]
//! - single-row palette images, see [`to_grid`] and [`from_grid`]
//!
//! All of them meet in [`ColorSet`], an insertion-ordered collection of
//! unique colors. Image file formats are not handled here: callers decode
//! into a [`PixelGrid`] and encode from one.
//!
//! # Example
//!
//! ```
//! use palette_engine::{extract_palette, from_text_lines, to_grid, PixelGrid};
//!
//! // text list -> palette -> 1xN RGBA row
//! let set = from_text_lines(["#ff0000", "00ff00", "FF0000FF"]).unwrap();
//! let row = to_grid(&set).unwrap();
//! assert_eq!((row.width(), row.height(), row.channels()), (2, 1, 4));
//!
//! // decoded image -> palette
//! let grid = PixelGrid::new(3, 1, 3, vec![0, 0, 0, 9, 9, 9, 0, 0, 0]).unwrap();
//! let palette = extract_palette(&grid).unwrap();
//! assert_eq!(palette.to_string(), "000000FF\n090909FF\n");
//! ```

pub mod color;
mod extract;
mod grid;
pub mod palette;
mod scan;
mod serialize;


pub use color::{Color, ParseColorError};
pub use extract::{extract_into, extract_palette, ExtractSummary};
pub use grid::PixelGrid;
pub use palette::{ColorSet, InsertOutcome, PaletteError};
pub use scan::{scan_hex_tokens, scan_into, HexTokens};
pub use serialize::{from_grid, from_text, from_text_lines, to_grid, PALETTE_CHANNELS};
