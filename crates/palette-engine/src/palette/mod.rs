//! Palette types
//!
//! [`ColorSet`] accumulates unique colors in encounter order;
//! [`PaletteError`] covers every way building or converting one can fail.

mod color_set;
mod error;

pub use color_set::{ColorSet, InsertOutcome, Iter, DEFAULT_CAPACITY};
pub use error::PaletteError;
