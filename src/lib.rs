//! Palkit - palette tools
//!
//! Extracts the distinct colors of PNG images, collects hex color tokens
//! from text, and turns hex color lists into single-row palette PNGs.
//! The palette logic lives in the `palette-engine` crate; this library
//! adds the PNG codec, configuration and the file-level workflows, and is
//! exposed for integration testing.

pub mod codec;
pub mod error;
pub mod models;
pub mod services;
