//! Image codec used by the workflows.
//!
//! Only PNG is supported. Decoding always yields a 3- or 4-channel grid,
//! encoding always writes 8-bit RGBA.

pub mod png_codec;

pub use png_codec::{decode, decode_with_limit, encode, EncodeOptions, DEFAULT_DECODE_LIMIT};
