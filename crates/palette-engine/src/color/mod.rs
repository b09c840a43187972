//! Color value type and hex codec
//!
//! [`Color`] is a plain RGBA value with four 8-bit channels. The [`hex`]
//! submodule converts between colors and their textual form.
//!
//! # Example
//!
//! ```
//! use palette_engine::Color;
//!
//! let red: Color = "#ff0000".parse().unwrap();
//! assert_eq!(red.alpha, 0xFF);
//! assert_eq!(red.to_string(), "FF0000FF");
//! ```

pub mod hex;
mod rgba;

pub use hex::ParseColorError;
pub use rgba::Color;
