//! Hex color tokens in free text.
//!
//! A token is a `#` followed by a run of hex digits. Runs of exactly 6 or 8
//! digits are colors; any other run length (`#fff`, `#1234567890`) is not a
//! color and is skipped as a whole.

use crate::color::{hex, Color};
use crate::palette::{ColorSet, PaletteError};

/// Iterator over the color tokens of a text, see [`scan_hex_tokens`].
#[derive(Debug, Clone)]
pub struct HexTokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for HexTokens<'a> {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        loop {
            let hash = self.rest.find('#')?;
            let after = &self.rest[hash + 1..];
            let run = after
                .bytes()
                .position(|b| !b.is_ascii_hexdigit())
                .unwrap_or(after.len());
            // a '#' ending the run is left in place to start the next token
            self.rest = &after[run..];
            if run == 6 || run == 8 {
                if let Ok(color) = hex::parse(&after[..run]) {
                    return Some(color);
                }
            }
        }
    }
}

/// Find every color token in `text`, in order of appearance.
///
/// Duplicates are yielded as often as they appear.
///
/// ```
/// use palette_engine::{scan_hex_tokens, Color};
///
/// let css = "a { color: #ff0000; background: #fff; border-color: #00FF0080 }";
/// let found: Vec<Color> = scan_hex_tokens(css).collect();
/// assert_eq!(found, vec![Color::opaque(255, 0, 0), Color::new(0, 255, 0, 0x80)]);
/// ```
pub fn scan_hex_tokens(text: &str) -> HexTokens<'_> {
    HexTokens { rest: text }
}

/// Add every color token in `text` to `set`.
///
/// Returns how many tokens were new to the set.
///
/// # Errors
///
/// [`PaletteError::OutOfMemory`] if the set cannot grow.
pub fn scan_into(text: &str, set: &mut ColorSet) -> Result<usize, PaletteError> {
    let mut inserted = 0;
    for color in scan_hex_tokens(text) {
        if set.insert(color)?.is_inserted() {
            inserted += 1;
        }
    }
    Ok(inserted)
}
