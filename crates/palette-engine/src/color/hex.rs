//! Hex color strings
//!
//! Grammar: an optional leading `#` followed by exactly 6 (`RRGGBB`) or 8
//! (`RRGGBBAA`) hex digits, case-insensitive, and nothing else. No
//! whitespace is trimmed.
//!
//! [`format`] always produces the canonical `RRGGBBAA` form. For 6-digit
//! input, `format(parse(s))` reproduces the RGB digits (uppercased) and
//! appends `FF`, since the alpha channel is synthesized.

use thiserror::Error;

use super::Color;

/// Error returned when a string does not match the hex color grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Wrong digit count, a non-hex character, or trailing content.
    #[error("invalid hex color {0:?} (expected RRGGBB or RRGGBBAA, optional leading '#')")]
    InvalidFormat(String),
}

/// Strip the optional `#` and return the digits if they form a valid color.
fn digits(s: &str) -> Option<&str> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    let valid_len = digits.len() == 6 || digits.len() == 8;
    (valid_len && digits.bytes().all(|b| b.is_ascii_hexdigit())).then_some(digits)
}

/// Check whether `s` is a valid hex color string.
///
/// ```
/// use palette_engine::color::hex::validate;
/// assert!(validate("#a1b2c3"));
/// assert!(validate("A1B2C3D4"));
/// assert!(!validate("#a1b2c3d"));
/// assert!(!validate("##a1b2c3"));
/// ```
pub fn validate(s: &str) -> bool {
    digits(s).is_some()
}

/// Parse a hex color string.
///
/// Six digits yield an opaque color; eight digits carry their own alpha.
///
/// # Errors
///
/// [`ParseColorError::InvalidFormat`] whenever [`validate`] would reject `s`.
pub fn parse(s: &str) -> Result<Color, ParseColorError> {
    let digits = digits(s).ok_or_else(|| ParseColorError::InvalidFormat(s.to_string()))?;
    let channel = |i: usize| -> Result<u8, ParseColorError> {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| ParseColorError::InvalidFormat(s.to_string()))
    };

    let alpha = match digits.len() {
        8 => channel(6)?,
        _ => Color::OPAQUE,
    };
    Ok(Color::new(channel(0)?, channel(2)?, channel(4)?, alpha))
}

/// Format a color in canonical form: `RRGGBBAA`, uppercase, no `#`.
pub fn format(color: Color) -> String {
    color.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_both_lengths() {
        for s in ["aabbcc", "#aabbcc", "AABBCCDD", "#aAbBcCdD", "000000", "#FFFFFFFF"] {
            assert!(validate(s), "{s:?} should be valid");
        }
    }

    #[test]
    fn test_validate_rejects_malformed() {
        for s in [
            "",
            "#",
            "abc",
            "#abcd",
            "aabbccd",
            "#aabbccd",
            "aabbccddee",
            "aabbccdd0",
            "##aabbcc",
            "aab#bcc",
            "aabbcc#",
            "GG0000",
            " aabbcc",
            "aabbcc ",
            "aabbcc\n",
            "+abbcc",
            "ａａbbcc",
        ] {
            assert!(!validate(s), "{s:?} should be invalid");
        }
    }

    #[test]
    fn test_parse_six_digits_is_opaque() {
        let color = parse("#ff0000").unwrap();
        assert_eq!(color, Color::new(0xFF, 0x00, 0x00, 0xFF));
        assert_eq!(format(color), "FF0000FF");
    }

    #[test]
    fn test_parse_eight_digits_keeps_alpha() {
        let color = parse("0a1B2c3D").unwrap();
        assert_eq!(color, Color::new(0x0A, 0x1B, 0x2C, 0x3D));
        assert_eq!(format(color), "0A1B2C3D");
    }

    #[test]
    fn test_parse_channel_order() {
        let color = parse("102030").unwrap();
        assert_eq!((color.red, color.green, color.blue), (0x10, 0x20, 0x30));
    }

    #[test]
    fn test_parse_rejects_what_validate_rejects() {
        for s in ["", "#12345", "1234567", "123456789", "#12#456", "zz0000"] {
            assert_eq!(
                parse(s),
                Err(ParseColorError::InvalidFormat(s.to_string())),
                "{s:?}"
            );
        }
    }

    #[test]
    fn test_error_message_names_input() {
        let err = parse("GG0000").unwrap_err();
        assert!(err.to_string().contains("\"GG0000\""));
    }
}
