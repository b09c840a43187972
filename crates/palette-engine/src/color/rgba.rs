//! RGBA color value

use std::fmt;
use std::str::FromStr;

use super::hex::{self, ParseColorError};

/// An 8-bit-per-channel RGBA color.
///
/// Colors are plain values: two colors are equal iff all four channels
/// match. Sources that carry no alpha information produce fully opaque
/// colors (`alpha == 0xFF`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
    /// Alpha channel (0 = transparent, 255 = opaque)
    pub alpha: u8,
}

impl Color {
    /// Alpha value used when a source omits the alpha channel.
    pub const OPAQUE: u8 = 0xFF;

    /// Create a color from all four channels.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a fully opaque color.
    ///
    /// ```
    /// use palette_engine::Color;
    /// assert_eq!(Color::opaque(1, 2, 3), Color::new(1, 2, 3, 255));
    /// ```
    #[inline]
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, Self::OPAQUE)
    }

    /// Create a color from `[R, G, B, A]` bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to `[R, G, B, A]` bytes.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

impl fmt::Display for Color {
    /// Canonical form: eight uppercase hex digits, `RRGGBBAA`, no `#`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}{:02X}{:02X}{:02X}",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex::parse(s)
    }
}

impl From<[u8; 4]> for Color {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        color.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_requires_all_channels() {
        let base = Color::new(10, 20, 30, 40);
        assert_eq!(base, Color::new(10, 20, 30, 40));
        assert_ne!(base, Color::new(11, 20, 30, 40));
        assert_ne!(base, Color::new(10, 21, 30, 40));
        assert_ne!(base, Color::new(10, 20, 31, 40));
        assert_ne!(base, Color::new(10, 20, 30, 41));
    }

    #[test]
    fn test_bytes_channel_order() {
        let color = Color::from_bytes([0x12, 0x34, 0x56, 0x78]);
        assert_eq!(color.red, 0x12);
        assert_eq!(color.green, 0x34);
        assert_eq!(color.blue, 0x56);
        assert_eq!(color.alpha, 0x78);
        assert_eq!(color.to_bytes(), [0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn test_display_is_uppercase_and_padded() {
        assert_eq!(Color::new(0, 0x0A, 0xBC, 0xFF).to_string(), "000ABCFF");
    }

    #[test]
    fn test_from_str_delegates_to_hex() {
        let color: Color = "#00112233".parse().unwrap();
        assert_eq!(color, Color::new(0x00, 0x11, 0x22, 0x33));
        assert!("nope".parse::<Color>().is_err());
    }
}
