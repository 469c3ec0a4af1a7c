//! Color values for styled text.
//!
//! A [`TextColor`] is either one of the sixteen palette entries described by
//! [`Formatting`] or an explicit 24-bit RGB value.

use std::fmt;

use phf::phf_map;

use crate::error::ColorError;

/// Largest value representable as a 24-bit RGB color.
pub const MAX_RGB: u32 = 0xFF_FFFF;

/// The sixteen standard palette colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Formatting {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

/// Palette names, including aliases accepted on lookup.
static PALETTE_NAMES: phf::Map<&'static str, Formatting> = phf_map! {
    "black" => Formatting::Black,
    "dark_blue" => Formatting::DarkBlue,
    "dark_green" => Formatting::DarkGreen,
    "dark_aqua" => Formatting::DarkAqua,
    "dark_red" => Formatting::DarkRed,
    "dark_purple" => Formatting::DarkPurple,
    "gold" => Formatting::Gold,
    "gray" => Formatting::Gray,
    "grey" => Formatting::Gray,
    "dark_gray" => Formatting::DarkGray,
    "dark_grey" => Formatting::DarkGray,
    "blue" => Formatting::Blue,
    "green" => Formatting::Green,
    "aqua" => Formatting::Aqua,
    "red" => Formatting::Red,
    "light_purple" => Formatting::LightPurple,
    "yellow" => Formatting::Yellow,
    "white" => Formatting::White,
};

impl Formatting {
    /// Every palette entry, ordered by format code.
    pub const ALL: [Formatting; 16] = [
        Formatting::Black,
        Formatting::DarkBlue,
        Formatting::DarkGreen,
        Formatting::DarkAqua,
        Formatting::DarkRed,
        Formatting::DarkPurple,
        Formatting::Gold,
        Formatting::Gray,
        Formatting::DarkGray,
        Formatting::Blue,
        Formatting::Green,
        Formatting::Aqua,
        Formatting::Red,
        Formatting::LightPurple,
        Formatting::Yellow,
        Formatting::White,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Formatting::Black => "black",
            Formatting::DarkBlue => "dark_blue",
            Formatting::DarkGreen => "dark_green",
            Formatting::DarkAqua => "dark_aqua",
            Formatting::DarkRed => "dark_red",
            Formatting::DarkPurple => "dark_purple",
            Formatting::Gold => "gold",
            Formatting::Gray => "gray",
            Formatting::DarkGray => "dark_gray",
            Formatting::Blue => "blue",
            Formatting::Green => "green",
            Formatting::Aqua => "aqua",
            Formatting::Red => "red",
            Formatting::LightPurple => "light_purple",
            Formatting::Yellow => "yellow",
            Formatting::White => "white",
        }
    }

    /// Legacy single-character format code (`0`-`9`, `a`-`f`).
    pub fn code(self) -> char {
        let index = self as u32;
        // ALL has sixteen entries, so the digit is always valid.
        char::from_digit(index, 16).unwrap_or('f')
    }

    /// Fixed 24-bit value of this palette entry.
    pub fn rgb(self) -> u32 {
        match self {
            Formatting::Black => 0x000000,
            Formatting::DarkBlue => 0x0000AA,
            Formatting::DarkGreen => 0x00AA00,
            Formatting::DarkAqua => 0x00AAAA,
            Formatting::DarkRed => 0xAA0000,
            Formatting::DarkPurple => 0xAA00AA,
            Formatting::Gold => 0xFFAA00,
            Formatting::Gray => 0xAAAAAA,
            Formatting::DarkGray => 0x555555,
            Formatting::Blue => 0x5555FF,
            Formatting::Green => 0x55FF55,
            Formatting::Aqua => 0x55FFFF,
            Formatting::Red => 0xFF5555,
            Formatting::LightPurple => 0xFF55FF,
            Formatting::Yellow => 0xFFFF55,
            Formatting::White => 0xFFFFFF,
        }
    }

    /// Look up a palette entry by name, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ekho::Formatting;
    ///
    /// assert_eq!(Formatting::from_name("Dark_Red"), Some(Formatting::DarkRed));
    /// assert_eq!(Formatting::from_name("grey"), Some(Formatting::Gray));
    /// assert_eq!(Formatting::from_name("magenta"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Formatting> {
        PALETTE_NAMES
            .get(name.trim().to_ascii_lowercase().as_str())
            .copied()
    }

    /// Look up a palette entry by its format code.
    pub fn from_code(code: char) -> Option<Formatting> {
        let index = code.to_digit(16)?;
        Self::ALL.get(index as usize).copied()
    }
}

impl fmt::Display for Formatting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved text color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextColor {
    /// One of the fixed palette entries.
    Palette(Formatting),
    /// Explicit 24-bit RGB value.
    Rgb(u32),
}

impl TextColor {
    /// Color used when an explicit value cannot be represented.
    pub const DEFAULT: TextColor = TextColor::Palette(Formatting::White);

    /// Create a color from a palette entry.
    pub fn from_formatting(formatting: Formatting) -> Self {
        TextColor::Palette(formatting)
    }

    /// Create a color from a 24-bit RGB value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ekho::TextColor;
    ///
    /// assert_eq!(TextColor::from_rgb(0xFF00FF), Ok(TextColor::Rgb(0xFF00FF)));
    /// assert!(TextColor::from_rgb(0x1_000_000).is_err());
    /// ```
    pub fn from_rgb(rgb: u32) -> Result<Self, ColorError> {
        if rgb > MAX_RGB {
            return Err(ColorError::OutOfRange(rgb));
        }
        Ok(TextColor::Rgb(rgb))
    }

    /// Parse a color from `#RRGGBB` or a palette name.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let input = input.trim();

        if let Some(hex) = input.strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ColorError::InvalidHex(input.to_string()));
            }
            let rgb = u32::from_str_radix(hex, 16)
                .map_err(|_| ColorError::InvalidHex(input.to_string()))?;
            return Self::from_rgb(rgb);
        }

        Formatting::from_name(input)
            .map(TextColor::Palette)
            .ok_or_else(|| ColorError::UnknownName(input.to_string()))
    }

    /// The 24-bit value of this color.
    pub fn rgb(&self) -> u32 {
        match self {
            TextColor::Palette(formatting) => formatting.rgb(),
            TextColor::Rgb(rgb) => *rgb,
        }
    }

    /// Split into `(r, g, b)` components.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let [_, r, g, b] = self.rgb().to_be_bytes();
        (r, g, b)
    }
}

impl From<Formatting> for TextColor {
    fn from(formatting: Formatting) -> Self {
        TextColor::Palette(formatting)
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextColor::Palette(formatting) => f.write_str(formatting.name()),
            TextColor::Rgb(rgb) => write!(f, "#{rgb:06X}"),
        }
    }
}
