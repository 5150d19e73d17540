//! Theme system for the dashboard.
//!
//! Provides:
//! - `ThemeMode` - the two-valued light/dark state with its toggle glyph
//! - `Palette` - the UI colors each mode resolves to
//! - Hex color parsing for config accent overrides

use ratatui::style::Color;
use thiserror::Error;

/// The two reachable theme states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::Light
    }
}

impl ThemeMode {
    /// Stored/displayed name of this mode.
    pub fn as_name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored name. Unknown names are `None`; callers coerce to
    /// light and warn.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown on the toggle control. Shows the theme the toggle will
    /// switch to, matching the moon-while-light convention.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    /// Color palette for this mode.
    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette::light(),
            Self::Dark => Palette::dark(),
        }
    }
}

/// UI colors for one theme mode.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Main background color
    pub background: Color,
    /// Primary text color
    pub foreground: Color,
    /// Card/panel border color
    pub border: Color,
    /// Accent color (greeting, highlights, focused control)
    pub accent: Color,
    /// Dimmed text (help line, secondary info)
    pub dimmed: Color,
    /// Control button text
    pub control_fg: Color,
    /// Control button background
    pub control_bg: Color,
}

impl Palette {
    /// Light palette - warm paper tones.
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(250, 247, 240),  // #faf7f0
            foreground: Color::Rgb(51, 48, 47),     // #33302f
            border: Color::Rgb(203, 195, 182),      // #cbc3b6
            accent: Color::Rgb(180, 83, 9),         // #b45309 (amber)
            dimmed: Color::Rgb(120, 113, 108),      // #78716c
            control_fg: Color::Rgb(51, 48, 47),     // #33302f
            control_bg: Color::Rgb(231, 225, 213),  // #e7e1d5
        }
    }

    /// Dark palette - low-light slate tones.
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(13, 17, 22),     // #0d1116
            foreground: Color::Rgb(229, 234, 241),  // #e5eaf1
            border: Color::Rgb(55, 65, 81),         // #374151
            accent: Color::Rgb(251, 191, 36),       // #fbbf24 (bright amber)
            dimmed: Color::Rgb(156, 163, 175),      // #9ca3af
            control_fg: Color::Rgb(229, 234, 241),  // #e5eaf1
            control_bg: Color::Rgb(20, 28, 42),     // #141c2a
        }
    }

    /// Replace the accent color, used for config overrides.
    pub fn with_accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }
}

/// Color parsing error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("invalid color length (expected 3 or 6 hex chars)")]
    InvalidLength,
    #[error("invalid hex character")]
    InvalidHex,
}

/// Parse a hex color string to a Color.
/// Supports: #rrggbb, #rgb, rrggbb, rgb
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim().trim_start_matches('#');

    let channel = |part: &str| u8::from_str_radix(part, 16).map_err(|_| ColorError::InvalidHex);

    match s.len() {
        // #rgb shorthand, each nibble doubled
        3 => {
            let r = channel(&s[0..1])?;
            let g = channel(&s[1..2])?;
            let b = channel(&s[2..3])?;
            Ok(Color::Rgb(r * 17, g * 17, b * 17))
        }
        6 => {
            let r = channel(&s[0..2])?;
            let g = channel(&s[2..4])?;
            let b = channel(&s[4..6])?;
            Ok(Color::Rgb(r, g, b))
        }
        _ => Err(ColorError::InvalidLength),
    }
}

/// Serde deserializer for optional hex colors in config.
pub mod serde_color {
    use super::*;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        match opt {
            Some(s) => parse_hex_color(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(ThemeMode::from_name("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_name("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_name(" DARK "), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_name("purple"), None);
        assert_eq!(ThemeMode::from_name(""), None);
    }

    #[test]
    fn test_opposite_round_trip() {
        assert_eq!(ThemeMode::Light.opposite(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.opposite(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.opposite().opposite(), ThemeMode::Light);
    }

    #[test]
    fn test_glyphs_differ() {
        assert_ne!(ThemeMode::Light.glyph(), ThemeMode::Dark.glyph());
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_parse_hex_6() {
        assert_eq!(parse_hex_color("#ff0000"), Ok(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("00ff00"), Ok(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_hex_color("#0d1116"), Ok(Color::Rgb(13, 17, 22)));
    }

    #[test]
    fn test_parse_hex_3() {
        assert_eq!(parse_hex_color("#f00"), Ok(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("0f0"), Ok(Color::Rgb(0, 255, 0)));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert_eq!(parse_hex_color("invalid"), Err(ColorError::InvalidLength));
        assert_eq!(parse_hex_color("#gg0000"), Err(ColorError::InvalidHex));
        assert_eq!(parse_hex_color("#ff00"), Err(ColorError::InvalidLength));
    }

    #[test]
    fn test_accent_override() {
        let palette = Palette::light().with_accent(Color::Rgb(1, 2, 3));
        assert_eq!(palette.accent, Color::Rgb(1, 2, 3));
    }
}
