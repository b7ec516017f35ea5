//! Color palettes for the three themes.
//!
//! The default theme is black, cuphead is red and mugman is blue; every
//! screen reads its colors from the active [`Palette`].

use ratatui::style::Color;

use crate::models::ThemeId;

/// Colors used by every screen for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub background: Color,
    /// Header bar and selected-row background
    pub surface: Color,
    /// Borders and section titles
    pub accent: Color,
    /// Regular text
    pub text: Color,
    /// Hints and secondary text
    pub dim: Color,
    /// Filled stars and the favorite marker
    pub star: Color,
}

/// Health bar fill.
pub const COLOR_HEALTH: Color = Color::Rgb(198, 40, 40);

/// Health bar track.
pub const COLOR_HEALTH_TRACK: Color = Color::Black;

/// Weapon popup background.
pub const COLOR_POPUP_BG: Color = Color::Rgb(33, 33, 33);

/// Palette for `theme`.
pub fn palette(theme: ThemeId) -> Palette {
    match theme {
        ThemeId::Default => Palette {
            background: Color::Rgb(18, 18, 18),
            surface: Color::Rgb(48, 48, 48),
            accent: Color::Gray,
            text: Color::White,
            dim: Color::DarkGray,
            star: Color::Yellow,
        },
        ThemeId::Cuphead => Palette {
            background: Color::Rgb(120, 20, 24),
            surface: Color::Rgb(170, 36, 40),
            accent: Color::Rgb(255, 205, 210),
            text: Color::White,
            dim: Color::Rgb(230, 150, 150),
            star: Color::Yellow,
        },
        ThemeId::Mugman => Palette {
            background: Color::Rgb(16, 42, 110),
            surface: Color::Rgb(30, 70, 160),
            accent: Color::Rgb(187, 222, 251),
            text: Color::White,
            dim: Color::Rgb(140, 170, 220),
            star: Color::Yellow,
        },
    }
}

/// Expand the CSS shorthand `#rgb`, which ratatui's parser does not accept.
fn expand_short_hex(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#').filter(|h| h.len() == 3 && h.is_ascii())?;
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    Some(Color::Rgb(channel(0)?, channel(1)?, channel(2)?))
}

/// Display color of a weapon: `#rgb`, anything ratatui parses (`#rrggbb`,
/// color names), or white.
pub fn weapon_color(value: &str) -> Color {
    let value = value.trim();
    expand_short_hex(value)
        .or_else(|| value.parse::<Color>().ok())
        .unwrap_or(Color::White)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        let backgrounds: Vec<_> = ThemeId::ALL.iter().map(|t| palette(*t).background).collect();
        assert_ne!(backgrounds[0], backgrounds[1]);
        assert_ne!(backgrounds[1], backgrounds[2]);
    }

    #[test]
    fn test_expand_short_hex() {
        assert_eq!(expand_short_hex("#fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(expand_short_hex("#1a3"), Some(Color::Rgb(0x11, 0xaa, 0x33)));
        assert_eq!(expand_short_hex("#e53935"), None);
        assert_eq!(expand_short_hex("#zzz"), None);
    }

    #[test]
    fn test_weapon_color_fallbacks() {
        assert_eq!(weapon_color("red"), Color::Red);
        assert_eq!(weapon_color("#00ff00"), Color::Rgb(0, 255, 0));
        assert_eq!(weapon_color(" #e53935 "), Color::Rgb(0xe5, 0x39, 0x35));
        assert_eq!(weapon_color("#f00"), Color::Rgb(255, 0, 0));
        assert_eq!(weapon_color("#12345"), Color::White);
        assert_eq!(weapon_color("not a color"), Color::White);
    }
}
