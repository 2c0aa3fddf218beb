//! Light and dark color palettes

use ratatui::style::Color;

/// Colors used by every screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub card: Color,
    pub input_outline: Color,
    pub active_outline: Color,
    pub button_background: Color,
    pub placeholder: Color,
    pub secondary: Color,
    pub error: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(0xFF, 0xFF, 0xFF),
    text: Color::Rgb(0x00, 0x00, 0x00),
    card: Color::Rgb(0xF8, 0xF9, 0xFA),
    input_outline: Color::Rgb(0xCE, 0xD4, 0xDA),
    active_outline: Color::Rgb(0x00, 0x56, 0xB3),
    button_background: Color::Rgb(0x00, 0x7B, 0xFF),
    placeholder: Color::Rgb(0x6C, 0x75, 0x7D),
    secondary: Color::Rgb(0x1E, 0x90, 0xFF),
    error: Color::Rgb(0xDC, 0x35, 0x45),
};

const DARK: Palette = Palette {
    background: Color::Rgb(0x34, 0x3A, 0x40),
    text: Color::Rgb(0xFF, 0xFF, 0xFF),
    card: Color::Rgb(0x49, 0x50, 0x57),
    input_outline: Color::Rgb(0xAD, 0xB5, 0xBD),
    active_outline: Color::Rgb(0x4D, 0xA3, 0xFF),
    button_background: Color::Rgb(0x6C, 0x75, 0x7D),
    placeholder: Color::Rgb(0xCE, 0xD4, 0xDA),
    secondary: Color::Rgb(0x1E, 0x90, 0xFF),
    error: Color::Rgb(0xFF, 0x6B, 0x6B),
};

/// Shared theme value, injected read-only into rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Self::Dark
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }

    /// Icon hinting at what toggling would switch to
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert!(!Theme::default().is_dark());
    }

    #[test]
    fn test_toggle_round_trips() {
        let theme = Theme::Light.toggle();
        assert_eq!(theme, Theme::Dark);
        assert_eq!(theme.toggle(), Theme::Light);
    }

    #[test]
    fn test_from_dark_mode() {
        assert_eq!(Theme::from_dark_mode(true), Theme::Dark);
        assert_eq!(Theme::from_dark_mode(false), Theme::Light);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
        assert_eq!(Theme::Dark.palette().text, Color::Rgb(0xFF, 0xFF, 0xFF));
    }
}
