// Neonfolio theme context
//
// The dark/light switch is an explicit value handed to whoever renders, so a
// toggle can be exercised without any global state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour scheme of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Parse from CLI or config string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// Icon for the toggle button: offers the opposite scheme
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

/// RGB triple used by the renderers
pub type Rgb = (u8, u8, u8);

/// Resolved colours for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgb,
    pub accent: Rgb,
    pub success: Rgb,
    pub foreground: Rgb,
    pub muted: Rgb,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Palette {
                primary: (0, 255, 255),
                accent: (255, 0, 255),
                success: (0, 255, 136),
                foreground: (230, 230, 240),
                muted: (120, 130, 150),
            },
            Theme::Light => Palette {
                primary: (0, 130, 160),
                accent: (170, 0, 140),
                success: (0, 140, 80),
                foreground: (20, 20, 30),
                muted: (100, 100, 110),
            },
        }
    }
}

/// Theme state handed to consumers.
///
/// `colored` is false when output is not a terminal (or in tests) so renderers
/// can skip escape sequences entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeContext {
    theme: Theme,
    colored: bool,
}

impl ThemeContext {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            colored: true,
        }
    }

    /// A context that renders without colours
    pub fn plain(theme: Theme) -> Self {
        Self {
            theme,
            colored: false,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.theme)
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        let ctx = ThemeContext::default();
        assert_eq!(ctx.theme(), Theme::Dark);
        assert!(ctx.is_colored());
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut ctx = ThemeContext::plain(Theme::Dark);
        assert_eq!(ctx.toggle(), Theme::Light);
        assert_eq!(ctx.palette(), Palette::for_theme(Theme::Light));
        assert_eq!(ctx.toggle(), Theme::Dark);
    }

    #[test]
    fn test_contexts_are_independent() {
        let mut a = ThemeContext::default();
        let b = ThemeContext::default();
        a.toggle();
        assert_ne!(a.theme(), b.theme());
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!(Theme::from_str("LIGHT"), Some(Theme::Light));
        assert_eq!(Theme::from_str("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_str("sepia"), None);
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
