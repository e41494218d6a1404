// Neonfolio notifications
//
// Short toasts raised by the contact form: sent, failed, rejected by
// validation. Colours come from the active theme.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::theme::{Palette, Rgb, ThemeContext};

const WARNING_RGB: Rgb = (250, 204, 21);
const ERROR_RGB: Rgb = (239, 68, 68);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationStyle {
    Success,
    Warning,
    Error,
}

impl NotificationStyle {
    /// Success follows the theme; warning and error read the same on both.
    pub fn rgb(&self, palette: &Palette) -> Rgb {
        match self {
            NotificationStyle::Success => palette.success,
            NotificationStyle::Warning => WARNING_RGB,
            NotificationStyle::Error => ERROR_RGB,
        }
    }

    pub fn icon(&self) -> char {
        match self {
            NotificationStyle::Success => '✓',
            NotificationStyle::Warning => '⚠',
            NotificationStyle::Error => '✗',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub style: NotificationStyle,
    pub message: String,
    /// Wall clock at creation, ms since the epoch
    pub raised_at_ms: u64,
}

impl Notification {
    pub fn new(style: NotificationStyle, message: impl Into<String>) -> Self {
        let raised_at_ms = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default();
        Self {
            style,
            message: message.into(),
            raised_at_ms,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationStyle::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationStyle::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationStyle::Error, message)
    }

    /// `✓ Message Sent!`, in the style's colour when the context allows it
    pub fn render(&self, ctx: &ThemeContext) -> String {
        let text = format!("{} {}", self.style.icon(), self.message);
        if !ctx.is_colored() {
            return text;
        }
        let (r, g, b) = self.style.rgb(&ctx.palette());
        format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_constructors_pick_style() {
        let notif = Notification::success("Message Sent!");
        assert_eq!(notif.style, NotificationStyle::Success);
        assert_eq!(notif.message, "Message Sent!");
        assert!(notif.raised_at_ms > 0);
        assert_eq!(Notification::error("x").style, NotificationStyle::Error);
        assert_eq!(NotificationStyle::Warning.to_string(), "warning");
    }

    #[test]
    fn test_render_plain() {
        let notif = Notification::error("Error - Try Again");
        let ctx = ThemeContext::plain(Theme::Dark);
        assert_eq!(notif.render(&ctx), "✗ Error - Try Again");
    }

    #[test]
    fn test_success_colour_follows_theme() {
        let notif = Notification::success("Message Sent!");
        let dark = notif.render(&ThemeContext::new(Theme::Dark));
        let light = notif.render(&ThemeContext::new(Theme::Light));
        assert!(dark.starts_with("\x1b[38;2;0;255;136m"));
        assert!(light.starts_with("\x1b[38;2;0;140;80m"));
        assert!(dark.ends_with("✓ Message Sent!\x1b[0m"));

        let warning = Notification::warning("Name is required");
        assert_eq!(
            warning.render(&ThemeContext::new(Theme::Light)),
            "\x1b[38;2;250;204;21m⚠ Name is required\x1b[0m"
        );
    }
}
