//! ANSI renderers for the boot screen, the page sections and the skill
//! canvas. With a plain [`ThemeContext`] every renderer emits bare text.

pub mod canvas;
pub mod page;
pub mod preloader;

pub use canvas::render_canvas;
pub use page::{render_nav, render_page, ContactView, PageView, RenderedPage, ROW_HEIGHT_PX};
pub use preloader::render_preloader;

use ansi_term::{Colour, Style};
use unicode_width::UnicodeWidthStr;

use neonfolio_utils::content::parse_hex_color;
use neonfolio_utils::theme::{Palette, Rgb};
use neonfolio_utils::ThemeContext;

/// Paints text in the current theme, or not at all for plain contexts.
pub struct Painter {
    palette: Palette,
    colored: bool,
}

impl Painter {
    pub fn new(ctx: &ThemeContext) -> Self {
        Self {
            palette: ctx.palette(),
            colored: ctx.is_colored(),
        }
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn paint(&self, (r, g, b): Rgb, text: &str) -> String {
        if self.colored {
            Colour::RGB(r, g, b).paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, (r, g, b): Rgb, text: &str) -> String {
        if self.colored {
            Style::new().bold().fg(Colour::RGB(r, g, b)).paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Paint with a `#RRGGBB` content colour, falling back to the primary
    /// colour when it does not parse
    pub fn hex(&self, hex: &str, text: &str) -> String {
        let rgb = parse_hex_color(hex).unwrap_or(self.palette.primary);
        self.paint(rgb, text)
    }

    pub fn primary(&self, text: &str) -> String {
        self.paint(self.palette.primary, text)
    }

    pub fn accent(&self, text: &str) -> String {
        self.paint(self.palette.accent, text)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(self.palette.success, text)
    }

    pub fn foreground(&self, text: &str) -> String {
        self.paint(self.palette.foreground, text)
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(self.palette.muted, text)
    }
}

/// Left-pad `text` so it sits in the middle of `width` columns
pub fn center(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    format!("{}{}", " ".repeat((width - text_width) / 2), text)
}

/// Right-pad `text` to exactly `width` columns (longer text is left alone)
pub fn pad_right(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - text_width))
}

/// Greedy word wrap on display width. A single word wider than `width`
/// gets a line of its own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// `filled` cells of `█` followed by `░` up to `width`
pub fn bar(fraction: f32, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f32).floor() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use neonfolio_utils::Theme;

    #[test]
    fn test_plain_painter_emits_bare_text() {
        let painter = Painter::new(&ThemeContext::plain(Theme::Dark));
        assert_eq!(painter.primary("neon"), "neon");
        assert_eq!(painter.bold((1, 2, 3), "neon"), "neon");
        assert_eq!(painter.hex("#zzzzzz", "neon"), "neon");
    }

    #[test]
    fn test_colored_painter_wraps_in_escapes() {
        let painter = Painter::new(&ThemeContext::new(Theme::Dark));
        let painted = painter.hex("#00D4FF", "neon");
        assert!(painted.starts_with("\u{1b}[38;2;0;212;255m"));
        assert!(painted.contains("neon"));
        assert!(painted.ends_with("\u{1b}[0m"));
    }

    #[test]
    fn test_center_and_pad() {
        assert_eq!(center("ab", 6), "  ab");
        assert_eq!(center("toolong", 3), "toolong");
        assert_eq!(pad_right("ab", 4), "ab  ");
        // wide glyphs count as two columns
        assert_eq!(pad_right("◆", 3).width(), 3);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
        assert_eq!(wrap("supercalifragilistic ok", 5), vec!["supercalifragilistic", "ok"]);
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_bar() {
        assert_eq!(bar(0.0, 4), "░░░░");
        assert_eq!(bar(0.5, 4), "██░░");
        assert_eq!(bar(0.99, 4), "███░");
        assert_eq!(bar(3.0, 4), "████");
    }
}
