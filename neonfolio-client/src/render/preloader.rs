// Neonfolio boot screen renderer

use neonfolio_utils::ThemeContext;

use super::{bar, center, Painter};
use crate::animation::PreloaderState;

const BAR_WIDTH: usize = 40;
const PROMPT: &str = "> ";

/// Boot screen as lines: banner, revealed status log, progress bar, percent.
/// Only the newest status line carries the blinking cursor.
pub fn render_preloader(
    state: &PreloaderState,
    statuses: &[&str],
    ctx: &ThemeContext,
    width: usize,
) -> Vec<String> {
    let painter = Painter::new(ctx);
    let palette = painter.palette();
    let mut lines = Vec::new();

    lines.push(painter.bold(palette.primary, &center(&state.glitch_text, width)));
    lines.push(String::new());

    let revealed = statuses.len().min(state.status_index() + 1);
    for (index, status) in statuses.iter().take(revealed).enumerate() {
        let newest = index + 1 == revealed;
        let cursor = if newest && state.show_cursor { "_" } else { "" };
        let line = format!("{}{}{}", PROMPT, status, cursor);
        if newest {
            lines.push(painter.success(&line));
        } else {
            lines.push(painter.muted(&line));
        }
    }
    lines.push(String::new());

    let meter = bar(state.progress() / 100.0, BAR_WIDTH);
    lines.push(painter.primary(&center(&meter, width)));
    lines.push(painter.accent(&center(&format!("{}%", state.percent()), width)));
    lines
}
