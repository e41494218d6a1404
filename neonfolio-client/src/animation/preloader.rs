// Neonfolio animation: preloader view state
//
// What the boot screen shows at any instant. The runtime's sequencer owns the
// timers; this type only knows how each timer changes the picture.

use rand::Rng;

use neonfolio_utils::content::{STATUS_MESSAGES, WELCOME_TEXT};

pub const PROGRESS_MAX: f32 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PreloaderState {
    /// Percent loaded, always in [0, 100]
    progress: f32,
    /// Index of the newest revealed status line
    status_index: usize,
    status_count: usize,
    /// Unscrambled banner that every glitch reverts to
    banner: String,
    pub glitch_text: String,
    pub show_cursor: bool,
    /// Set once the completion notification has fired
    pub completed: bool,
}

impl PreloaderState {
    pub fn new(status_count: usize) -> Self {
        Self {
            progress: 0.0,
            status_index: 0,
            status_count,
            banner: WELCOME_TEXT.to_string(),
            glitch_text: WELCOME_TEXT.to_string(),
            show_cursor: true,
            completed: false,
        }
    }

    /// Show `banner` instead of the welcome text
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self.glitch_text = self.banner.clone();
        self
    }

    pub fn banner(&self) -> &str {
        &self.banner
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whole percent for display
    pub fn percent(&self) -> u8 {
        self.progress.floor() as u8
    }

    pub fn status_index(&self) -> usize {
        self.status_index
    }

    pub fn status_count(&self) -> usize {
        self.status_count
    }

    /// Progress reached 100
    pub fn is_loaded(&self) -> bool {
        self.progress >= PROGRESS_MAX
    }

    /// Bounded random increment in [1, 4)
    pub fn random_increment<R: Rng>(rng: &mut R) -> f32 {
        rng.gen_range(1.0..4.0)
    }

    /// Add `amount` (negative amounts are ignored) and clamp at 100. Returns
    /// true only on the call that reaches 100.
    pub fn advance_progress(&mut self, amount: f32) -> bool {
        if self.is_loaded() {
            return false;
        }
        self.progress = (self.progress + amount.max(0.0)).min(PROGRESS_MAX);
        self.is_loaded()
    }

    pub fn all_statuses_revealed(&self) -> bool {
        self.status_index + 1 >= self.status_count
    }

    /// Reveal one more status line. Returns false once the last line is shown.
    pub fn reveal_next_status(&mut self) -> bool {
        if self.all_statuses_revealed() {
            return false;
        }
        self.status_index += 1;
        !self.all_statuses_revealed()
    }

    pub fn toggle_cursor(&mut self) {
        self.show_cursor = !self.show_cursor;
    }

    pub fn revert_glitch(&mut self) {
        self.glitch_text.clone_from(&self.banner);
    }
}

impl Default for PreloaderState {
    fn default() -> Self {
        Self::new(STATUS_MESSAGES.len())
    }
}
