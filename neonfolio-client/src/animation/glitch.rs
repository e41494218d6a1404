// Neonfolio animation: glitch text
// Random character substitution for the preloader's welcome banner.

use rand::Rng;

use neonfolio_utils::content::{GLITCH_CHARS, WELCOME_TEXT};

#[derive(Debug, Clone)]
pub struct GlitchText {
    original: String,
    charset: Vec<char>,
    /// Chance that a tick glitches at all
    trigger_chance: f64,
    /// Chance that a single character is replaced during a glitch
    char_chance: f64,
}

impl GlitchText {
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            charset: GLITCH_CHARS.chars().collect(),
            trigger_chance: 0.3,
            char_chance: 0.2,
        }
    }

    pub fn with_charset(mut self, charset: &str) -> Self {
        self.charset = charset.chars().collect();
        self
    }

    pub fn with_chances(mut self, trigger_chance: f64, char_chance: f64) -> Self {
        self.trigger_chance = trigger_chance.clamp(0.0, 1.0);
        self.char_chance = char_chance.clamp(0.0, 1.0);
        self
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    /// Roll one glitch tick. `Some` carries the corrupted text to show until
    /// the revert fires; `None` means this tick leaves the text alone.
    pub fn roll<R: Rng>(&self, rng: &mut R) -> Option<String> {
        if self.charset.is_empty() || !rng.gen_bool(self.trigger_chance) {
            return None;
        }
        let glitched = self
            .original
            .chars()
            .map(|c| {
                if rng.gen_bool(self.char_chance) {
                    self.charset[rng.gen_range(0..self.charset.len())]
                } else {
                    c
                }
            })
            .collect();
        Some(glitched)
    }
}

impl Default for GlitchText {
    fn default() -> Self {
        Self::new(WELCOME_TEXT)
    }
}
