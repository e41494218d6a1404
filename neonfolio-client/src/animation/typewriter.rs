// Neonfolio animation: typewriter cycler
// Types a phrase one character at a time, holds it, deletes it, moves on to
// the next phrase. Loops forever.

use std::time::Duration;

use neonfolio_utils::config::TypewriterConfig;
use unicode_width::UnicodeWidthStr;

use super::engine::{AnimationEngine, AnimationFrame, DirtyRegion};
use super::error::{AnimationError, AnimationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterPhase {
    Typing,
    Deleting,
}

pub struct Typewriter {
    phrases: Vec<String>,
    index: usize,
    /// Characters of the current phrase currently shown
    shown: usize,
    phase: TypewriterPhase,
    type_delay: Duration,
    delete_delay: Duration,
    hold: Duration,
    x_offset: usize,
    y_position: usize,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I) -> AnimationResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(AnimationError::NoPhrases);
        }
        let timing = TypewriterConfig::default();
        Ok(Self {
            phrases,
            index: 0,
            shown: 0,
            phase: TypewriterPhase::Typing,
            type_delay: Duration::from_millis(timing.type_ms),
            delete_delay: Duration::from_millis(timing.delete_ms),
            hold: Duration::from_millis(timing.hold_ms),
            x_offset: 0,
            y_position: 0,
        })
    }

    pub fn with_timing(mut self, timing: &TypewriterConfig) -> Self {
        self.type_delay = Duration::from_millis(timing.type_ms);
        self.delete_delay = Duration::from_millis(timing.delete_ms);
        self.hold = Duration::from_millis(timing.hold_ms);
        self
    }

    /// Screen position used for dirty regions
    pub fn at(mut self, x: usize, y: usize) -> Self {
        self.x_offset = x;
        self.y_position = y;
        self
    }

    pub fn text(&self) -> String {
        self.current_phrase().chars().take(self.shown).collect()
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    fn phrase_len(&self) -> usize {
        self.current_phrase().chars().count()
    }

    /// How long to wait before the next `step`
    pub fn delay(&self) -> Duration {
        match self.phase {
            TypewriterPhase::Typing if self.shown < self.phrase_len() => self.type_delay,
            TypewriterPhase::Typing => self.hold,
            TypewriterPhase::Deleting => self.delete_delay,
        }
    }

    /// Apply the transition that is due once `delay()` has elapsed.
    pub fn step(&mut self) {
        match self.phase {
            TypewriterPhase::Typing => {
                if self.shown < self.phrase_len() {
                    self.shown += 1;
                } else {
                    self.phase = TypewriterPhase::Deleting;
                }
            },
            TypewriterPhase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
            },
        }

        // An emptied phrase hands over to the next one without waiting
        if self.phase == TypewriterPhase::Deleting && self.shown == 0 {
            self.index = (self.index + 1) % self.phrases.len();
            self.phase = TypewriterPhase::Typing;
        }
    }

    fn widest_phrase(&self) -> usize {
        self.phrases
            .iter()
            .map(|phrase| UnicodeWidthStr::width(phrase.as_str()))
            .max()
            .unwrap_or(0)
    }
}

impl AnimationEngine for Typewriter {
    fn next_frame(&mut self) -> Option<AnimationFrame> {
        self.step();
        let region = DirtyRegion::line(self.x_offset, self.y_position, self.widest_phrase());
        Some(AnimationFrame::new(self.text(), vec![region]))
    }

    fn target_fps(&self) -> u32 {
        let millis = self.type_delay.as_millis().max(1) as u32;
        (1000 / millis).max(1)
    }

    fn frame_duration(&self) -> Duration {
        self.delay()
    }

    fn reset(&mut self) {
        self.index = 0;
        self.shown = 0;
        self.phase = TypewriterPhase::Typing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_cycle_steps(phrase: &str) -> usize {
        // type every char, one hold, delete every char
        2 * phrase.chars().count() + 1
    }

    #[test]
    fn test_empty_list_rejected() {
        let empty: Vec<String> = Vec::new();
        assert!(matches!(Typewriter::new(empty), Err(AnimationError::NoPhrases)));
    }

    #[test]
    fn test_types_one_char_per_step() {
        let mut tw = Typewriter::new(["abc"]).unwrap();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.delay(), Duration::from_millis(100));

        tw.step();
        assert_eq!(tw.text(), "a");
        tw.step();
        tw.step();
        assert_eq!(tw.text(), "abc");
        assert_eq!(tw.phase(), TypewriterPhase::Typing);
        // fully typed: hold before deleting
        assert_eq!(tw.delay(), Duration::from_millis(2000));

        tw.step();
        assert_eq!(tw.phase(), TypewriterPhase::Deleting);
        assert_eq!(tw.text(), "abc");
        assert_eq!(tw.delay(), Duration::from_millis(50));

        tw.step();
        assert_eq!(tw.text(), "ab");
    }

    #[test]
    fn test_full_cycle_advances_index() {
        let phrases = ["Full Stack Developer", "Creative Technologist", "Problem Solver"];
        let mut tw = Typewriter::new(phrases).unwrap();

        for (i, phrase) in phrases.iter().enumerate() {
            assert_eq!(tw.phrase_index(), i);
            for _ in 0..full_cycle_steps(phrase) {
                tw.step();
            }
            assert_eq!(tw.text(), "");
            assert_eq!(tw.phrase_index(), (i + 1) % phrases.len());
            assert_eq!(tw.phase(), TypewriterPhase::Typing);
        }

        // wrapped back to the first phrase
        assert_eq!(tw.phrase_index(), 0);
    }

    #[test]
    fn test_single_phrase_wraps_to_itself() {
        let mut tw = Typewriter::new(["hi"]).unwrap();
        for _ in 0..full_cycle_steps("hi") {
            tw.step();
        }
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_empty_phrase_holds_then_advances() {
        let mut tw = Typewriter::new(["", "x"]).unwrap();
        assert_eq!(tw.delay(), Duration::from_millis(2000));
        tw.step();
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.phase(), TypewriterPhase::Typing);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut tw = Typewriter::new(["héllo"]).unwrap();
        tw.step();
        tw.step();
        assert_eq!(tw.text(), "hé");
    }

    #[test]
    fn test_custom_timing() {
        let timing = TypewriterConfig {
            type_ms: 10,
            delete_ms: 5,
            hold_ms: 20,
        };
        let mut tw = Typewriter::new(["a"]).unwrap().with_timing(&timing);
        assert_eq!(tw.frame_duration(), Duration::from_millis(10));
        tw.step();
        assert_eq!(tw.frame_duration(), Duration::from_millis(20));
        tw.step();
        assert_eq!(tw.frame_duration(), Duration::from_millis(5));
        assert_eq!(tw.target_fps(), 100);
    }

    #[test]
    fn test_frames_and_reset() {
        let mut tw = Typewriter::new(["ab", "longer"]).unwrap().at(3, 7);
        let frame = tw.next_frame().unwrap();
        assert_eq!(frame.content, "a");
        assert_eq!(frame.dirty_regions, vec![DirtyRegion::line(3, 7, 6)]);

        tw.reset();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phrase_index(), 0);
    }

    #[test]
    fn test_never_terminates() {
        let mut tw = Typewriter::new(["ab", "c"]).unwrap();
        for _ in 0..1000 {
            assert!(tw.next_frame().is_some());
        }
    }
}
