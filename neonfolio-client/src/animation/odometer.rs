// Neonfolio animation: odometer counter
// Counts a statistic up from zero with an ease-out-quart curve. Finite: the
// last frame shows exactly the target value.

use std::time::Duration;

use neonfolio_utils::content::Stat;

use super::engine::{AnimationEngine, AnimationFrame, DirtyRegion};

pub struct Odometer {
    target: u32,
    suffix: String,
    duration: Duration,
    elapsed: Duration,
    fps: u32,
    finished: bool,
}

impl Odometer {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            suffix: String::new(),
            duration: Duration::from_millis(2000),
            elapsed: Duration::ZERO,
            fps: 60,
            finished: false,
        }
    }

    pub fn from_stat(stat: &Stat) -> Self {
        Self::new(stat.value).with_suffix(stat.suffix)
    }

    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = suffix.to_string();
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// `1 - (1 - t)^4`
    pub fn ease_out_quart(t: f64) -> f64 {
        1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(4)
    }

    /// Displayed value after `elapsed` of animation
    pub fn value_at(&self, elapsed: Duration) -> u32 {
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f64() / self.duration.as_secs_f64()
        };
        (Self::ease_out_quart(progress) * self.target as f64).floor() as u32
    }

    pub fn value(&self) -> u32 {
        self.value_at(self.elapsed)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn display(&self) -> String {
        format!("{}{}", self.value(), self.suffix)
    }
}

impl AnimationEngine for Odometer {
    fn next_frame(&mut self) -> Option<AnimationFrame> {
        if self.finished {
            return None;
        }
        self.elapsed = (self.elapsed + self.frame_duration()).min(self.duration);
        if self.elapsed >= self.duration {
            self.finished = true;
        }
        let content = self.display();
        let width = content.chars().count();
        Some(AnimationFrame::new(content, vec![DirtyRegion::line(0, 0, width)]))
    }

    fn target_fps(&self) -> u32 {
        self.fps
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.finished = false;
    }
}
