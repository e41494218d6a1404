// Neonfolio animation: the engine trait shared by every animated view
use std::time::{Duration, Instant};

/// Cells a frame touched, in terminal columns and rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyRegion {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl DirtyRegion {
    /// A single-row span starting at `(x, y)`
    pub fn line(x: usize, y: usize, width: usize) -> Self {
        DirtyRegion {
            x,
            y,
            width,
            height: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// One rendered step of an engine
#[derive(Debug, Clone)]
pub struct AnimationFrame {
    /// Plain text, rows separated by `\n`
    pub content: String,
    pub dirty_regions: Vec<DirtyRegion>,
    pub produced_at: Instant,
}

impl AnimationFrame {
    pub fn new(content: String, dirty_regions: Vec<DirtyRegion>) -> Self {
        AnimationFrame {
            content,
            dirty_regions,
            produced_at: Instant::now(),
        }
    }

    /// Content split into rows
    pub fn rows(&self) -> Vec<String> {
        self.content.lines().map(String::from).collect()
    }
}

/// Something that advances one step per call and renders the result.
///
/// The runtime driver sleeps `frame_duration()` between calls to
/// `next_frame()`. Finite engines (the odometer) return `None` once done;
/// endless ones (typewriter, particles) never do. Engines with a cadence
/// that depends on their state override `frame_duration`.
pub trait AnimationEngine: Send + Sync {
    fn next_frame(&mut self) -> Option<AnimationFrame>;

    fn target_fps(&self) -> u32;

    fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps().max(1) as f64)
    }

    /// Back to the state right after construction
    fn reset(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Countdown {
        left: u32,
        fps: u32,
    }

    impl AnimationEngine for Countdown {
        fn next_frame(&mut self) -> Option<AnimationFrame> {
            if self.left == 0 {
                return None;
            }
            self.left -= 1;
            Some(AnimationFrame::new(
                format!("{}\n-", self.left),
                vec![DirtyRegion::line(0, 0, 1)],
            ))
        }
        fn target_fps(&self) -> u32 {
            self.fps
        }
        fn reset(&mut self) {
            self.left = 2;
        }
    }

    #[test]
    fn test_finite_engine_runs_out() {
        let mut engine = Countdown { left: 2, fps: 30 };
        assert_eq!(engine.next_frame().unwrap().rows(), vec!["1", "-"]);
        assert_eq!(engine.next_frame().unwrap().content, "0\n-");
        assert!(engine.next_frame().is_none());
        engine.reset();
        assert!(engine.next_frame().is_some());
    }

    #[test]
    fn test_default_frame_duration() {
        let engine = Countdown { left: 0, fps: 40 };
        assert_eq!(engine.frame_duration(), Duration::from_millis(25));
        // zero fps falls back to one frame a second
        let stalled = Countdown { left: 0, fps: 0 };
        assert_eq!(stalled.frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_dirty_region() {
        let region = DirtyRegion::line(2, 5, 10);
        assert_eq!(region.height, 1);
        assert!(!region.is_empty());
        assert!(DirtyRegion::line(0, 0, 0).is_empty());
    }
}
