//! Render throughput for the preview loop.
//!
//! The idle motion advances on a fixed step; `FrameTimer` measures how long
//! each frame actually took to render so the loop can report it.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const DEFAULT_WINDOW: usize = 120;

/// Summary over the frames currently in the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub frames: usize,
    pub avg_ms: f64,
    pub worst_ms: f64,
    pub fps: f64,
}

/// Rolling window of measured frame durations.
pub struct FrameTimer {
    samples: VecDeque<Duration>,
    window: usize,
    started: Option<Instant>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_WINDOW)
    }

    /// A window of at least one sample.
    pub fn with_window(window: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(window.max(1)),
            window: window.max(1),
            started: None,
        }
    }

    /// Mark the start of a frame's work.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Close the frame opened by `start` and record its duration.
    ///
    /// Returns `None` without recording when no frame is open.
    pub fn finish(&mut self) -> Option<Duration> {
        let elapsed = self.started.take()?.elapsed();
        self.push(elapsed);
        Some(elapsed)
    }

    pub fn push(&mut self, frame: Duration) {
        if self.samples.len() == self.window {
            self.samples.pop_front();
        }
        self.samples.push_back(frame);
    }

    pub fn stats(&self) -> FrameStats {
        let frames = self.samples.len();
        let total: f64 = self.samples.iter().map(Duration::as_secs_f64).sum();
        let worst = self.samples.iter().max().copied().unwrap_or_default();
        let (avg_ms, fps) = if frames == 0 || total <= 0.0 {
            (0.0, 0.0)
        } else {
            (total / frames as f64 * 1000.0, frames as f64 / total)
        };
        FrameStats {
            frames,
            avg_ms,
            worst_ms: worst.as_secs_f64() * 1000.0,
            fps,
        }
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_timer_reports_zero() {
        let stats = FrameTimer::new().stats();
        assert_eq!(stats.frames, 0);
        assert_eq!(stats.fps, 0.0);
        assert_eq!(stats.avg_ms, 0.0);
        assert_eq!(stats.worst_ms, 0.0);
    }

    #[test]
    fn stats_over_pushed_frames() {
        let mut timer = FrameTimer::new();
        for ms in [10, 20, 30] {
            timer.push(Duration::from_millis(ms));
        }
        let stats = timer.stats();
        assert_eq!(stats.frames, 3);
        assert!((stats.avg_ms - 20.0).abs() < 1e-9);
        assert!((stats.worst_ms - 30.0).abs() < 1e-9);
        assert!((stats.fps - 50.0).abs() < 1e-9);
    }

    #[test]
    fn finish_without_start_records_nothing() {
        let mut timer = FrameTimer::new();
        assert_eq!(timer.finish(), None);
        assert_eq!(timer.stats().frames, 0);
    }

    #[test]
    fn start_finish_measures_elapsed() {
        let mut timer = FrameTimer::new();
        timer.start();
        std::thread::sleep(Duration::from_millis(2));
        let frame = timer.finish().unwrap();
        assert!(frame >= Duration::from_millis(2));
        assert_eq!(timer.stats().frames, 1);
        // The frame is closed; a second finish is a no-op.
        assert_eq!(timer.finish(), None);
    }

    #[test]
    fn window_drops_oldest() {
        let mut timer = FrameTimer::with_window(2);
        timer.push(Duration::from_millis(100));
        timer.push(Duration::from_millis(10));
        timer.push(Duration::from_millis(10));
        let stats = timer.stats();
        assert_eq!(stats.frames, 2);
        assert!((stats.worst_ms - 10.0).abs() < 1e-9);
    }

    #[test]
    fn zero_window_keeps_one_sample() {
        let mut timer = FrameTimer::with_window(0);
        timer.push(Duration::from_millis(5));
        timer.push(Duration::from_millis(7));
        assert_eq!(timer.stats().frames, 1);
    }
}
