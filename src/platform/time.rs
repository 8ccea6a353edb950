//! Frame pacing
//!
//! Caps the loop at a target rate by sleeping out the remainder of each
//! frame, and measures the achieved rate over a sliding window.

use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

/// Frames kept for the FPS estimate
const FPS_WINDOW: usize = 60;

#[derive(Debug)]
pub struct FramePacer {
    frame_duration: Duration,
    frame_start: Instant,
    frame_times: VecDeque<Instant>,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        let target_fps = target_fps.max(1);
        Self {
            frame_duration: Duration::from_secs_f64(1.0 / target_fps as f64),
            frame_start: Instant::now(),
            frame_times: VecDeque::with_capacity(FPS_WINDOW),
        }
    }

    /// Block until at least one frame period has passed since the previous
    /// call, then start the next frame
    pub fn wait(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame_duration {
            thread::sleep(self.frame_duration - elapsed);
        }
        let now = Instant::now();
        self.frame_start = now;
        self.record(now);
    }

    /// Record a frame boundary for the FPS estimate
    pub fn record(&mut self, at: Instant) {
        if self.frame_times.len() == FPS_WINDOW {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(at);
    }

    /// Average frames per second over the window, once two frames exist
    pub fn fps(&self) -> Option<u32> {
        let (oldest, newest) = (self.frame_times.front()?, self.frame_times.back()?);
        let span = newest.saturating_duration_since(*oldest).as_secs_f64();
        if span <= 0.0 {
            return None;
        }
        Some(((self.frame_times.len() - 1) as f64 / span).round() as u32)
    }
}
