//! Frame pacing clock.

use std::time::{Duration, Instant};

/// Timing origin of the current pass and frames shown since it.
///
/// The deadline after the i-th frame of a pass is `origin + i / fps`, computed
/// from the origin each time so rounding never accumulates. A late frame is
/// never skipped; the next deadline is simply already in the past.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    fps: u32,
    origin: Instant,
    shown: u64,
}

impl PlaybackClock {
    pub fn new(fps: u32) -> Self {
        debug_assert!(fps > 0, "fps must be positive");
        Self {
            fps,
            origin: Instant::now(),
            shown: 0,
        }
    }

    /// Start a new pass: fresh origin, zero frames shown.
    pub fn restart(&mut self) {
        self.restart_at(Instant::now());
    }

    pub fn restart_at(&mut self, origin: Instant) {
        self.origin = origin;
        self.shown = 0;
    }

    /// Record one displayed frame and return when the next one is due.
    pub fn frame_shown(&mut self) -> Instant {
        self.shown += 1;
        self.deadline()
    }

    /// When the frame after the last shown one is due.
    pub fn deadline(&self) -> Instant {
        self.origin + self.target_elapsed()
    }

    /// `shown / fps` as a duration since the origin.
    pub fn target_elapsed(&self) -> Duration {
        Duration::from_secs_f64(self.shown as f64 / self.fps as f64)
    }

    /// How long to wait at `now` before the next frame, if at all.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline().checked_duration_since(now).filter(|d| !d.is_zero())
    }

    pub fn origin(&self) -> Instant {
        self.origin
    }

    pub fn frames_shown(&self) -> u64 {
        self.shown
    }
}
