//! Player lifecycle and results.

/// Lifecycle of one `Player::play` call.
///
/// `Idle -> AudioStarting (if audio) -> Looping -> Stopping -> Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Idle,
    AudioStarting,
    Looping,
    Stopping,
}

/// Why playback ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackResult {
    /// Stopped through the cancellation token (Ctrl+C or `stop()`)
    Interrupted,
    /// Played the configured number of passes
    LoopLimitReached,
}

/// What happened during playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSummary {
    pub result: PlaybackResult,
    /// Full passes over the frame sequence
    pub passes: u64,
    /// Frame slots displayed, including ones whose render failed
    pub frames_shown: u64,
}

/// Playback options fixed for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Target frames per second (positive)
    pub fps: u32,
    /// Stop after this many passes; `None` loops until interrupted
    pub max_passes: Option<u64>,
}

impl PlaybackConfig {
    pub fn new(fps: u32) -> Self {
        Self {
            fps,
            max_passes: None,
        }
    }

    pub fn with_max_passes(mut self, passes: u64) -> Self {
        self.max_passes = Some(passes);
        self
    }
}
