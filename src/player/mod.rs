//! Frame-synchronized terminal playback.
//!
//! # Architecture
//!
//! - `state`: lifecycle states, playback options and results
//! - `clock`: per-pass timing origin and frame deadlines
//! - `engine`: the `Player` loop (render, pace, loop, clean up)
//!
//! # Usage
//!
//! ```no_run
//! use bapple::cancel::CancellationToken;
//! use bapple::external::Chafa;
//! use bapple::frames::FrameSequence;
//! use bapple::player::{PlaybackConfig, Player};
//! use bapple::terminal::TerminalController;
//! use std::path::Path;
//!
//! let frames = FrameSequence::scan(Path::new("frames")).unwrap();
//! let renderer = Chafa::new(80, 40, vec![]);
//! let mut term = TerminalController::stdout();
//! let mut player = Player::new(&renderer, CancellationToken::new());
//! let summary = player
//!     .play(&mut term, &frames, None, PlaybackConfig::new(30).with_max_passes(1))
//!     .unwrap();
//! println!("played {} frames", summary.frames_shown);
//! ```

mod clock;
mod engine;
pub mod state;

pub use clock::PlaybackClock;
pub use engine::Player;
pub use state::{PlaybackConfig, PlaybackResult, PlaybackSummary, PlayerState};
