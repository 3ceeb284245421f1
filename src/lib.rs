//! bapple - loops the Bad Apple!! video as text-art in a terminal.
//!
//! Frames are extracted once with ffmpeg into a cache keyed by render
//! parameters, converted to text with chafa at playback time, and paced
//! against a monotonic clock. Audio (optional) is played by ffplay.

pub mod cache;
pub mod cancel;
pub mod cli;
pub mod config;
pub mod deps;
pub mod error;
pub mod external;
pub mod extract;
pub mod frames;
pub mod logging;
pub mod player;
pub mod terminal;

pub use cache::{CacheLayout, CacheManager, RenderParameters};
pub use cancel::CancellationToken;
pub use config::{Config, Settings};
pub use error::{BappleError, Result};
pub use frames::FrameSequence;
pub use player::Player;
