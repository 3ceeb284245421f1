//! Frame and audio extraction on top of a `Transcoder`.
//!
//! Frame extraction failing is fatal; audio extraction failing only
//! downgrades playback to silent.

mod audio;
mod frames;

pub use audio::{audio_available, extract_audio};
pub use frames::extract_frames;
