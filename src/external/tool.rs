//! Narrow interfaces over the external executables.
//!
//! Each trait wraps one collaborator so the cache and playback layers can be
//! exercised with fakes that never spawn a process.

use std::path::Path;

use super::error::ToolError;
use crate::cache::RenderParameters;

/// Converts a video into frame images or a demuxed audio track.
pub trait Transcoder: Send + Sync {
    /// Executable name for messages.
    fn name(&self) -> &'static str;

    /// Write frames scaled to fit `params` into `dest_dir`.
    ///
    /// Frames must be named `frame_00001.png`, `frame_00002.png`, ...
    /// The caller counts the files afterwards; nothing is returned here.
    fn extract_frames(
        &self,
        source: &Path,
        dest_dir: &Path,
        params: RenderParameters,
    ) -> Result<(), ToolError>;

    /// Copy the audio stream of `source` into `dest` without re-encoding.
    fn extract_audio(&self, source: &Path, dest: &Path) -> Result<(), ToolError>;
}

/// Converts one still image into terminal-printable text.
pub trait TextRenderer: Send + Sync {
    /// Executable name for messages.
    fn name(&self) -> &'static str;

    /// Render `frame` and return the bytes to print verbatim.
    fn render(&self, frame: &Path) -> Result<Vec<u8>, ToolError>;
}

/// Launches a background audio player.
pub trait AudioPlayer: Send + Sync {
    /// Executable name for messages.
    fn name(&self) -> &'static str;

    /// Start playing `audio`; returns immediately.
    fn start(&self, audio: &Path) -> Result<Box<dyn AudioHandle>, ToolError>;
}

/// A running audio player.
pub trait AudioHandle: Send {
    /// Ask the player to terminate and wait for it to exit.
    ///
    /// Calling this on an already stopped handle is a no-op.
    fn stop(&mut self) -> Result<(), ToolError>;
}
