//! ffmpeg transcoder.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::run_inherited;
use crate::cache::RenderParameters;
use crate::external::error::ToolError;
use crate::external::tool::Transcoder;
use crate::frames::FRAME_PATTERN;

/// Transcoder backed by the `ffmpeg` CLI.
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    program: PathBuf,
}

impl Ffmpeg {
    /// Create using `ffmpeg` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("ffmpeg")
    }

    /// Create using a specific executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments for frame extraction.
    ///
    /// Frames are resampled to `fps` and scaled to fit inside
    /// `width`x`height` keeping the source aspect ratio.
    pub fn frame_args(source: &Path, dest_dir: &Path, params: RenderParameters) -> Vec<OsString> {
        vec![
            "-i".into(),
            source.into(),
            "-vf".into(),
            format!(
                "fps={},scale={}:{}:force_original_aspect_ratio=decrease",
                params.fps, params.width, params.height
            )
            .into(),
            "-pix_fmt".into(),
            "rgb24".into(),
            "-loglevel".into(),
            "error".into(),
            "-stats".into(),
            dest_dir.join(FRAME_PATTERN).into(),
        ]
    }

    /// Arguments for demuxing the audio stream as-is.
    pub fn audio_args(source: &Path, dest: &Path) -> Vec<OsString> {
        vec![
            "-i".into(),
            source.into(),
            "-vn".into(),
            "-acodec".into(),
            "copy".into(),
            "-y".into(),
            "-loglevel".into(),
            "error".into(),
            dest.into(),
        ]
    }
}

impl Default for Ffmpeg {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcoder for Ffmpeg {
    fn name(&self) -> &'static str {
        "ffmpeg"
    }

    fn extract_frames(
        &self,
        source: &Path,
        dest_dir: &Path,
        params: RenderParameters,
    ) -> Result<(), ToolError> {
        run_inherited(
            self.name(),
            Command::new(&self.program).args(Self::frame_args(source, dest_dir, params)),
        )
    }

    fn extract_audio(&self, source: &Path, dest: &Path) -> Result<(), ToolError> {
        run_inherited(
            self.name(),
            Command::new(&self.program).args(Self::audio_args(source, dest)),
        )
    }
}
