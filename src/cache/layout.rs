//! Paths inside the cache directory.

use std::path::{Path, PathBuf};

use crate::error::{BappleError, Result};

/// Directory name used under the home directory when no root is configured.
pub const DEFAULT_DIR_NAME: &str = ".bapple-cache";

/// Layout of the persistent cache directory.
///
/// ```text
/// <root>/
///   badapple.mp4        source video (downloaded separately)
///   audio.m4a           demuxed audio track
///   frames/
///     .cache-key        validity marker
///     frame_00001.png
///     ...
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheLayout {
    root: PathBuf,
}

impl CacheLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `~/.bapple-cache`, if a home directory can be determined.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_DIR_NAME))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn video(&self) -> PathBuf {
        self.root.join("badapple.mp4")
    }

    pub fn frames_dir(&self) -> PathBuf {
        self.root.join("frames")
    }

    pub fn marker(&self) -> PathBuf {
        self.frames_dir().join(".cache-key")
    }

    pub fn audio(&self) -> PathBuf {
        self.root.join("audio.m4a")
    }

    /// Path of the source video, or `SourceMissing` if it has not been downloaded.
    pub fn require_video(&self) -> Result<PathBuf> {
        let video = self.video();
        if video.is_file() {
            Ok(video)
        } else {
            Err(BappleError::SourceMissing { path: video })
        }
    }
}
