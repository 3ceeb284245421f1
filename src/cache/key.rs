//! Render parameters, the cache key derived from them, and the on-disk marker.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BappleError, Result};

/// Resolution and frame rate that determine what the frame cache holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderParameters {
    /// Target width (renderer columns, transcoder pixels)
    pub width: u32,
    /// Target height (renderer rows, transcoder pixels)
    pub height: u32,
    /// Frames per second to sample and play back at
    pub fps: u32,
}

impl RenderParameters {
    /// Validate and build parameters; every value must be positive.
    pub fn new(width: u32, height: u32, fps: u32) -> Result<Self> {
        for (name, value) in [("width", width), ("height", height), ("fps", fps)] {
            if value == 0 {
                return Err(BappleError::Config(format!("{} must be positive", name)));
            }
        }
        Ok(Self { width, height, fps })
    }

    /// Cache key for these parameters.
    pub fn cache_key(&self) -> CacheKey {
        CacheKey(format!("{}x{}@{}", self.width, self.height, self.fps))
    }
}

/// Deterministic identifier of a frame set's render parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validity marker written next to a completed frame set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheMarker {
    /// Cache key the frames were extracted with
    pub key: String,
    /// Number of frames the extraction produced
    pub frames: usize,
    /// RFC 3339 time of extraction
    pub created: String,
}

impl CacheMarker {
    /// Marker for a freshly completed extraction.
    pub fn new(key: &CacheKey, frames: usize) -> Self {
        Self {
            key: key.to_string(),
            frames,
            created: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Load a marker; a missing or unreadable marker counts as no marker.
    pub fn read(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(marker) => Some(marker),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "ignoring malformed cache marker");
                None
            }
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let content = toml::to_string(self)
            .map_err(|e| BappleError::Config(format!("cannot serialize cache marker: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Whether this marker vouches for `frames` frames rendered with `key`.
    pub fn matches(&self, key: &CacheKey, frames: usize) -> bool {
        self.key == key.as_str() && self.frames == frames
    }
}
