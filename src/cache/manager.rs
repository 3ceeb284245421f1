//! Frame and audio cache validation.

use std::fs;

use humansize::{format_size, DECIMAL};

use super::key::{CacheKey, CacheMarker, RenderParameters};
use super::layout::CacheLayout;
use crate::error::Result;
use crate::extract;
use crate::external::Transcoder;
use crate::frames::FrameSequence;

/// Decides whether cached artifacts can be reused and regenerates them if not.
///
/// Check-then-rebuild is not atomic: two instances sharing a cache root can
/// interleave. Single-instance use is assumed.
pub struct CacheManager<'a> {
    layout: &'a CacheLayout,
    transcoder: &'a dyn Transcoder,
}

impl<'a> CacheManager<'a> {
    pub fn new(layout: &'a CacheLayout, transcoder: &'a dyn Transcoder) -> Self {
        Self { layout, transcoder }
    }

    /// Make sure frames for `params` exist and return how many there are.
    ///
    /// Cached frames are reused only when `force` is false and the marker in
    /// the frames directory matches both the cache key and the frame count on
    /// disk. Anything else wipes the directory and extracts from scratch.
    pub fn ensure_frames(&self, params: RenderParameters, force: bool) -> Result<usize> {
        let key = params.cache_key();

        if !force {
            if let Some(frames) = self.reusable_frames(&key)? {
                println!(
                    "Using {} cached frames ({})",
                    frames.len(),
                    format_size(frames.total_bytes(), DECIMAL)
                );
                return Ok(frames.len());
            }
        }

        println!("Rendering frames...");
        println!(
            "Settings: {}x{} @ {}fps",
            params.width, params.height, params.fps
        );

        let frames_dir = self.layout.frames_dir();
        if frames_dir.exists() {
            fs::remove_dir_all(&frames_dir)?;
        }
        fs::create_dir_all(&frames_dir)?;

        let count =
            extract::extract_frames(self.transcoder, &self.layout.video(), &frames_dir, params)?;

        // An empty result gets no marker so the next run retries
        if count > 0 {
            CacheMarker::new(&key, count).write(&self.layout.marker())?;
        }
        println!("Extracted {} frames", count);
        Ok(count)
    }

    /// Make sure the audio track exists; `false` means play silently.
    ///
    /// Audio does not depend on render parameters, so an existing file is
    /// kept unless `force` is set.
    pub fn ensure_audio(&self, force: bool) -> bool {
        let audio = self.layout.audio();
        if !force && extract::audio_available(&audio) {
            tracing::debug!(path = %audio.display(), "reusing cached audio");
            return true;
        }

        println!("Extracting audio...");
        let extracted = extract::extract_audio(self.transcoder, &self.layout.video(), &audio);
        if extracted {
            println!("Audio extracted");
        }
        extracted
    }

    fn reusable_frames(&self, key: &CacheKey) -> Result<Option<FrameSequence>> {
        let frames = FrameSequence::scan(&self.layout.frames_dir())?;
        if frames.is_empty() {
            return Ok(None);
        }

        match CacheMarker::read(&self.layout.marker()) {
            Some(marker) if marker.matches(key, frames.len()) => Ok(Some(frames)),
            Some(marker) => {
                tracing::info!(
                    cached = %marker.key,
                    cached_frames = marker.frames,
                    requested = %key,
                    found_frames = frames.len(),
                    "frame cache is stale"
                );
                Ok(None)
            }
            None => {
                tracing::info!("frame cache has no marker");
                Ok(None)
            }
        }
    }
}
