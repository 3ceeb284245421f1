//! Best-effort audio extraction.

use std::fs;
use std::path::Path;

use crate::error::BappleError;
use crate::external::Transcoder;

/// Whether `path` holds a usable (non-empty) audio file.
pub fn audio_available(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.len() > 0)
        .unwrap_or(false)
}

/// Demux the audio track of `source` into `dest`.
///
/// Never fails: a transcoder error is reported as a warning, any partial
/// output is removed so a later run retries, and `false` is returned.
pub fn extract_audio(transcoder: &dyn Transcoder, source: &Path, dest: &Path) -> bool {
    match transcoder.extract_audio(source, dest) {
        Ok(()) if audio_available(dest) => true,
        Ok(()) => {
            tracing::warn!(path = %dest.display(), "audio extraction produced no output");
            eprintln!("Audio extraction produced no output (continuing without audio)");
            false
        }
        Err(e) => {
            let err = BappleError::AudioExtractionFailed(e);
            tracing::warn!(error = %err, "continuing without audio");
            eprintln!("Audio extraction failed (continuing without audio)");
            if dest.exists() {
                if let Err(e) = fs::remove_file(dest) {
                    tracing::warn!(path = %dest.display(), error = %e, "failed to remove partial audio");
                }
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::fakes::FakeTranscoder;
    use tempfile::TempDir;

    #[test]
    fn success_leaves_audio_in_place() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("audio.m4a");
        let transcoder = FakeTranscoder::producing(0);

        assert!(extract_audio(&transcoder, Path::new("in.mp4"), &dest));
        assert!(audio_available(&dest));
    }

    #[test]
    fn failure_is_non_fatal_and_removes_partial_file() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("audio.m4a");
        let mut transcoder = FakeTranscoder::producing(0);
        transcoder.fail_audio = true;

        assert!(!extract_audio(&transcoder, Path::new("in.mp4"), &dest));
        assert!(!dest.exists());
    }

    #[test]
    fn empty_file_is_not_available() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("audio.m4a");
        assert!(!audio_available(&dest));

        fs::write(&dest, b"").unwrap();
        assert!(!audio_available(&dest));

        fs::write(&dest, b"data").unwrap();
        assert!(audio_available(&dest));
    }
}
