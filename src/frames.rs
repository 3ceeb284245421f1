//! Frame sequence discovery.
//!
//! The filesystem is the source of truth for what an extraction produced:
//! frames are found by listing the frames directory, not by trusting the
//! transcoder's own count.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Output pattern handed to the transcoder (1-based, zero padded).
pub const FRAME_PATTERN: &str = "frame_%05d.png";

const FRAME_PREFIX: &str = "frame_";
const FRAME_SUFFIX: &str = ".png";

/// Frames of one extraction, ordered by index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameSequence {
    dir: PathBuf,
    frames: Vec<PathBuf>,
}

impl FrameSequence {
    /// List the frames in `dir`, sorted by numeric index.
    ///
    /// A missing directory yields an empty sequence. Files that do not match
    /// `frame_<digits>.png` (such as the cache marker) are ignored.
    pub fn scan(dir: &Path) -> io::Result<Self> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(Self::from_paths(dir, Vec::new()))
            }
            Err(e) => return Err(e),
        };

        let mut indexed = Vec::new();
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name();
            if let Some(index) = name.to_str().and_then(frame_index) {
                indexed.push((index, entry.path()));
            }
        }
        indexed.sort_by_key(|(index, _)| *index);

        Ok(Self::from_paths(
            dir,
            indexed.into_iter().map(|(_, path)| path).collect(),
        ))
    }

    /// Build from explicit paths, already in display order.
    pub fn from_paths(dir: impl Into<PathBuf>, frames: Vec<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            frames,
        }
    }

    /// Directory the frames were found in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.frames.iter().map(PathBuf::as_path)
    }

    /// Combined size of all frame files in bytes.
    pub fn total_bytes(&self) -> u64 {
        self.frames
            .iter()
            .filter_map(|path| fs::metadata(path).ok())
            .map(|meta| meta.len())
            .sum()
    }
}

/// Parse the index out of `frame_<digits>.png`.
fn frame_index(name: &str) -> Option<u64> {
    let digits = name.strip_prefix(FRAME_PREFIX)?.strip_suffix(FRAME_SUFFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
