//! Frame extraction.

use std::path::Path;

use crate::cache::RenderParameters;
use crate::error::{BappleError, Result};
use crate::external::Transcoder;
use crate::frames::FrameSequence;

/// Extract frames of `source` into `dest_dir` and return how many were written.
///
/// `dest_dir` must already exist and be empty. A transcoder failure aborts
/// with `FrameExtractionFailed`; there is no partial-frame fallback.
pub fn extract_frames(
    transcoder: &dyn Transcoder,
    source: &Path,
    dest_dir: &Path,
    params: RenderParameters,
) -> Result<usize> {
    tracing::info!(
        tool = transcoder.name(),
        width = params.width,
        height = params.height,
        fps = params.fps,
        "extracting frames"
    );

    transcoder
        .extract_frames(source, dest_dir, params)
        .map_err(BappleError::FrameExtractionFailed)?;

    let count = FrameSequence::scan(dest_dir)?.len();
    tracing::info!(count, "frame extraction finished");
    Ok(count)
}
