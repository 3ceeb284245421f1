//! Error taxonomy for the player.
//!
//! Setup failures are fatal and map to exit status 1. Audio and per-frame
//! render failures are recoverable and never escape the layer that sees them;
//! their variants exist so that layer can log a uniform message.

use std::path::PathBuf;

use crate::external::ToolError;

/// Shorthand result type for library operations.
pub type Result<T, E = BappleError> = std::result::Result<T, E>;

/// A required executable that is not on `PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTool {
    /// Command name that was probed
    pub command: &'static str,
    /// Package that provides it
    pub package: &'static str,
}

impl std::fmt::Display for MissingTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (from {})", self.command, self.package)
    }
}

/// Errors produced while preparing or running playback.
#[derive(Debug, thiserror::Error)]
pub enum BappleError {
    #[error("Missing required dependencies:\n{}", format_missing(.0))]
    MissingDependency(Vec<MissingTool>),

    #[error(
        "Video not found at {}\nRun the download script first:\n  curl -fsSL https://raw.githubusercontent.com/Germ-99/badapple/main/src/download.sh | bash",
        .path.display()
    )]
    SourceMissing { path: PathBuf },

    #[error("Frame extraction failed: {0}")]
    FrameExtractionFailed(ToolError),

    #[error("Audio extraction failed: {0}")]
    AudioExtractionFailed(ToolError),

    #[error("No frames found in {}", .dir.display())]
    EmptyFrameSet { dir: PathBuf },

    #[error("Failed to render frame {index}: {error}")]
    RenderFrameFailed { index: usize, error: ToolError },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BappleError {
    /// Whether playback can continue after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::AudioExtractionFailed(_) | Self::RenderFrameFailed { .. }
        )
    }
}

fn format_missing(missing: &[MissingTool]) -> String {
    missing
        .iter()
        .map(|tool| format!("  - {}", tool))
        .collect::<Vec<_>>()
        .join("\n")
}
