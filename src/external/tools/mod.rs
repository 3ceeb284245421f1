//! Process-backed tool implementations.

mod chafa;
mod ffmpeg;
mod ffplay;

pub use chafa::Chafa;
pub use ffmpeg::Ffmpeg;
pub use ffplay::{Ffplay, FfplayHandle};

use std::process::{Command, Stdio};

use super::error::ToolError;

/// Run `cmd` to completion with stdin closed, mapping a non-zero exit to an error.
///
/// Stdout and stderr are inherited so the tool's own diagnostics reach the user.
fn run_inherited(tool: &'static str, cmd: &mut Command) -> Result<(), ToolError> {
    tracing::debug!(tool, command = ?cmd, "running external tool");

    let status = cmd
        .stdin(Stdio::null())
        .status()
        .map_err(|e| ToolError::from_io(tool, e))?;

    if status.success() {
        Ok(())
    } else {
        Err(ToolError::Failed {
            tool,
            code: status.code(),
        })
    }
}
