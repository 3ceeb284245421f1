//! chafa text-art renderer.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::external::error::ToolError;
use crate::external::tool::TextRenderer;

/// Renderer backed by the `chafa` CLI.
///
/// Size and symbol configuration are fixed at construction; every frame of a
/// run is rendered the same way.
#[derive(Debug, Clone)]
pub struct Chafa {
    program: PathBuf,
    width: u32,
    height: u32,
    extra_args: Vec<String>,
}

impl Chafa {
    /// Create using `chafa` from `PATH`.
    ///
    /// `extra_args` are appended before the frame path (e.g. `--symbols ascii --fg-only`).
    pub fn new(width: u32, height: u32, extra_args: Vec<String>) -> Self {
        Self::with_program("chafa", width, height, extra_args)
    }

    /// Create using a specific executable.
    pub fn with_program(
        program: impl Into<PathBuf>,
        width: u32,
        height: u32,
        extra_args: Vec<String>,
    ) -> Self {
        Self {
            program: program.into(),
            width,
            height,
            extra_args,
        }
    }

    /// Arguments used to render `frame`.
    pub fn args(&self, frame: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "--format".into(),
            "symbols".into(),
            "--size".into(),
            format!("{}x{}", self.width, self.height).into(),
            "--animate".into(),
            "off".into(),
        ];
        args.extend(self.extra_args.iter().map(OsString::from));
        args.push(frame.into());
        args
    }
}

impl TextRenderer for Chafa {
    fn name(&self) -> &'static str {
        "chafa"
    }

    fn render(&self, frame: &Path) -> Result<Vec<u8>, ToolError> {
        let output = Command::new(&self.program)
            .args(self.args(frame))
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| ToolError::from_io(self.name(), e))?;

        if output.status.success() {
            Ok(output.stdout)
        } else {
            Err(ToolError::Failed {
                tool: self.name(),
                code: output.status.code(),
            })
        }
    }
}
