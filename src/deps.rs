//! Pre-flight check for the external executables.
//!
//! Only resolves names against `PATH`; nothing is executed.

use std::ffi::OsString;
use std::path::Path;

use crate::error::{BappleError, MissingTool, Result};

/// An executable the player shells out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    pub command: &'static str,
    pub package: &'static str,
}

pub const FFMPEG: Dependency = Dependency {
    command: "ffmpeg",
    package: "ffmpeg",
};

pub const CHAFA: Dependency = Dependency {
    command: "chafa",
    package: "chafa",
};

pub const FFPLAY: Dependency = Dependency {
    command: "ffplay",
    package: "ffmpeg",
};

/// Tools needed for a run; `ffplay` only when audio is enabled.
pub fn required(audio: bool) -> Vec<Dependency> {
    let mut deps = vec![FFMPEG, CHAFA];
    if audio {
        deps.push(FFPLAY);
    }
    deps
}

/// Every dependency not found in `path_var` (a `PATH`-style list).
pub fn find_missing(deps: &[Dependency], path_var: Option<OsString>, cwd: &Path) -> Vec<MissingTool> {
    deps.iter()
        .filter(|dep| which::which_in(dep.command, path_var.as_ref(), cwd).is_err())
        .map(|dep| MissingTool {
            command: dep.command,
            package: dep.package,
        })
        .collect()
}

/// Fail with `MissingDependency` listing all absent tools from the process `PATH`.
pub fn check(deps: &[Dependency]) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let missing = find_missing(deps, std::env::var_os("PATH"), &cwd);
    if missing.is_empty() {
        Ok(())
    } else {
        tracing::error!(missing = missing.len(), "required tools not found");
        Err(BappleError::MissingDependency(missing))
    }
}
