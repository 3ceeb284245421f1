//! ffplay background audio player.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use crate::external::error::ToolError;
use crate::external::tool::{AudioHandle, AudioPlayer};

/// Audio player backed by the `ffplay` CLI (no window, exits at end of stream).
#[derive(Debug, Clone)]
pub struct Ffplay {
    program: PathBuf,
}

impl Ffplay {
    /// Create using `ffplay` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("ffplay")
    }

    /// Create using a specific executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Ffplay {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioPlayer for Ffplay {
    fn name(&self) -> &'static str {
        "ffplay"
    }

    fn start(&self, audio: &Path) -> Result<Box<dyn AudioHandle>, ToolError> {
        let child = Command::new(&self.program)
            .args(["-nodisp", "-autoexit"])
            .arg(audio)
            .args(["-loglevel", "quiet"])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ToolError::from_io(self.name(), e))?;

        tracing::debug!(pid = child.id(), audio = %audio.display(), "audio player started");
        Ok(Box::new(FfplayHandle::new(child)))
    }
}

/// A spawned audio player process.
///
/// Dropping the handle stops the process, so a child never outlives playback.
#[derive(Debug)]
pub struct FfplayHandle {
    child: Option<Child>,
}

impl FfplayHandle {
    /// Take ownership of an already spawned player.
    pub fn new(child: Child) -> Self {
        Self { child: Some(child) }
    }
}

impl AudioHandle for FfplayHandle {
    fn stop(&mut self) -> Result<(), ToolError> {
        let Some(mut child) = self.child.take() else {
            return Ok(());
        };

        // Already exited on its own (end of stream): just reap it
        if let Ok(Some(_)) = child.try_wait() {
            return Ok(());
        }

        terminate(&mut child).map_err(|e| ToolError::from_io("ffplay", e))?;
        child
            .wait()
            .map_err(|e| ToolError::from_io("ffplay", e))?;
        tracing::debug!("audio player stopped");
        Ok(())
    }
}

impl Drop for FfplayHandle {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            tracing::warn!(error = %e, "failed to stop audio player");
        }
    }
}

/// Ask the process to exit (SIGTERM on unix, a hard kill elsewhere).
#[cfg(unix)]
fn terminate(child: &mut Child) -> std::io::Result<()> {
    let pid = child.id() as libc::pid_t;
    // SAFETY: kill(2) has no memory-safety preconditions; the pid belongs to an
    // unreaped child so it cannot have been recycled.
    let rc = unsafe { libc::kill(pid, libc::SIGTERM) };
    if rc == 0 {
        Ok(())
    } else {
        Err(std::io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
fn terminate(child: &mut Child) -> std::io::Result<()> {
    child.kill()
}
