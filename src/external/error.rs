//! External tool errors.

/// Error from invoking an external executable.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("{0} not found in PATH")]
    NotFound(&'static str),

    #[error("Failed to run {tool}: {error}")]
    Spawn {
        tool: &'static str,
        error: std::io::Error,
    },

    #[error("{tool} exited with {}", describe_code(*.code))]
    Failed { tool: &'static str, code: Option<i32> },
}

impl ToolError {
    /// Map a spawn/wait error, separating "binary missing" from other I/O failures.
    pub fn from_io(tool: &'static str, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(tool)
        } else {
            Self::Spawn { tool, error }
        }
    }
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}
