use thiserror::Error;

/// Unified error type for release-tag operations
#[derive(Error, Debug)]
pub enum ReleaseTagError {
    #[error("git {command} failed{}: {stderr}", exit_code_suffix(.code))]
    Command {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_code_suffix(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!(" (exit code {})", c),
        None => String::new(),
    }
}

/// Convenience type alias for Results in release-tag
pub type Result<T> = std::result::Result<T, ReleaseTagError>;

impl ReleaseTagError {
    /// Create a command-failure error carrying the child's exit status
    pub fn command(
        command: impl Into<String>,
        code: Option<i32>,
        stderr: impl Into<String>,
    ) -> Self {
        ReleaseTagError::Command {
            command: command.into(),
            code,
            stderr: stderr.into().trim_end().to_string(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseTagError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseTagError::Version(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        ReleaseTagError::Tag(msg.into())
    }

    /// Exit code to propagate when a git invocation failed.
    ///
    /// Returns the child's code for command failures, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReleaseTagError::Command { code, .. } => code.unwrap_or(1),
            _ => 1,
        }
    }
}
