//! Error types for the stream processor.

/// Errors returned by [`crate::StreamProcessor::run`].
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// The pseudo-terminal could not be opened or its handles cloned.
    #[error("opening pty: {0}")]
    Pty(String),

    /// The child program could not be started.
    #[error("starting {program}: {message}")]
    Spawn { program: String, message: String },

    /// The controlling terminal could not be switched to raw mode.
    #[error("setting raw mode: {0}")]
    RawMode(#[source] std::io::Error),

    /// Waiting for the child program failed.
    #[error("waiting for command: {0}")]
    Wait(#[source] std::io::Error),

    /// The child program exited unsuccessfully.
    #[error("command finished: exit status {0}")]
    ExitStatus(u32),

    /// A relay task panicked or was cancelled.
    #[error("relay task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl TerminalError {
    /// Exit code to propagate to the shell, if the child reported one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            TerminalError::ExitStatus(code) => Some(i32::try_from(*code).unwrap_or(1)),
            _ => None,
        }
    }
}
