use std::time::Duration;

use sidelink_stream::StreamError;

/// Errors that can occur while framing lines on the wire.
///
/// `Timeout` and `UnexpectedCommand` stand in for payload data — callers
/// must check for them before treating a read as data.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// No line terminator arrived within the deadline.
    #[error("no line terminator within {0:?}")]
    Timeout(Duration),

    /// A reply line did not echo the expected command token.
    #[error("unexpected reply (expected '{expected}'): {line}")]
    UnexpectedCommand { expected: String, line: String },

    /// The transport failed underneath the framing.
    #[error("stream error: {0}")]
    Stream(#[from] StreamError),
}

impl WireError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, WireError::Timeout(_))
    }

    pub fn is_unexpected_command(&self) -> bool {
        matches!(self, WireError::UnexpectedCommand { .. })
    }
}

pub type Result<T> = std::result::Result<T, WireError>;
