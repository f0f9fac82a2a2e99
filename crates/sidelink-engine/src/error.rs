use sidelink_stream::StreamError;
use sidelink_wire::WireError;

/// Errors that can occur while driving the co-processor link.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// Wire-level failure (timeout, echo mismatch, framing).
    #[error("wire error: {0}")]
    Wire(#[from] WireError),

    /// Transport-level failure.
    #[error("stream error: {0}")]
    Stream(#[from] StreamError),
}

impl LinkError {
    /// True if the failure was a read deadline expiring. Timeouts are never
    /// retried internally; the caller decides.
    pub fn is_timeout(&self) -> bool {
        matches!(self, LinkError::Wire(err) if err.is_timeout())
    }

    /// True if the co-processor echoed a different command than expected.
    pub fn is_unexpected_reply(&self) -> bool {
        matches!(self, LinkError::Wire(err) if err.is_unexpected_command())
    }
}

pub type Result<T> = std::result::Result<T, LinkError>;
