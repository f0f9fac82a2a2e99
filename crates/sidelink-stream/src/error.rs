/// Errors that can occur on a byte-stream transport.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// Failed to connect to the specified address.
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        source: std::io::Error,
    },

    /// An I/O error occurred on the stream.
    #[error("stream I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The peer went away with no more bytes to read.
    #[error("stream closed by peer")]
    Closed,
}

pub type Result<T> = std::result::Result<T, StreamError>;
