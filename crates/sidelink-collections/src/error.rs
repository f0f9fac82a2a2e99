/// Errors reported by the checked container operations.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// An index or position was outside the live range.
    #[error("index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },

    /// A map lookup failed to find the key.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// The allocator could not satisfy a growth request.
    #[error("allocation of {bytes} bytes failed")]
    OutOfMemory { bytes: usize },
}

pub type Result<T> = std::result::Result<T, CollectionError>;
