//! Minimal owning containers for the sidelink protocol engine.
//!
//! The engine targets hosts where the full collections machinery of a
//! standard library cannot be assumed, so it carries its own: a growable
//! contiguous array with explicit storage management, a NUL-terminated
//! growable byte string, and a fixed-bucket chained hash map. Only the
//! operations the protocol layers need are provided.
//!
//! Every allocating operation has two channels: the plain method diverts to
//! [`std::alloc::handle_alloc_error`] when the allocator fails, while the
//! `try_` variant reports [`CollectionError::OutOfMemory`] so the embedding
//! context can decide whether to abort.

pub mod array;
pub mod error;
pub mod map;
pub mod zstring;

pub use array::{Array, Cursor};
pub use error::{CollectionError, Result};
pub use map::{BucketKey, ChainMap, BUCKET_COUNT};
pub use zstring::ZString;
