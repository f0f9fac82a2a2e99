//! Byte-stream transport contract for the sidelink protocol engine.
//!
//! The engine needs exactly three things from its transport: a non-blocking
//! "bytes available" check, a blocking single-byte read, and a byte/text
//! write. [`ByteStream`] captures that contract; everything else in the
//! workspace builds on top of it.
//!
//! Two concrete transports ship here:
//! - [`MemoryDuplex`] — cross-connected in-memory queues, for firmware
//!   emulation and scripted tests
//! - [`TcpByteStream`] — a TCP adapter for UART-over-TCP bridges

pub mod error;
pub mod mem;
pub mod net;
pub mod traits;

pub use error::{Result, StreamError};
pub use mem::MemoryDuplex;
pub use net::TcpByteStream;
pub use traits::ByteStream;
