//! Delegate network operations to a WiFi co-processor over a byte stream.
//!
//! sidelink lets a memory-constrained host hand WiFi provisioning,
//! connection control, and HTTP requests to a companion co-processor over a
//! newline-delimited serial protocol.
//!
//! # Crate Structure
//!
//! - [`collections`] — Minimal owning containers (array, string, hash map)
//! - [`stream`] — Byte-stream transport contract and concrete transports
//! - [`wire`] — Newline framing, deadline reads, command vocabulary
//! - [`engine`] — The `Link` driver (behind the `engine` feature)

/// Re-export container types.
pub mod collections {
    pub use sidelink_collections::*;
}

/// Re-export transport types.
pub mod stream {
    pub use sidelink_stream::*;
}

/// Re-export wire framing types.
pub mod wire {
    pub use sidelink_wire::*;
}

/// Re-export the link driver (requires `engine` feature).
#[cfg(feature = "engine")]
pub mod engine {
    pub use sidelink_engine::*;
}
