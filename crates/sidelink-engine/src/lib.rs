//! Command/response driver for a WiFi co-processor.
//!
//! [`Link`] owns a byte stream to the co-processor and drives the
//! newline-delimited wire protocol over it: one-way provisioning, connection
//! control, delegated HTTP requests, and poll-driven parsing of inbound
//! requests the co-processor forwards from the network.
//!
//! Everything is synchronous and single-threaded: the engine advances only
//! when the host calls into it, and the only blocking it ever does is a
//! deadline-bounded line read.

pub mod config;
pub mod error;
pub mod link;
pub mod request;
pub mod types;

pub use config::LinkConfig;
pub use error::{LinkError, Result};
pub use link::Link;
pub use request::{Request, RequestVar};
pub use types::{HttpVerb, LedMode};
