//! Newline framing for the sidelink wire protocol.
//!
//! The wire format is newline-delimited ASCII text. Outbound traffic is a
//! command token, optionally followed by one space and a value. Inbound
//! traffic is read one line at a time under a deadline measured from call
//! entry; a silent stream ends in [`WireError::Timeout`], never a hang.
//!
//! This is the framing half of the protocol; the driver that gives the
//! lines meaning lives in `sidelink-engine`.

pub mod commands;
pub mod error;
pub mod reader;
pub mod token;
pub mod writer;

pub use commands::*;
pub use error::{Result, WireError};
pub use reader::{read_line, read_reply, split_command_value, DEFAULT_READ_TIMEOUT};
pub use token::{Token, TOK_GET_VALUE, TOK_GET_VAR, TOK_METHOD, TOK_PATH_FRAGMENT, TOK_RESPOND};
pub use writer::{send_command, send_command_value, send_data};
