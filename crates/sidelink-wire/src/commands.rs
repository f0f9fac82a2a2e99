//! Wire command vocabulary.
//!
//! Every token below travels as ASCII text followed by an optional value and
//! a newline. The set is shared with the co-processor firmware; changing a
//! string here breaks deployed devices.

// ============================================================================
// Outbound commands (host → co-processor)
// ============================================================================

/// Provision the network SSID.
pub const CMD_SSID: &str = "ssid";
/// Provision the network password.
pub const CMD_PASSWORD: &str = "password";
/// Allow the co-processor to drive GPIO on the host's behalf.
pub const CMD_ALLOW_GPIO: &str = "allow_gpio";
/// Revoke GPIO delegation.
pub const CMD_DISALLOW_GPIO: &str = "disallow_gpio";
/// Join the provisioned network.
pub const CMD_CONNECT: &str = "connect";
/// Leave the network.
pub const CMD_DISCONNECT: &str = "disconnect";
/// Query connection state; the reply echoes the command with `1` or `0`.
pub const CMD_IS_CONNECTED: &str = "is_connected";
/// Query the assigned IP address; the reply echoes the command.
pub const CMD_GET_IP: &str = "get_ip";
/// Select the status LED mode (decimal value).
pub const CMD_LED_MODE: &str = "led_mode";
/// Issue an HTTP GET for a URL.
pub const CMD_GET: &str = "get";
/// Issue an HTTP POST for a URL.
pub const CMD_POST: &str = "post";

// ============================================================================
// Response framing (co-processor → host, around get/post replies)
// ============================================================================

/// First line of a delegated HTTP response.
pub const RESPONSE_START: &str = "response_start";
/// Last line of a delegated HTTP response.
pub const RESPONSE_END: &str = "response_end";

// ============================================================================
// Reserved legacy tokens
// ============================================================================

/// Firmware debug channel marker. Reserved; not sent by this engine.
pub const CMD_DEBUG: &str = "debug";
/// Fragment-count announcement. Reserved; superseded by per-fragment lines.
pub const CMD_NUM_FRAGMENTS: &str = "num_fragments";
/// Timeout announcement. Reserved; timeouts are signalled locally, not on
/// the wire.
pub const CMD_TIMEOUT: &str = "timeout";
