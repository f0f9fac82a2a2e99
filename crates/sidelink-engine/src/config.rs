use std::fmt;
use std::time::Duration;

use sidelink_collections::ZString;
use sidelink_wire::DEFAULT_READ_TIMEOUT;

/// Configuration for a co-processor link.
#[derive(Clone)]
pub struct LinkConfig {
    /// Network SSID sent during provisioning.
    pub ssid: ZString,
    /// Network password sent during provisioning.
    /// Travels in plaintext on the local link; never log it.
    pub password: ZString,
    /// Whether the co-processor may drive GPIO on the host's behalf.
    pub allow_gpio: bool,
    /// UART baud rate the link is provisioned for. Carried for setups that
    /// renegotiate line speed out of band.
    pub baud_rate: u32,
    /// Deadline for each blocking line read, measured from call entry.
    pub response_timeout: Duration,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            ssid: ZString::new(),
            password: ZString::new(),
            allow_gpio: false,
            baud_rate: 115_200,
            response_timeout: DEFAULT_READ_TIMEOUT,
        }
    }
}

impl fmt::Debug for LinkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkConfig")
            .field("ssid", &self.ssid)
            .field(
                "password",
                &format_args!("<redacted:{} bytes>", self.password.len()),
            )
            .field("allow_gpio", &self.allow_gpio)
            .field("baud_rate", &self.baud_rate)
            .field("response_timeout", &self.response_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LinkConfig::default();
        assert!(config.ssid.is_empty());
        assert!(!config.allow_gpio);
        assert_eq!(config.response_timeout, Duration::from_secs(10));
    }

    #[test]
    fn debug_output_redacts_password() {
        let config = LinkConfig {
            ssid: ZString::from("hangar-2"),
            password: ZString::from("super-secret"),
            ..LinkConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(rendered.contains("<redacted:12 bytes>"));
        assert!(!rendered.contains("super-secret"));
    }
}
