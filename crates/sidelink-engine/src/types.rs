use sidelink_wire::{CMD_GET, CMD_POST};

/// Status LED behavior on the co-processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedMode {
    /// Blink on wire activity.
    Activity = 0,
    /// Reflect connection state.
    Connection = 1,
    Off = 2,
    On = 3,
}

impl LedMode {
    /// Decimal text sent on the wire.
    pub fn wire_value(self) -> &'static str {
        match self {
            LedMode::Activity => "0",
            LedMode::Connection => "1",
            LedMode::Off => "2",
            LedMode::On => "3",
        }
    }

    pub fn from_value(value: u8) -> Option<LedMode> {
        match value {
            0 => Some(LedMode::Activity),
            1 => Some(LedMode::Connection),
            2 => Some(LedMode::Off),
            3 => Some(LedMode::On),
            _ => None,
        }
    }
}

/// Verb for a delegated HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVerb {
    Get,
    Post,
}

impl HttpVerb {
    pub fn command(self) -> &'static str {
        match self {
            HttpVerb::Get => CMD_GET,
            HttpVerb::Post => CMD_POST,
        }
    }
}
