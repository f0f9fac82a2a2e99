use clap::ValueEnum;
use sidelink_engine::LedMode;
use sidelink_wire::DEFAULT_READ_TIMEOUT;

use crate::cmd::{connect_link, LedArgs};
use crate::exit::{link_error, CliResult, SUCCESS};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LedModeArg {
    Activity,
    Connection,
    Off,
    On,
}

impl From<LedModeArg> for LedMode {
    fn from(arg: LedModeArg) -> Self {
        match arg {
            LedModeArg::Activity => LedMode::Activity,
            LedModeArg::Connection => LedMode::Connection,
            LedModeArg::Off => LedMode::Off,
            LedModeArg::On => LedMode::On,
        }
    }
}

pub fn run(args: LedArgs) -> CliResult<i32> {
    let mut link = connect_link(&args.addr, DEFAULT_READ_TIMEOUT)?;
    link.set_led_mode(args.mode.into())
        .map_err(|err| link_error("led mode failed", err))?;
    Ok(SUCCESS)
}
