use std::time::Duration;

use clap::{Args, Subcommand};
use sidelink_collections::ZString;
use sidelink_engine::{Link, LinkConfig};
use sidelink_stream::TcpByteStream;

use crate::exit::{stream_error, CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod fetch;
pub mod led;
pub mod listen;
pub mod probe;
pub mod provision;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Provision SSID, password, and GPIO delegation.
    Provision(ProvisionArgs),
    /// Check connection state and fetch the assigned IP.
    Probe(ProbeArgs),
    /// Delegate an HTTP request and print the response body.
    Fetch(FetchArgs),
    /// Set the status LED mode.
    Led(LedArgs),
    /// Poll for inbound requests and print them.
    Listen(ListenArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Provision(args) => provision::run(args),
        Command::Probe(args) => probe::run(args, format),
        Command::Fetch(args) => fetch::run(args, format),
        Command::Led(args) => led::run(args),
        Command::Listen(args) => listen::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct ProvisionArgs {
    /// Address of the UART-over-TCP bridge (host:port).
    pub addr: String,
    /// Network SSID.
    #[arg(long)]
    pub ssid: String,
    /// Network password.
    #[arg(long, env = "SIDELINK_PASSWORD", hide_env_values = true)]
    pub password: String,
    /// Allow the co-processor to drive GPIO.
    #[arg(long)]
    pub allow_gpio: bool,
    /// Also ask the co-processor to join the network right away.
    #[arg(long)]
    pub connect: bool,
}

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Address of the UART-over-TCP bridge (host:port).
    pub addr: String,
    /// Reply deadline (e.g. 5s, 500ms).
    #[arg(long, default_value = "10s")]
    pub timeout: String,
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Address of the UART-over-TCP bridge (host:port).
    pub addr: String,
    /// URL to fetch.
    pub url: String,
    /// Use POST instead of GET.
    #[arg(long)]
    pub post: bool,
    /// Reply deadline (e.g. 5s, 500ms).
    #[arg(long, default_value = "10s")]
    pub timeout: String,
}

#[derive(Args, Debug)]
pub struct LedArgs {
    /// Address of the UART-over-TCP bridge (host:port).
    pub addr: String,
    /// LED mode.
    #[arg(value_enum)]
    pub mode: led::LedModeArg,
}

#[derive(Args, Debug)]
pub struct ListenArgs {
    /// Address of the UART-over-TCP bridge (host:port).
    pub addr: String,
    /// Exit after printing N requests.
    #[arg(long)]
    pub count: Option<usize>,
    /// Per-request read deadline (e.g. 5s, 500ms).
    #[arg(long, default_value = "10s")]
    pub timeout: String,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Connect to a bridge and wrap it in a link with the given reply deadline.
pub fn connect_link(addr: &str, timeout: Duration) -> CliResult<Link<TcpByteStream>> {
    let stream =
        TcpByteStream::connect(addr).map_err(|err| stream_error("connect failed", err))?;
    let config = LinkConfig {
        response_timeout: timeout,
        ..LinkConfig::default()
    };
    Ok(Link::new(stream, config))
}

/// Parse a human duration such as `5s`, `500ms`, or a bare second count.
pub fn parse_timeout(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "timeout must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "s")
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid timeout value: {input}")))?;

    if value == 0 {
        return Err(CliError::new(USAGE, "timeout must be greater than zero"));
    }

    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        "s" => Ok(Duration::from_secs(value)),
        _ => Err(CliError::new(
            USAGE,
            format!("unsupported timeout unit: {unit}"),
        )),
    }
}

/// Build provisioning config from CLI arguments.
pub fn provisioning_config(args: &ProvisionArgs) -> LinkConfig {
    LinkConfig {
        ssid: ZString::from(args.ssid.as_str()),
        password: ZString::from(args.password.as_str()),
        allow_gpio: args.allow_gpio,
        ..LinkConfig::default()
    }
}
