use serde::Serialize;

use crate::cmd::{connect_link, parse_timeout, ProbeArgs};
use crate::exit::{link_error, CliResult, SUCCESS};
use crate::output::OutputFormat;

#[derive(Serialize)]
struct ProbeOutput {
    schema_id: &'static str,
    addr: String,
    connected: bool,
    ip_address: Option<String>,
}

pub fn run(args: ProbeArgs, format: OutputFormat) -> CliResult<i32> {
    let timeout = parse_timeout(&args.timeout)?;
    let mut link = connect_link(&args.addr, timeout)?;

    let connected = link
        .is_connected()
        .map_err(|err| link_error("status query failed", err))?;

    let ip_address = if connected {
        let ip = link
            .ip_address()
            .map_err(|err| link_error("ip query failed", err))?;
        Some(ip.to_string())
    } else {
        None
    };

    let out = ProbeOutput {
        schema_id: "https://schemas.sidelink.dev/cli/v1/probe.schema.json",
        addr: args.addr,
        connected,
        ip_address,
    };
    print_probe(&out, format);
    Ok(SUCCESS)
}

fn print_probe(out: &ProbeOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("Co-processor status:");
            println!("  Bridge:     {}", out.addr);
            println!(
                "  Connected:  {}",
                if out.connected { "yes" } else { "no" }
            );
            match &out.ip_address {
                Some(ip) => println!("  IP address: {ip}"),
                None => println!("  IP address: unavailable"),
            }
        }
        OutputFormat::Raw => match &out.ip_address {
            Some(ip) => println!("{ip}"),
            None => println!("disconnected"),
        },
    }
}
