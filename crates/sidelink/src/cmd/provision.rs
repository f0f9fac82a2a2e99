use sidelink_engine::Link;
use sidelink_stream::TcpByteStream;
use tracing::info;

use crate::cmd::{provisioning_config, ProvisionArgs};
use crate::exit::{link_error, stream_error, CliResult, SUCCESS};

pub fn run(args: ProvisionArgs) -> CliResult<i32> {
    let stream = TcpByteStream::connect(args.addr.as_str())
        .map_err(|err| stream_error("connect failed", err))?;
    let config = provisioning_config(&args);
    let mut link = Link::new(stream, config);

    link.init()
        .map_err(|err| link_error("provisioning failed", err))?;
    info!(ssid = %args.ssid, "co-processor provisioned");

    if args.connect {
        link.connect()
            .map_err(|err| link_error("connect request failed", err))?;
        info!("join requested");
    }

    Ok(SUCCESS)
}
