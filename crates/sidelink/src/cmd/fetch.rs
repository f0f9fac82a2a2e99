use crate::cmd::{connect_link, parse_timeout, FetchArgs};
use crate::exit::{link_error, CliResult, SUCCESS};
use crate::output::{print_body, OutputFormat};

pub fn run(args: FetchArgs, format: OutputFormat) -> CliResult<i32> {
    let timeout = parse_timeout(&args.timeout)?;
    let mut link = connect_link(&args.addr, timeout)?;

    let body = if args.post {
        link.post(&args.url)
    } else {
        link.get(&args.url)
    }
    .map_err(|err| link_error("request failed", err))?;

    print_body(&args.url, body.as_bytes(), format);
    Ok(SUCCESS)
}
