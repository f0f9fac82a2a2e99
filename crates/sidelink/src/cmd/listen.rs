use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::cmd::{connect_link, parse_timeout, ListenArgs};
use crate::exit::{link_error, CliError, CliResult, SUCCESS};
use crate::output::{print_request, OutputFormat};

/// Idle delay between polls; one poll per inbound line burst is plenty.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub fn run(args: ListenArgs, format: OutputFormat) -> CliResult<i32> {
    let timeout = parse_timeout(&args.timeout)?;
    let mut link = connect_link(&args.addr, timeout)?;

    let running = Arc::new(AtomicBool::new(true));
    install_ctrlc_handler(running.clone())?;

    let mut printed = 0usize;

    while running.load(Ordering::SeqCst) {
        match link.poll() {
            Ok(Some(request)) => {
                print_request(&request, format);
                printed = printed.saturating_add(1);

                if let Some(count) = args.count {
                    if printed >= count {
                        return Ok(SUCCESS);
                    }
                }
            }
            Ok(None) => std::thread::sleep(POLL_INTERVAL),
            // A mid-request timeout already yielded a partial request above;
            // a timeout here means the line went quiet. Keep polling.
            Err(err) if err.is_timeout() => continue,
            Err(err) => return Err(link_error("poll failed", err)),
        }
    }

    Ok(SUCCESS)
}

fn install_ctrlc_handler(running: Arc<AtomicBool>) -> CliResult<()> {
    ctrlc::set_handler(move || {
        running.store(false, Ordering::SeqCst);
    })
    .map_err(|err| {
        CliError::new(
            crate::exit::INTERNAL,
            format!("signal handler setup failed: {err}"),
        )
    })
}
