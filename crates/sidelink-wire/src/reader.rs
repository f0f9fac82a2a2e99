use std::time::{Duration, Instant};

use sidelink_collections::ZString;
use sidelink_stream::ByteStream;
use tracing::debug;

use crate::error::{Result, WireError};

/// Default deadline for a blocking line read.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Read one newline-terminated line, blocking at most `timeout` measured
/// from call entry.
///
/// The newline is stripped. The wait is a bounded busy-poll: first for the
/// line's first byte, then for each subsequent byte, so a co-processor that
/// goes quiet mid-line still ends in [`WireError::Timeout`].
pub fn read_line<S: ByteStream>(stream: &mut S, timeout: Duration) -> Result<ZString> {
    let deadline = Instant::now() + timeout;

    while stream.available()? == 0 {
        if Instant::now() > deadline {
            return Err(WireError::Timeout(timeout));
        }
        std::thread::yield_now();
    }

    let mut line = ZString::new();
    loop {
        if stream.available()? > 0 {
            let byte = stream.read_byte()?;
            if byte == b'\n' {
                break;
            }
            line.push_byte(byte);
        } else if Instant::now() > deadline {
            return Err(WireError::Timeout(timeout));
        } else {
            std::thread::yield_now();
        }
    }
    Ok(line)
}

/// Read one line and validate it echoes `expected`.
///
/// The line must begin with the expected token followed by exactly one
/// space separator; the remainder after the separator is returned. A line
/// consisting of the token alone yields an empty remainder. Anything else
/// yields [`WireError::UnexpectedCommand`].
pub fn read_reply<S: ByteStream>(
    stream: &mut S,
    expected: &str,
    timeout: Duration,
) -> Result<ZString> {
    let line = read_line(stream, timeout)?;
    let bytes = line.as_bytes();
    let token = expected.as_bytes();

    if !bytes.starts_with(token) {
        debug!(expected, %line, "reply echoed a different command");
        return Err(unexpected(expected, &line));
    }
    let rest = &bytes[token.len()..];
    if rest.is_empty() {
        return Ok(ZString::new());
    }
    if rest[0] != b' ' {
        debug!(expected, %line, "reply token not followed by separator");
        return Err(unexpected(expected, &line));
    }
    Ok(ZString::from_bytes(&rest[1..]))
}

/// Split a line into its command token and value at the first space.
///
/// A line with no space is all command and an empty value.
pub fn split_command_value(line: &ZString) -> (ZString, ZString) {
    match line.find(" ", 0) {
        Some(space) => {
            let bytes = line.as_bytes();
            (
                ZString::from_bytes(&bytes[..space]),
                ZString::from_bytes(&bytes[space + 1..]),
            )
        }
        None => (line.clone(), ZString::new()),
    }
}

fn unexpected(expected: &str, line: &ZString) -> WireError {
    WireError::UnexpectedCommand {
        expected: expected.to_string(),
        line: line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use sidelink_stream::MemoryDuplex;

    use super::*;

    const FAST: Duration = Duration::from_millis(100);

    #[test]
    fn reads_one_line_at_a_time() {
        let (mut near, mut far) = MemoryDuplex::pair();
        far.write_str("first\nsecond\n").unwrap();

        assert_eq!(read_line(&mut near, FAST).unwrap(), "first");
        assert_eq!(read_line(&mut near, FAST).unwrap(), "second");
    }

    #[test]
    fn empty_line_is_valid() {
        let (mut near, mut far) = MemoryDuplex::pair();
        far.write_str("\n").unwrap();
        assert_eq!(read_line(&mut near, FAST).unwrap(), "");
    }

    #[test]
    fn silent_stream_times_out_instead_of_hanging() {
        let (mut near, _far) = MemoryDuplex::pair();
        let started = Instant::now();
        let err = read_line(&mut near, Duration::from_millis(50)).unwrap_err();
        assert!(err.is_timeout());
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn partial_line_without_terminator_times_out() {
        let (mut near, mut far) = MemoryDuplex::pair();
        far.write_str("no newline here").unwrap();
        let err = read_line(&mut near, Duration::from_millis(50)).unwrap_err();
        assert!(err.is_timeout());
    }

    #[test]
    fn reply_remainder_after_token() {
        let (mut near, mut far) = MemoryDuplex::pair();
        far.write_str("get_ip 10.0.0.7\n").unwrap();
        let reply = read_reply(&mut near, "get_ip", FAST).unwrap();
        assert_eq!(reply, "10.0.0.7");
    }

    #[test]
    fn reply_token_alone_yields_empty_remainder() {
        let (mut near, mut far) = MemoryDuplex::pair();
        far.write_str("connect\n").unwrap();
        let reply = read_reply(&mut near, "connect", FAST).unwrap();
        assert!(reply.is_empty());
    }

    #[test]
    fn mismatched_token_is_unexpected() {
        let (mut near, mut far) = MemoryDuplex::pair();
        far.write_str("get_ip 10.0.0.7\n").unwrap();
        let err = read_reply(&mut near, "is_connected", FAST).unwrap_err();
        assert!(err.is_unexpected_command());
    }

    #[test]
    fn token_must_end_at_the_separator() {
        let (mut near, mut far) = MemoryDuplex::pair();
        far.write_str("is_connectedness 1\n").unwrap();
        let err = read_reply(&mut near, "is_connected", FAST).unwrap_err();
        assert!(err.is_unexpected_command());
    }

    #[test]
    fn split_at_first_space_only() {
        let (command, value) = split_command_value(&ZString::from("method GET"));
        assert_eq!(command, "method");
        assert_eq!(value, "GET");

        let (command, value) = split_command_value(&ZString::from("get_var a b c"));
        assert_eq!(command, "get_var");
        assert_eq!(value, "a b c");
    }

    #[test]
    fn split_without_space_has_empty_value() {
        let (command, value) = split_command_value(&ZString::from("respond"));
        assert_eq!(command, "respond");
        assert!(value.is_empty());
    }
}
