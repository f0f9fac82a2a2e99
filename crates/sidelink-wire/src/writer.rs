use sidelink_stream::ByteStream;

use crate::error::Result;

/// Send a bare command line: `<command>\n`.
pub fn send_command<S: ByteStream>(stream: &mut S, command: &str) -> Result<()> {
    stream.write_str(command)?;
    stream.write_all(b"\n")?;
    Ok(())
}

/// Send a command with a value: `<command> <value>\n`.
pub fn send_command_value<S: ByteStream, V: AsRef<[u8]>>(
    stream: &mut S,
    command: &str,
    value: V,
) -> Result<()> {
    stream.write_str(command)?;
    stream.write_all(b" ")?;
    stream.write_all(value.as_ref())?;
    stream.write_all(b"\n")?;
    Ok(())
}

/// Send a raw data line with no command token: `<data>\n`.
pub fn send_data<S: ByteStream, V: AsRef<[u8]>>(stream: &mut S, data: V) -> Result<()> {
    stream.write_all(data.as_ref())?;
    stream.write_all(b"\n")?;
    Ok(())
}
