use crate::error::Result;

/// The byte-stream contract the protocol engine drives.
///
/// Implementations wrap whatever actually carries the bytes — a UART, a
/// socket, an in-memory queue. The engine performs no buffering of its own
/// beyond the line it is currently assembling, so `available` must reflect
/// bytes that `read_byte` can return without blocking.
pub trait ByteStream {
    /// Number of bytes that can be read right now without blocking.
    fn available(&mut self) -> Result<usize>;

    /// Read one byte, blocking until it arrives.
    fn read_byte(&mut self) -> Result<u8>;

    /// Write the whole buffer.
    fn write_all(&mut self, buf: &[u8]) -> Result<()>;

    /// Write text. Provided for call sites that speak in commands.
    fn write_str(&mut self, text: &str) -> Result<()> {
        self.write_all(text.as_bytes())
    }
}

impl<S: ByteStream + ?Sized> ByteStream for &mut S {
    fn available(&mut self) -> Result<usize> {
        (**self).available()
    }

    fn read_byte(&mut self) -> Result<u8> {
        (**self).read_byte()
    }

    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        (**self).write_all(buf)
    }
}
