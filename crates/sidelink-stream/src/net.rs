use std::fmt;
use std::io::{ErrorKind, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};

use tracing::debug;

use crate::error::{Result, StreamError};
use crate::traits::ByteStream;

/// TCP adapter for the byte-stream contract.
///
/// Co-processors are usually wired over a UART, but development setups and
/// simulators commonly bridge that UART onto a TCP port. This adapter speaks
/// to such bridges. The availability check uses a non-blocking `peek`, so no
/// bytes are consumed by it.
pub struct TcpByteStream {
    stream: TcpStream,
}

impl TcpByteStream {
    /// Connect to a UART-over-TCP bridge (blocking).
    pub fn connect<A: ToSocketAddrs + fmt::Display>(addr: A) -> Result<Self> {
        let stream = TcpStream::connect(&addr).map_err(|source| StreamError::Connect {
            addr: addr.to_string(),
            source,
        })?;
        stream.set_nodelay(true)?;
        debug!(%addr, "connected to co-processor bridge");
        Ok(Self { stream })
    }

    /// Wrap an already-connected stream.
    pub fn from_stream(stream: TcpStream) -> Result<Self> {
        stream.set_nodelay(true)?;
        Ok(Self { stream })
    }

    /// Borrow the underlying socket.
    pub fn get_ref(&self) -> &TcpStream {
        &self.stream
    }

    /// Consume the adapter and return the socket.
    pub fn into_inner(self) -> TcpStream {
        self.stream
    }
}

impl ByteStream for TcpByteStream {
    fn available(&mut self) -> Result<usize> {
        self.stream.set_nonblocking(true)?;
        let mut probe = [0u8; 64];
        let peeked = self.stream.peek(&mut probe);
        self.stream.set_nonblocking(false)?;
        match peeked {
            Ok(count) => Ok(count),
            Err(err) if err.kind() == ErrorKind::WouldBlock => Ok(0),
            Err(err) => Err(StreamError::Io(err)),
        }
    }

    fn read_byte(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        loop {
            match self.stream.read(&mut byte) {
                Ok(0) => return Err(StreamError::Closed),
                Ok(_) => return Ok(byte[0]),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(StreamError::Io(err)),
            }
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        let mut offset = 0usize;
        while offset < buf.len() {
            match self.stream.write(&buf[offset..]) {
                Ok(0) => return Err(StreamError::Closed),
                Ok(written) => offset += written,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(StreamError::Io(err)),
            }
        }
        loop {
            match self.stream.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(StreamError::Io(err)),
            }
        }
    }
}

impl fmt::Debug for TcpByteStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TcpByteStream")
            .field("peer", &self.stream.peer_addr().ok())
            .finish()
    }
}
