use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

use bytes::{Buf, BytesMut};

use crate::error::{Result, StreamError};
use crate::traits::ByteStream;

/// One direction of a duplex link: a byte queue plus its wakeup signal.
struct Channel {
    state: Mutex<ChannelState>,
    readable: Condvar,
}

struct ChannelState {
    queue: BytesMut,
    closed: bool,
}

impl Channel {
    fn new() -> Self {
        Self {
            state: Mutex::new(ChannelState {
                queue: BytesMut::new(),
                closed: false,
            }),
            readable: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ChannelState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn close(&self) {
        self.lock().closed = true;
        self.readable.notify_all();
    }
}

/// In-memory byte-stream endpoint.
///
/// [`MemoryDuplex::pair`] yields two cross-connected endpoints: what one
/// writes, the other reads. Used to emulate a co-processor in-process and to
/// script wire exchanges in tests. The queues synchronize internally so a
/// test can drive the far end from a second thread; the engine side still
/// sees a plain single-owner [`ByteStream`].
pub struct MemoryDuplex {
    rx: Arc<Channel>,
    tx: Arc<Channel>,
}

impl MemoryDuplex {
    /// Create a connected pair of endpoints.
    pub fn pair() -> (MemoryDuplex, MemoryDuplex) {
        let left = Arc::new(Channel::new());
        let right = Arc::new(Channel::new());
        (
            MemoryDuplex {
                rx: Arc::clone(&left),
                tx: Arc::clone(&right),
            },
            MemoryDuplex {
                rx: right,
                tx: left,
            },
        )
    }
}

impl ByteStream for MemoryDuplex {
    fn available(&mut self) -> Result<usize> {
        Ok(self.rx.lock().queue.len())
    }

    fn read_byte(&mut self) -> Result<u8> {
        let mut state = self.rx.lock();
        loop {
            if !state.queue.is_empty() {
                return Ok(state.queue.get_u8());
            }
            if state.closed {
                return Err(StreamError::Closed);
            }
            state = self
                .rx
                .readable
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        let mut state = self.tx.lock();
        if state.closed {
            return Err(StreamError::Closed);
        }
        state.queue.extend_from_slice(buf);
        self.tx.readable.notify_all();
        Ok(())
    }
}

impl Drop for MemoryDuplex {
    fn drop(&mut self) {
        // Wake the peer: its pending reads drain and then fail, its writes
        // fail immediately.
        self.rx.close();
        self.tx.close();
    }
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Duration;

    use super::*;

    #[test]
    fn writes_on_one_end_read_on_the_other() {
        let (mut a, mut b) = MemoryDuplex::pair();
        a.write_str("hi\n").unwrap();

        assert_eq!(b.available().unwrap(), 3);
        assert_eq!(b.read_byte().unwrap(), b'h');
        assert_eq!(b.read_byte().unwrap(), b'i');
        assert_eq!(b.read_byte().unwrap(), b'\n');
        assert_eq!(b.available().unwrap(), 0);
    }

    #[test]
    fn directions_are_independent() {
        let (mut a, mut b) = MemoryDuplex::pair();
        a.write_all(b"x").unwrap();
        b.write_all(b"y").unwrap();

        assert_eq!(a.read_byte().unwrap(), b'y');
        assert_eq!(b.read_byte().unwrap(), b'x');
    }

    #[test]
    fn read_blocks_until_peer_writes() {
        let (mut a, mut b) = MemoryDuplex::pair();

        let reader = thread::spawn(move || b.read_byte().unwrap());
        thread::sleep(Duration::from_millis(20));
        a.write_all(b"z").unwrap();

        assert_eq!(reader.join().unwrap(), b'z');
    }

    #[test]
    fn dropped_peer_fails_reads_after_drain() {
        let (a, mut b) = MemoryDuplex::pair();
        {
            let mut a = a;
            a.write_all(b"q").unwrap();
        }
        assert_eq!(b.read_byte().unwrap(), b'q');
        assert!(matches!(b.read_byte(), Err(StreamError::Closed)));
    }

    #[test]
    fn dropped_peer_fails_writes() {
        let (a, mut b) = MemoryDuplex::pair();
        drop(a);
        assert!(matches!(b.write_all(b"q"), Err(StreamError::Closed)));
    }

    #[test]
    fn available_is_zero_after_close_and_drain() {
        let (a, mut b) = MemoryDuplex::pair();
        drop(a);
        assert_eq!(b.available().unwrap(), 0);
    }
}
