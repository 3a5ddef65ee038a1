use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::task::yield_now;

use crate::transport::Transport;

/// Bytes written by one end and not yet read by the other.
type Pipe = Arc<Mutex<VecDeque<u8>>>;

fn lock(pipe: &Pipe) -> anyhow::Result<MutexGuard<'_, VecDeque<u8>>> {
    pipe.lock().map_err(|_| anyhow::anyhow!("Channel poisoned"))
}

/// One end of an in-process connection, used for local games and tests.
///
/// Dropping an end closes the connection: the other end can still read what
/// was already written, after which reads fail with "Channel closed".
pub struct InMemoryTransport {
    inbox: Pipe,
    outbox: Pipe,
}

impl InMemoryTransport {
    pub fn pair() -> (Self, Self) {
        let a_to_b = Pipe::default();
        let b_to_a = Pipe::default();
        let a = Self {
            inbox: Arc::clone(&b_to_a),
            outbox: Arc::clone(&a_to_b),
        };
        let b = Self {
            inbox: a_to_b,
            outbox: b_to_a,
        };
        (a, b)
    }

    fn peer_gone(pipe: &Pipe) -> bool {
        Arc::strong_count(pipe) == 1
    }

    /// Move `buf.len()` bytes out of the inbox if they are all there.
    fn try_take(&self, buf: &mut [u8]) -> anyhow::Result<bool> {
        let mut inbox = lock(&self.inbox)?;
        if inbox.len() < buf.len() {
            return Ok(false);
        }
        let wanted = buf.len();
        for (slot, byte) in buf.iter_mut().zip(inbox.drain(..wanted)) {
            *slot = byte;
        }
        Ok(true)
    }
}

#[async_trait::async_trait]
impl Transport for InMemoryTransport {
    async fn write_all(&mut self, data: &[u8]) -> anyhow::Result<()> {
        if Self::peer_gone(&self.outbox) {
            return Err(anyhow::anyhow!("Channel closed"));
        }
        lock(&self.outbox)?.extend(data);
        Ok(())
    }

    async fn read_exact(&mut self, buf: &mut [u8]) -> anyhow::Result<()> {
        while !self.try_take(buf)? {
            if Self::peer_gone(&self.inbox) {
                return Err(anyhow::anyhow!("Channel closed"));
            }
            yield_now().await;
        }
        Ok(())
    }
}
