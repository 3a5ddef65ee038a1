use std::future::Future;
use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, ToSocketAddrs};
use tokio::time::{timeout, Duration};

use crate::transport::Transport;

/// Single TCP connection carrying one game.
///
/// Reads and writes block until complete. An optional timeout turns an
/// unresponsive peer into an error instead of a hang.
pub struct TcpTransport {
    stream: TcpStream,
    timeout_duration: Option<Duration>,
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            timeout_duration: None,
        }
    }

    pub fn with_timeout(stream: TcpStream, timeout_duration: Duration) -> Self {
        Self {
            stream,
            timeout_duration: Some(timeout_duration),
        }
    }

    /// Resolve `addr` and connect to the first reachable address.
    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        stream.set_nodelay(true)?;
        Ok(Self::new(stream))
    }

    /// Listen on `addr` and accept exactly one connection.
    pub async fn accept_one<A: ToSocketAddrs>(addr: A) -> anyhow::Result<(Self, SocketAddr)> {
        let listener = TcpListener::bind(addr).await?;
        log::info!("listening on {}", listener.local_addr()?);
        let (stream, peer) = listener.accept().await?;
        stream.set_nodelay(true)?;
        Ok((Self::new(stream), peer))
    }

    /// Apply `timeout_duration` to every subsequent read and write.
    pub fn set_timeout(&mut self, timeout_duration: Option<Duration>) {
        self.timeout_duration = timeout_duration;
    }

    pub fn peer_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.stream.peer_addr()?)
    }

    async fn bounded<T>(
        limit: Option<Duration>,
        op: impl Future<Output = anyhow::Result<T>>,
        what: &str,
    ) -> anyhow::Result<T> {
        match limit {
            Some(limit) => timeout(limit, op)
                .await
                .map_err(|_| anyhow::anyhow!("{} timeout after {:?}", what, limit))?,
            None => op.await,
        }
    }
}

fn map_io_error(e: std::io::Error, what: &str) -> anyhow::Error {
    match e.kind() {
        std::io::ErrorKind::UnexpectedEof
        | std::io::ErrorKind::BrokenPipe
        | std::io::ErrorKind::ConnectionReset => anyhow::anyhow!("Connection closed by peer"),
        _ => anyhow::anyhow!("{} error: {}", what, e),
    }
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn write_all(&mut self, data: &[u8]) -> anyhow::Result<()> {
        let limit = self.timeout_duration;
        let stream = &mut self.stream;
        let send_op = async {
            stream
                .write_all(data)
                .await
                .map_err(|e| map_io_error(e, "Write"))?;
            stream.flush().await.map_err(|e| map_io_error(e, "Write"))?;
            anyhow::Ok(())
        };
        Self::bounded(limit, send_op, "Send").await
    }

    async fn read_exact(&mut self, buf: &mut [u8]) -> anyhow::Result<()> {
        let limit = self.timeout_duration;
        let stream = &mut self.stream;
        let recv_op = async {
            stream
                .read_exact(buf)
                .await
                .map_err(|e| map_io_error(e, "Read"))?;
            anyhow::Ok(())
        };
        Self::bounded(limit, recv_op, "Receive").await
    }
}
