//! Byte-exact connection primitives and the move/result exchange built on them.

use crate::common::ShotResult;
use crate::coord::Coord;
use crate::protocol::{self, MOVE_LEN, RESULT_LEN};

#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Write all of `data` or fail.
    async fn write_all(&mut self, data: &[u8]) -> anyhow::Result<()>;

    /// Fill `buf` completely or fail.
    async fn read_exact(&mut self, buf: &mut [u8]) -> anyhow::Result<()>;

    async fn send_move(&mut self, target: Coord) -> anyhow::Result<()> {
        self.write_all(&protocol::encode_move(target)).await
    }

    async fn recv_move(&mut self) -> anyhow::Result<Coord> {
        let mut buf = [0u8; MOVE_LEN];
        self.read_exact(&mut buf).await?;
        Ok(protocol::decode_move(buf)?)
    }

    async fn send_result(&mut self, result: ShotResult) -> anyhow::Result<()> {
        self.write_all(&protocol::encode_result(result)).await
    }

    async fn recv_result(&mut self) -> anyhow::Result<ShotResult> {
        let mut buf = [0u8; RESULT_LEN];
        self.read_exact(&mut buf).await?;
        Ok(protocol::decode_result(buf)?)
    }
}

pub mod tcp;
pub mod in_memory;
