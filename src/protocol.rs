//! Wire encoding of moves and shot results.
//!
//! Messages are unframed and fixed-size: the receiver always knows which one
//! comes next from the turn state.
//!
//! | message | bytes | encoding                               |
//! |---------|-------|----------------------------------------|
//! | move    | 2     | column `'A'..='H'`, row `'1'..='8'`    |
//! | result  | 1     | `'0'` miss, `'1'` hit, `'2'` kill      |

use core::fmt;

use crate::common::ShotResult;
use crate::coord::Coord;

/// Size of an encoded move.
pub const MOVE_LEN: usize = 2;

/// Size of an encoded shot result.
pub const RESULT_LEN: usize = 1;

/// Peer sent bytes that do not decode to a valid message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    InvalidMove([u8; MOVE_LEN]),
    InvalidResult(u8),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::InvalidMove(bytes) => {
                write!(f, "Malformed move bytes {:?}", bytes)
            }
            ProtocolError::InvalidResult(byte) => {
                write!(f, "Malformed result byte {:#04x}", byte)
            }
        }
    }
}

impl core::error::Error for ProtocolError {}

pub fn encode_move(coord: Coord) -> [u8; MOVE_LEN] {
    coord.to_bytes()
}

pub fn decode_move(bytes: [u8; MOVE_LEN]) -> Result<Coord, ProtocolError> {
    Coord::from_bytes(bytes).ok_or(ProtocolError::InvalidMove(bytes))
}

pub fn encode_result(result: ShotResult) -> [u8; RESULT_LEN] {
    [b'0' + result as u8]
}

pub fn decode_result(bytes: [u8; RESULT_LEN]) -> Result<ShotResult, ProtocolError> {
    match bytes[0] {
        b'0' => Ok(ShotResult::Miss),
        b'1' => Ok(ShotResult::Hit),
        b'2' => Ok(ShotResult::Kill),
        other => Err(ProtocolError::InvalidResult(other)),
    }
}
