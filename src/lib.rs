#![cfg_attr(not(feature = "std"), no_std)]

mod ai;
mod common;
mod config;
mod coord;
mod field;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod node;
#[cfg(feature = "std")]
pub mod player;
pub mod protocol;
#[cfg(feature = "std")]
mod render;
mod session;
#[cfg(feature = "std")]
pub mod transport;

pub use ai::suggest_target;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use field::Field;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
#[cfg(feature = "std")]
pub use node::GameNode;
#[cfg(feature = "std")]
pub use player::{AiPlayer, CliPlayer, Player};
pub use protocol::{ProtocolError, MOVE_LEN, RESULT_LEN};
#[cfg(feature = "std")]
pub use render::render_field_pair;
pub use session::{Outcome, SessionError, SessionState, TurnSession};
#[cfg(feature = "std")]
pub use transport::{in_memory::InMemoryTransport, tcp::TcpTransport, Transport};
