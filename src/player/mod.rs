//! Player trait and implementations
//!
//! A player decides where to shoot and is told what happens. It never touches
//! the fields directly; the [`GameNode`](crate::GameNode) owns the session.
//! - AiPlayer: hunt/target shooter
//! - CliPlayer: interactive console player

use rand::rngs::SmallRng;

use crate::{
    common::ShotResult,
    coord::Coord,
    field::Field,
    session::Outcome,
};

/// Interface implemented by different player types.
pub trait Player: Send {
    /// Choose the next cell to fire at, given what is known about the opponent.
    fn select_target(&mut self, rng: &mut SmallRng, view: &Field) -> anyhow::Result<Coord>;

    /// Called before every exchange with the current fields.
    fn show_fields(&mut self, _own: &Field, _opponent: &Field) {}

    /// Called when the opponent is about to fire.
    fn await_opponent(&mut self) {}

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coord, _result: ShotResult) {}

    /// Inform the player of an opponent shot against its field.
    fn handle_opponent_shot(&mut self, _target: Coord, _result: ShotResult) {}

    /// Called once when the game reaches a verdict.
    fn handle_game_over(&mut self, _outcome: Outcome, _own: &Field, _opponent: &Field) {}
}

pub mod ai;
pub use ai::AiPlayer;

pub mod cli;
pub use cli::CliPlayer;
