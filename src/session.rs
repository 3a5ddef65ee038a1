//! Turn session: the alternating-turn state machine over an own field and
//! the tracked view of the opponent's field.
//!
//! The session does no I/O. A driver (the network [`GameNode`], a test, or a
//! local simulation) feeds it our shots' results and the opponent's moves and
//! reads back the next state.
//!
//! [`GameNode`]: crate::GameNode

use core::fmt;

use crate::common::ShotResult;
use crate::coord::Coord;
use crate::field::Field;

/// Final verdict from this player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Outcome {
    Won,
    Lost,
}

/// Whose move it is, or how the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    MyTurn,
    OpponentTurn,
    GameOver(Outcome),
}

/// Session operation invoked in a state that does not allow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    NotMyTurn,
    NotOpponentTurn,
    GameOver(Outcome),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotMyTurn => write!(f, "It is not our turn to shoot"),
            SessionError::NotOpponentTurn => write!(f, "It is not the opponent's turn to shoot"),
            SessionError::GameOver(outcome) => write!(f, "Game is already over ({:?})", outcome),
        }
    }
}

impl core::error::Error for SessionError {}

/// Both fields of one player plus the turn state.
#[derive(Debug, Clone)]
pub struct TurnSession {
    own: Field,
    opponent: Field,
    state: SessionState,
}

impl TurnSession {
    /// Start a session on `own` with an untouched opponent view.
    /// `my_initiative` decides who fires first.
    pub fn new(own: Field, my_initiative: bool) -> Self {
        Self::with_views(own, Field::unknown(), my_initiative)
    }

    /// Start from an arbitrary pair of fields.
    pub fn with_views(own: Field, opponent: Field, my_initiative: bool) -> Self {
        let mut session = Self {
            own,
            opponent,
            state: if my_initiative {
                SessionState::MyTurn
            } else {
                SessionState::OpponentTurn
            },
        };
        session.check_game_over();
        session
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn own_field(&self) -> &Field {
        &self.own
    }

    pub fn opponent_view(&self) -> &Field {
        &self.opponent
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, SessionState::GameOver(_))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            SessionState::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Record the result the opponent reported for our shot at `target`.
    ///
    /// A hit or kill keeps the turn; a miss hands it over.
    pub fn record_my_shot(
        &mut self,
        target: Coord,
        result: ShotResult,
    ) -> Result<SessionState, SessionError> {
        match self.state {
            SessionState::MyTurn => {}
            SessionState::OpponentTurn => return Err(SessionError::NotMyTurn),
            SessionState::GameOver(outcome) => return Err(SessionError::GameOver(outcome)),
        }
        self.opponent.apply_result(target, result);
        if !result.keeps_turn() {
            self.state = SessionState::OpponentTurn;
        }
        self.check_game_over();
        Ok(self.state)
    }

    /// Resolve the opponent's shot at `target` against our field.
    ///
    /// Returns the result to report back; a hit or kill lets the opponent fire again.
    pub fn receive_shot(&mut self, target: Coord) -> Result<ShotResult, SessionError> {
        match self.state {
            SessionState::OpponentTurn => {}
            SessionState::MyTurn => return Err(SessionError::NotOpponentTurn),
            SessionState::GameOver(outcome) => return Err(SessionError::GameOver(outcome)),
        }
        let result = self.own.shoot(target);
        if !result.keeps_turn() {
            self.state = SessionState::MyTurn;
        }
        self.check_game_over();
        Ok(result)
    }

    fn check_game_over(&mut self) {
        if self.own.is_lost() {
            self.state = SessionState::GameOver(Outcome::Lost);
        } else if self.opponent.is_lost() {
            self.state = SessionState::GameOver(Outcome::Won);
        }
    }
}
