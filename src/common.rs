//! Common types for the sea battle engine: cell states, shot results and field errors.

/// State of a single field cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum CellState {
    /// Not fired upon yet (opponent view only).
    Unknown,
    /// Known to hold no ship.
    Empty,
    /// Intact ship segment (own field only).
    Ship,
    /// Ship segment that has been hit.
    Killed,
}

impl CellState {
    /// Character used when drawing the cell on the console.
    pub fn symbol(self) -> char {
        match self {
            CellState::Unknown => '?',
            CellState::Empty => '.',
            CellState::Ship => 'o',
            CellState::Killed => 'x',
        }
    }
}

/// Outcome of a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotResult {
    /// Shot landed on water.
    Miss = 0,
    /// Shot hit a ship that still has intact segments.
    Hit = 1,
    /// Shot destroyed the last intact segment of a ship.
    Kill = 2,
}

impl ShotResult {
    /// `true` when the shooter keeps the turn.
    pub fn keeps_turn(self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Errors returned by Field operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Ship length is zero or larger than the field.
    InvalidLength(usize),
    /// Ship placement runs off the field.
    ShipOutOfBounds,
    /// Ship placement overlaps or touches another ship.
    ShipTouches,
    /// Random placement of a ship exhausted its attempts.
    UnableToPlaceShip { length: usize },
}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FieldError::InvalidLength(len) => write!(f, "Invalid ship length {}", len),
            FieldError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            FieldError::ShipTouches => {
                write!(f, "Ship placement overlaps or touches another ship")
            }
            FieldError::UnableToPlaceShip { length } => {
                write!(f, "Unable to place ship of length {}", length)
            }
        }
    }
}

impl core::error::Error for FieldError {}
