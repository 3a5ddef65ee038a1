//! One player's field: ship layout, shot resolution and opponent-view deduction.
//!
//! The same type serves two roles. A player's own field knows where every ship
//! is and answers incoming shots with [`Field::shoot`]. The opponent view
//! starts fully [`CellState::Unknown`] and is filled in from reported results
//! with [`Field::mark_miss`], [`Field::mark_hit`] and [`Field::mark_kill`].

use rand::Rng;

use crate::common::{CellState, FieldError, ShotResult};
use crate::config::{FIELD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS, TOTAL_SHIP_CELLS};
use crate::coord::{Coord, Placement};

const CELLS: usize = FIELD_SIZE * FIELD_SIZE;

/// Unit steps along +x, -x, +y, -y.
const CARDINALS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// 8x8 grid of cell states plus the number of ship segments still afloat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    cells: [CellState; CELLS],
    remaining: usize,
}

impl Field {
    /// Field of open water with no ships on it.
    pub fn empty() -> Self {
        Self {
            cells: [CellState::Empty; CELLS],
            remaining: 0,
        }
    }

    /// Opponent view at game start: nothing known, a full fleet afloat.
    pub fn unknown() -> Self {
        Self {
            cells: [CellState::Unknown; CELLS],
            remaining: TOTAL_SHIP_CELLS,
        }
    }

    /// Build an own field from an explicit list of ships.
    pub fn with_ships(placements: &[Placement]) -> Result<Self, FieldError> {
        let mut field = Self::empty();
        for placement in placements {
            field.place(*placement)?;
        }
        Ok(field)
    }

    /// Random layout of the standard fleet.
    ///
    /// Layouts that dead-end are discarded and generation starts over, so this
    /// always returns a valid field.
    pub fn generate_random<R: Rng>(rng: &mut R) -> Self {
        let mut restarts = 0usize;
        loop {
            match Self::try_generate_random(rng) {
                Ok(field) => {
                    log::debug!("fleet placed after {} restart(s)", restarts);
                    return field;
                }
                Err(e) => {
                    log::trace!("placement restart: {}", e);
                    restarts += 1;
                }
            }
        }
    }

    /// A single placement attempt for the whole fleet.
    pub fn try_generate_random<R: Rng>(rng: &mut R) -> Result<Self, FieldError> {
        let mut field = Self::empty();
        let mut available: u64 = u64::MAX >> (64 - CELLS);

        for &length in FLEET.iter() {
            let mut attempts = 0;
            let placement = loop {
                if attempts >= MAX_PLACEMENT_ATTEMPTS || available == 0 {
                    return Err(FieldError::UnableToPlaceShip { length });
                }
                attempts += 1;
                let pick = rng.random_range(0..available.count_ones() as usize);
                let direction = rng.random_range(0..4u8);
                let Some(anchor) = nth_available(available, pick) else {
                    continue;
                };
                if let Some(placement) = Placement::from_direction(anchor, direction, length) {
                    if placement.cells().all(|c| available & bit(c) != 0) {
                        break placement;
                    }
                }
            };
            for cell in placement.cells() {
                field.put_ship(cell);
                for near in cell.neighborhood() {
                    available &= !bit(near);
                }
            }
        }
        Ok(field)
    }

    /// Add a ship, refusing placements that overlap or touch existing ships.
    pub fn place(&mut self, placement: Placement) -> Result<(), FieldError> {
        let touches = placement
            .cells()
            .flat_map(Coord::neighborhood)
            .any(|c| self.get(c) == CellState::Ship);
        if touches {
            return Err(FieldError::ShipTouches);
        }
        for cell in placement.cells() {
            self.put_ship(cell);
        }
        Ok(())
    }

    /// State of a single cell.
    pub fn get(&self, c: Coord) -> CellState {
        self.cells[c.index()]
    }

    /// Ship segments not yet destroyed.
    pub fn remaining_segments(&self) -> usize {
        self.remaining
    }

    /// `true` once every ship segment is gone.
    pub fn is_lost(&self) -> bool {
        self.remaining == 0
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Resolve an incoming shot against this (own) field.
    pub fn shoot(&mut self, c: Coord) -> ShotResult {
        if self.get(c) != CellState::Ship {
            return ShotResult::Miss;
        }
        self.set(c, CellState::Killed);
        self.remaining = self.remaining.saturating_sub(1);
        if self.is_fully_sunk(c) {
            ShotResult::Kill
        } else {
            ShotResult::Hit
        }
    }

    /// `true` when no intact segment continues the ship through `c` in any
    /// cardinal direction.
    pub fn is_fully_sunk(&self, c: Coord) -> bool {
        CARDINALS
            .iter()
            .all(|&(dx, dy)| self.is_sunk_towards(c, dx, dy))
    }

    fn is_sunk_towards(&self, c: Coord, dx: isize, dy: isize) -> bool {
        for cell in c.walk(dx, dy) {
            match self.get(cell) {
                CellState::Empty => return true,
                CellState::Killed => {}
                CellState::Ship | CellState::Unknown => return false,
            }
        }
        true
    }

    /// Record a reported miss on the opponent view.
    pub fn mark_miss(&mut self, c: Coord) {
        if self.get(c) == CellState::Unknown {
            self.set(c, CellState::Empty);
        }
    }

    /// Record a reported hit on the opponent view.
    pub fn mark_hit(&mut self, c: Coord) {
        if self.get(c) != CellState::Unknown {
            return;
        }
        self.remaining = self.remaining.saturating_sub(1);
        self.set(c, CellState::Killed);
    }

    /// Record a reported kill on the opponent view and clear the water around
    /// the sunk ship.
    pub fn mark_kill(&mut self, c: Coord) {
        if self.get(c) != CellState::Unknown {
            return;
        }
        self.mark_hit(c);
        for &(dx, dy) in CARDINALS.iter() {
            self.mark_border_towards(c, dx, dy);
        }
    }

    fn mark_border_towards(&mut self, c: Coord, dx: isize, dy: isize) {
        let mut next = Some(c);
        while let Some(cell) = next {
            if self.get(cell) != CellState::Killed {
                return;
            }
            for near in cell.neighborhood() {
                self.mark_miss(near);
            }
            next = cell.offset(dx, dy);
        }
    }

    /// Apply a result reported for one of our shots to the opponent view.
    pub fn apply_result(&mut self, c: Coord, result: ShotResult) {
        match result {
            ShotResult::Miss => self.mark_miss(c),
            ShotResult::Hit => self.mark_hit(c),
            ShotResult::Kill => self.mark_kill(c),
        }
    }

    fn put_ship(&mut self, c: Coord) {
        if self.get(c) != CellState::Ship {
            self.set(c, CellState::Ship);
            self.remaining += 1;
        }
    }

    fn set(&mut self, c: Coord, state: CellState) {
        self.cells[c.index()] = state;
    }
}

fn bit(c: Coord) -> u64 {
    1u64 << c.index()
}

fn nth_available(available: u64, n: usize) -> Option<Coord> {
    (0..CELLS)
        .filter(|&i| available & (1u64 << i) != 0)
        .nth(n)
        .and_then(Coord::from_index)
}
