// Hunt/target shot selection over the opponent view.
// Uses no_std and avoids heap allocations.

use rand::Rng;

use crate::{
    common::CellState,
    config::FIELD_SIZE,
    coord::Coord,
    field::Field,
};

const CELLS: usize = FIELD_SIZE * FIELD_SIZE;

/// Fixed-capacity set of candidate cells.
struct Candidates {
    cells: [Option<Coord>; CELLS],
    len: usize,
}

impl Candidates {
    fn new() -> Self {
        Self {
            cells: [None; CELLS],
            len: 0,
        }
    }

    fn push(&mut self, c: Coord) {
        if self.len < CELLS && !self.cells[..self.len].contains(&Some(c)) {
            self.cells[self.len] = Some(c);
            self.len += 1;
        }
    }

    fn pick<R: Rng>(&self, rng: &mut R) -> Option<Coord> {
        if self.len == 0 {
            return None;
        }
        self.cells[rng.random_range(0..self.len)]
    }
}

/// Unknown cells orthogonally adjacent to a hit whose ship is not sunk yet.
///
/// Sunk ships are fenced in by `Empty` cells on the view, so every unknown
/// neighbour of a `Killed` cell belongs to an unfinished ship.
fn target_cells(view: &Field) -> Candidates {
    let mut out = Candidates::new();
    for c in Coord::all().filter(|&c| view.get(c) == CellState::Killed) {
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            if let Some(n) = c.offset(dx, dy) {
                if view.get(n) == CellState::Unknown {
                    out.push(n);
                }
            }
        }
    }
    out
}

fn hunt_cells(view: &Field) -> Candidates {
    let mut out = Candidates::new();
    for c in Coord::all().filter(|&c| view.get(c) == CellState::Unknown) {
        out.push(c);
    }
    out
}

/// Choose the next shot: finish a wounded ship if there is one, otherwise
/// fire at a random unknown cell. `None` once nothing is left to shoot at.
pub fn suggest_target<R: Rng>(view: &Field, rng: &mut R) -> Option<Coord> {
    target_cells(view)
        .pick(rng)
        .or_else(|| hunt_cells(view).pick(rng))
}
