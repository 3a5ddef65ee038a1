//! Field coordinates and straight-line ship placements.

use core::fmt;

use crate::common::FieldError;
use crate::config::FIELD_SIZE;

/// A cell on the field. Always in bounds.
///
/// `x` is the column, written as a letter `A`..`H`; `y` is the row, written as
/// a digit `1`..`8`. `Coord::new(0, 0)` is `A1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// Coordinate of column `x`, row `y`, or `None` when outside the field.
    pub const fn new(x: usize, y: usize) -> Option<Self> {
        if x < FIELD_SIZE && y < FIELD_SIZE {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Column index.
    pub fn x(self) -> usize {
        self.x as usize
    }

    /// Row index.
    pub fn y(self) -> usize {
        self.y as usize
    }

    pub(crate) fn index(self) -> usize {
        self.y() * FIELD_SIZE + self.x()
    }

    pub(crate) fn from_index(index: usize) -> Option<Self> {
        Self::new(index % FIELD_SIZE, index / FIELD_SIZE)
    }

    /// Every cell of the field, row by row.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..FIELD_SIZE * FIELD_SIZE).filter_map(Coord::from_index)
    }

    /// Neighbouring cell shifted by (`dx`, `dy`), if still on the field.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Coord> {
        let x = self.x().checked_add_signed(dx)?;
        let y = self.y().checked_add_signed(dy)?;
        Coord::new(x, y)
    }

    /// This cell followed by every cell in direction (`dx`, `dy`) up to the edge.
    pub fn walk(self, dx: isize, dy: isize) -> impl Iterator<Item = Coord> {
        core::iter::successors(Some(self), move |c| c.offset(dx, dy))
    }

    /// This cell and its (up to eight) neighbours, diagonals included.
    pub fn neighborhood(self) -> impl Iterator<Item = Coord> {
        (-1..=1isize)
            .flat_map(move |dy| (-1..=1isize).map(move |dx| (dx, dy)))
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// Decode the two-byte ASCII form, e.g. `b"A1"`.
    pub fn from_bytes(bytes: [u8; 2]) -> Option<Coord> {
        let [col, row] = bytes;
        if !col.is_ascii_uppercase() || !row.is_ascii_digit() || row == b'0' {
            return None;
        }
        Coord::new((col - b'A') as usize, (row - b'1') as usize)
    }

    /// Encode as two ASCII bytes, e.g. `b"A1"`.
    pub fn to_bytes(self) -> [u8; 2] {
        [b'A' + self.x, b'1' + self.y]
    }

    /// Parse exactly two characters: a column letter then a row digit.
    pub fn parse(s: &str) -> Option<Coord> {
        let bytes: [u8; 2] = s.as_bytes().try_into().ok()?;
        Coord::from_bytes(bytes)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [col, row] = self.to_bytes();
        write!(f, "{}{}", col as char, row as char)
    }
}

/// Axis a ship extends along from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
        }
    }
}

/// A ship's position: origin cell (lowest x and y), axis and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    origin: Coord,
    axis: Axis,
    length: usize,
}

impl Placement {
    /// Ship of `length` cells starting at `origin` and extending along `axis`.
    pub fn new(origin: Coord, axis: Axis, length: usize) -> Result<Self, FieldError> {
        if length == 0 || length > FIELD_SIZE {
            return Err(FieldError::InvalidLength(length));
        }
        let (dx, dy) = axis.step();
        let last = (length - 1) as isize;
        origin
            .offset(dx * last, dy * last)
            .ok_or(FieldError::ShipOutOfBounds)?;
        Ok(Self {
            origin,
            axis,
            length,
        })
    }

    /// Placement drawn by the random generator: `direction` is one of
    /// `0` (+y), `1` (+x), `2` (-y), `3` (-x) counted from `anchor`.
    ///
    /// Runs pointing backwards are normalised so the origin is their lowest cell.
    pub(crate) fn from_direction(anchor: Coord, direction: u8, length: usize) -> Option<Self> {
        let axis = if direction % 2 == 0 {
            Axis::Vertical
        } else {
            Axis::Horizontal
        };
        let origin = if direction < 2 {
            anchor
        } else {
            let (dx, dy) = axis.step();
            let back = length.checked_sub(1)? as isize;
            anchor.offset(-dx * back, -dy * back)?
        };
        Placement::new(origin, axis, length).ok()
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Cells covered by the ship, from the origin outwards.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let (dx, dy) = self.axis.step();
        self.origin.walk(dx, dy).take(self.length)
    }
}
