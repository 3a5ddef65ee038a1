/// Side length of the square playing field.
pub const FIELD_SIZE: usize = 8;

/// Number of ships in the standard fleet.
pub const NUM_SHIPS: usize = 10;

/// Ship lengths in the order they are placed.
pub const FLEET: [usize; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of ship segments used in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 2 * 3 + 3 * 2 + 4;

/// Attempts spent on a single ship before the whole layout is thrown away.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

// The placement availability set is a `u64` with one bit per cell.
const _: () = assert!(FIELD_SIZE * FIELD_SIZE <= 64);
