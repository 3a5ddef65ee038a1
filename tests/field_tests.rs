use seabattle::{Axis, CellState, Coord, Field, FieldError, Placement, ShotResult};

fn c(x: usize, y: usize) -> Coord {
    Coord::new(x, y).unwrap()
}

fn ship(x: usize, y: usize, axis: Axis, length: usize) -> Placement {
    Placement::new(c(x, y), axis, length).unwrap()
}

#[test]
fn test_single_cell_ship_is_killed_by_one_shot() {
    let mut field = Field::with_ships(&[ship(0, 0, Axis::Horizontal, 1)]).unwrap();
    assert_eq!(field.remaining_segments(), 1);
    assert!(!field.is_lost());

    assert_eq!(field.shoot(c(0, 0)), ShotResult::Kill);
    assert_eq!(field.remaining_segments(), 0);
    assert!(field.is_lost());
}

#[test]
fn test_hit_hit_kill_out_of_order() {
    let mut field = Field::with_ships(&[ship(2, 3, Axis::Vertical, 3)]).unwrap();
    assert_eq!(field.shoot(c(2, 4)), ShotResult::Hit);
    assert_eq!(field.shoot(c(2, 3)), ShotResult::Hit);
    assert_eq!(field.shoot(c(2, 5)), ShotResult::Kill);
    assert!(field.is_lost());
}

#[test]
fn test_ship_on_edge_is_sunk_at_the_border() {
    let mut field = Field::with_ships(&[ship(4, 7, Axis::Horizontal, 4)]).unwrap();
    assert_eq!(field.shoot(c(7, 7)), ShotResult::Hit);
    assert_eq!(field.shoot(c(4, 7)), ShotResult::Hit);
    assert_eq!(field.shoot(c(6, 7)), ShotResult::Hit);
    assert_eq!(field.shoot(c(5, 7)), ShotResult::Kill);
}

#[test]
fn test_repeated_shots_do_not_count_twice() {
    let mut field = Field::with_ships(&[
        ship(0, 0, Axis::Horizontal, 2),
        ship(5, 5, Axis::Vertical, 1),
    ])
    .unwrap();
    assert_eq!(field.remaining_segments(), 3);

    assert_eq!(field.shoot(c(0, 0)), ShotResult::Hit);
    assert_eq!(field.remaining_segments(), 2);
    // already killed
    assert_eq!(field.shoot(c(0, 0)), ShotResult::Miss);
    assert_eq!(field.remaining_segments(), 2);
    // open water, twice
    assert_eq!(field.shoot(c(3, 3)), ShotResult::Miss);
    assert_eq!(field.shoot(c(3, 3)), ShotResult::Miss);
    assert_eq!(field.remaining_segments(), 2);
    assert_eq!(field.get(c(3, 3)), CellState::Empty);
}

#[test]
fn test_is_fully_sunk_only_after_last_segment() {
    let mut field = Field::with_ships(&[ship(1, 1, Axis::Horizontal, 2)]).unwrap();
    field.shoot(c(1, 1));
    assert!(!field.is_fully_sunk(c(1, 1)));
    field.shoot(c(2, 1));
    assert!(field.is_fully_sunk(c(1, 1)));
    assert!(field.is_fully_sunk(c(2, 1)));
}

#[test]
fn test_place_rejects_touching_and_out_of_bounds() {
    let mut field = Field::with_ships(&[ship(0, 0, Axis::Horizontal, 1)]).unwrap();
    assert_eq!(
        field.place(ship(1, 1, Axis::Vertical, 2)),
        Err(FieldError::ShipTouches)
    );
    assert_eq!(
        field.place(ship(0, 0, Axis::Vertical, 2)),
        Err(FieldError::ShipTouches)
    );
    assert!(field.place(ship(2, 0, Axis::Vertical, 2)).is_ok());
    assert_eq!(field.remaining_segments(), 3);

    assert_eq!(
        Placement::new(c(6, 0), Axis::Horizontal, 3),
        Err(FieldError::ShipOutOfBounds)
    );
    assert_eq!(
        Placement::new(c(0, 5), Axis::Vertical, 4),
        Err(FieldError::ShipOutOfBounds)
    );
    assert_eq!(
        Placement::new(c(0, 0), Axis::Vertical, 0),
        Err(FieldError::InvalidLength(0))
    );
}

#[test]
fn test_placement_cells() {
    let p = ship(3, 2, Axis::Vertical, 3);
    let cells: Vec<Coord> = p.cells().collect();
    assert_eq!(cells, vec![c(3, 2), c(3, 3), c(3, 4)]);
}

#[test]
fn test_opponent_view_starts_unknown() {
    let view = Field::unknown();
    assert_eq!(view.count(CellState::Unknown), 64);
    assert_eq!(view.remaining_segments(), seabattle::TOTAL_SHIP_CELLS);
    assert!(!view.is_lost());
}

#[test]
fn test_mark_miss_and_hit() {
    let mut view = Field::unknown();
    view.mark_miss(c(2, 2));
    assert_eq!(view.get(c(2, 2)), CellState::Empty);

    view.mark_hit(c(3, 3));
    assert_eq!(view.get(c(3, 3)), CellState::Killed);
    assert_eq!(view.remaining_segments(), 19);

    // replays change nothing
    view.mark_hit(c(3, 3));
    view.mark_miss(c(3, 3));
    view.mark_hit(c(2, 2));
    assert_eq!(view.get(c(3, 3)), CellState::Killed);
    assert_eq!(view.get(c(2, 2)), CellState::Empty);
    assert_eq!(view.remaining_segments(), 19);
}

#[test]
fn test_mark_kill_fences_sunk_ship() {
    let mut view = Field::unknown();
    view.mark_hit(c(3, 3));
    view.mark_kill(c(4, 3));

    assert_eq!(view.get(c(3, 3)), CellState::Killed);
    assert_eq!(view.get(c(4, 3)), CellState::Killed);
    assert_eq!(view.remaining_segments(), 18);

    for y in 2..=4 {
        for x in 2..=5 {
            if y == 3 && (x == 3 || x == 4) {
                continue;
            }
            assert_eq!(view.get(c(x, y)), CellState::Empty, "({}, {})", x, y);
        }
    }
    assert_eq!(view.count(CellState::Empty), 10);
    assert_eq!(view.count(CellState::Unknown), 52);
    assert_eq!(view.get(c(6, 3)), CellState::Unknown);
    assert_eq!(view.get(c(3, 5)), CellState::Unknown);
}

#[test]
fn test_mark_kill_in_corner() {
    let mut view = Field::unknown();
    view.mark_kill(c(0, 0));
    assert_eq!(view.get(c(0, 0)), CellState::Killed);
    assert_eq!(view.get(c(1, 0)), CellState::Empty);
    assert_eq!(view.get(c(0, 1)), CellState::Empty);
    assert_eq!(view.get(c(1, 1)), CellState::Empty);
    assert_eq!(view.count(CellState::Empty), 3);
}

#[test]
fn test_mark_kill_replay_is_noop() {
    let mut view = Field::unknown();
    view.mark_hit(c(5, 4));
    view.mark_hit(c(3, 3));
    view.mark_kill(c(4, 3));
    // a hit recorded next to the ship stays a hit
    assert_eq!(view.get(c(5, 4)), CellState::Killed);

    let snapshot = view.clone();
    view.mark_kill(c(4, 3));
    view.apply_result(c(4, 3), ShotResult::Kill);
    assert_eq!(view, snapshot);
}

#[test]
fn test_apply_result_dispatch() {
    let mut view = Field::unknown();
    view.apply_result(c(0, 7), ShotResult::Miss);
    view.apply_result(c(7, 0), ShotResult::Hit);
    view.apply_result(c(7, 7), ShotResult::Kill);
    assert_eq!(view.get(c(0, 7)), CellState::Empty);
    assert_eq!(view.get(c(7, 0)), CellState::Killed);
    assert_eq!(view.get(c(7, 7)), CellState::Killed);
    assert_eq!(view.get(c(6, 6)), CellState::Empty);
    assert_eq!(view.get(c(7, 1)), CellState::Unknown);
    assert_eq!(view.remaining_segments(), 18);
}
