use broadside::{Board, FireOutcome, GameError, Location, DEFAULT_BOARD_SIZE, SHIP_PROBABILITY};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_single_occupied_cell() {
    let mut board = Board::from_fn(1, |_, _| true).unwrap();
    let loc = Location::new(0, 0, 0);
    assert_eq!(board.fire_at(loc).unwrap(), Some(FireOutcome::Hit));
    assert_eq!(board.fire_at(loc).unwrap(), None);
    assert_eq!(board.fired_count(), 1);
}

#[test]
fn test_all_empty_cells_miss_exactly_once() {
    let mut board = Board::empty(2).unwrap();
    for row in 0..2 {
        for column in 0..2 {
            assert_eq!(
                board.fire_at(Location::new(0, row, column)).unwrap(),
                Some(FireOutcome::Miss)
            );
        }
    }
    assert_eq!(board.fire_at(Location::new(0, 1, 0)).unwrap(), None);
    assert_eq!(board.fired_count(), 4);
}

#[test]
fn test_random_board_has_size_squared_cells() {
    let mut rng = SmallRng::seed_from_u64(42);
    for size in 1..=12 {
        let board = Board::random(size, SHIP_PROBABILITY, &mut rng).unwrap();
        assert_eq!(board.size(), size);
        assert_eq!(board.cells().count(), size * size);
        assert_eq!(board.fired_count(), 0);
    }
}

#[test]
fn test_cells_iterate_row_major() {
    let board = Board::from_fn(3, |r, c| r == 1 && c == 2).unwrap();
    let coords: Vec<_> = board.cells().map(|(pos, _)| pos).collect();
    assert_eq!(coords[0], (0, 0));
    assert_eq!(coords[5], (1, 2));
    assert_eq!(coords[8], (2, 2));
    let occupied: Vec<_> = board
        .cells()
        .filter(|(_, cell)| cell.is_occupied())
        .map(|(pos, _)| pos)
        .collect();
    assert_eq!(occupied, vec![(1, 2)]);
}

#[test]
fn test_occupancy_rate_near_probability() {
    let mut rng = SmallRng::seed_from_u64(7);
    let boards = 200;
    let mut occupied = 0;
    for _ in 0..boards {
        occupied += Board::random(DEFAULT_BOARD_SIZE, SHIP_PROBABILITY, &mut rng)
            .unwrap()
            .occupied_count();
    }
    let rate = occupied as f64 / (boards * DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE) as f64;
    assert!((rate - SHIP_PROBABILITY).abs() < 0.03, "rate was {}", rate);
}

#[test]
fn test_same_seed_same_board() {
    let mut rng1 = SmallRng::seed_from_u64(12345);
    let mut rng2 = SmallRng::seed_from_u64(12345);
    let b1 = Board::random(8, 0.2, &mut rng1).unwrap();
    let b2 = Board::random(8, 0.2, &mut rng2).unwrap();
    assert_eq!(b1, b2);
}

#[test]
fn test_probability_extremes() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(Board::random(5, 0.0, &mut rng).unwrap().occupied_count(), 0);
    assert_eq!(Board::random(5, 1.0, &mut rng).unwrap().occupied_count(), 25);
}

#[test]
fn test_invalid_construction() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(Board::empty(0).unwrap_err(), GameError::InvalidSize(0));
    assert_eq!(
        Board::random(4, 1.5, &mut rng).unwrap_err(),
        GameError::InvalidProbability(1.5)
    );
    assert!(matches!(
        Board::random(4, f64::NAN, &mut rng),
        Err(GameError::InvalidProbability(_))
    ));
}

#[test]
fn test_size_overflowing_cell_count_rejected() {
    let size = 1usize << (usize::BITS / 2);
    assert_eq!(Board::empty(size).unwrap_err(), GameError::InvalidSize(size));
    assert_eq!(
        Board::from_fn(usize::MAX, |_, _| true).unwrap_err(),
        GameError::InvalidSize(usize::MAX)
    );
}

#[test]
fn test_out_of_bounds_fire() {
    let mut board = Board::empty(3).unwrap();
    let loc = Location::new(0, 3, 0);
    assert_eq!(board.fire_at(loc).unwrap_err(), GameError::OutOfBounds(loc));
    let loc = Location::new(0, 0, 7);
    assert_eq!(board.fire_at(loc).unwrap_err(), GameError::OutOfBounds(loc));
    assert_eq!(board.fired_count(), 0);
    assert!(board.cell(3, 0).is_none());
}

#[test]
fn test_display_shows_only_fired_cells() {
    let mut board = Board::from_fn(2, |r, c| r == 0 && c == 0).unwrap();
    assert_eq!(board.to_string(), ". . \n. . ");
    board.fire_at(Location::new(0, 0, 0)).unwrap();
    board.fire_at(Location::new(0, 1, 1)).unwrap();
    assert_eq!(board.to_string(), "X . \n. o ");
}
