use broadside::{Board, CellState, FireOutcome, Location};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fire_twice_yields_nothing_second_time(
        seed in any::<u64>(),
        size in 1usize..12,
        row in 0usize..12,
        column in 0usize..12,
    ) {
        let (row, column) = (row % size, column % size);
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::random(size, 0.2, &mut rng).unwrap();
        let occupied = board.cell(row, column).unwrap().is_occupied();
        let loc = Location::new(0, row, column);

        let expected = if occupied { FireOutcome::Hit } else { FireOutcome::Miss };
        prop_assert_eq!(board.fire_at(loc).unwrap(), Some(expected));
        let after_first = board.clone();
        prop_assert_eq!(board.fire_at(loc).unwrap(), None);
        prop_assert_eq!(&board, &after_first);
    }

    #[test]
    fn fired_cells_never_revert(seed in any::<u64>(), shots in proptest::collection::vec((0usize..6, 0usize..6), 0..60)) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::random(6, 0.2, &mut rng).unwrap();
        let mut fired = std::collections::HashSet::new();
        for (row, column) in shots {
            let outcome = board.fire_at(Location::new(0, row, column)).unwrap();
            prop_assert_eq!(outcome.is_some(), fired.insert((row, column)));
            for &(r, c) in &fired {
                prop_assert!(matches!(board.cell(r, c).unwrap().state(), CellState::Fired(_)));
            }
            prop_assert_eq!(board.fired_count(), fired.len());
        }
    }
}
