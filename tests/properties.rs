//! Property tests for the occupancy grid and billing.

use std::collections::HashSet;

use proptest::prelude::*;
use rust_decimal::Decimal;

use parking_engine::billing::{Registry, billed_hours, compute_fee};
use parking_engine::error::EngineError;
use parking_engine::grid::Grid;
use parking_engine::models::{SlotRef, Timestamp};

#[derive(Debug, Clone)]
enum Op {
    Assign { plate: u8, floor: usize, index: usize },
    Release { floor: usize, index: usize },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..12, 0usize..4, 0usize..11)
            .prop_map(|(plate, floor, index)| Op::Assign { plate, floor, index }),
        (0usize..4, 0usize..11).prop_map(|(floor, index)| Op::Release { floor, index }),
    ]
}

fn timestamp_strategy() -> impl Strategy<Value = Timestamp> {
    (0u8..=24, 0u8..=60).prop_map(|(h, m)| Timestamp::new(h, m).unwrap())
}

proptest! {
    #[test]
    fn plates_stay_unique(ops in prop::collection::vec(op_strategy(), 0..80)) {
        let mut grid = Grid::default();
        let entry = Timestamp::new(9, 0).unwrap();

        for op in ops {
            match op {
                Op::Assign { plate, floor, index } => {
                    let _ = grid.assign(format!("P{}", plate), entry, floor, index);
                }
                Op::Release { floor, index } => {
                    let _ = grid.release(floor, index);
                }
            }

            let mut seen = HashSet::new();
            for (_, vehicle) in grid.occupied() {
                prop_assert!(seen.insert(vehicle.plate.clone()));
            }
        }
    }

    #[test]
    fn assign_then_locate_agrees(floor in 0usize..3, index in 0usize..10) {
        let mut grid = Grid::default();
        grid.assign("ABC", Timestamp::new(8, 0).unwrap(), floor, index).unwrap();

        prop_assert_eq!(grid.locate("ABC").unwrap(), SlotRef::new(floor, index));
    }

    #[test]
    fn assign_release_round_trip(
        ops in prop::collection::vec(op_strategy(), 0..40),
        floor in 0usize..3,
        index in 0usize..10,
    ) {
        let mut grid = Grid::default();
        let entry = Timestamp::new(9, 0).unwrap();
        for op in ops {
            if let Op::Assign { plate, floor, index } = op {
                let _ = grid.assign(format!("P{}", plate), entry, floor, index);
            }
        }
        let before = grid.clone();

        if grid.assign("visitor", entry, floor, index).is_ok() {
            grid.release(floor, index).unwrap();
            let released = matches!(grid.locate("visitor"), Err(EngineError::NotFound { .. }));
            prop_assert!(released);
        }
        prop_assert_eq!(grid, before);
    }

    #[test]
    fn billed_hours_cover_elapsed_time(minutes in 0u32..=1500) {
        let hours = billed_hours(minutes);

        prop_assert!(hours >= 1);
        prop_assert!(hours * 60 >= minutes);
        prop_assert!(minutes == 0 || (hours - 1) * 60 < minutes);
    }

    #[test]
    fn discounted_fee_is_half_of_base(entry in timestamp_strategy(), exit in timestamp_strategy()) {
        let registry = Registry::from_iter(["1111"]);
        let rate = Decimal::from(10000);

        match compute_fee(entry, exit, "1111", &registry, rate) {
            Ok(result) => {
                prop_assert!(exit.total_minutes() >= entry.total_minutes());
                prop_assert_eq!(result.fee * Decimal::from(2), result.base_fee);
                prop_assert!(result.discount_applied);
            }
            Err(err) => {
                prop_assert!(exit.total_minutes() < entry.total_minutes());
                let is_invalid_interval = matches!(err, EngineError::InvalidInterval { .. });
                prop_assert!(is_invalid_interval);
            }
        }
    }
}
