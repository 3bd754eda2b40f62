//! Performance benchmarks for the Parking Engine.
//!
//! Covers the hot paths of a busy facility:
//! - Recommending a slot on an empty and a nearly full grid
//! - Filling a grid through the session
//! - Computing a fee
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use parking_engine::billing::{Registry, compute_fee};
use parking_engine::config::FacilityConfig;
use parking_engine::grid::Grid;
use parking_engine::models::Timestamp;
use parking_engine::session::{ParkingSession, Placement};

/// Creates a grid with every slot but the last one occupied.
fn create_nearly_full_grid(depth: usize, width: usize) -> Grid {
    let mut grid = Grid::new(depth, width);
    let entry = Timestamp::new(8, 0).unwrap();
    for n in 0..(depth * width - 1) {
        let slot = grid.recommend().unwrap();
        grid.assign(format!("car_{}", n), entry, slot.floor, slot.index)
            .unwrap();
    }
    grid
}

/// Benchmark: recommendation on empty and nearly full grids.
fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    for (depth, width) in [(3, 10), (10, 50), (50, 200)] {
        let empty = Grid::new(depth, width);
        let nearly_full = create_nearly_full_grid(depth, width);
        let label = format!("{}x{}", depth, width);

        group.bench_with_input(BenchmarkId::new("empty", &label), &empty, |b, grid| {
            b.iter(|| black_box(grid.recommend()))
        });
        group.bench_with_input(
            BenchmarkId::new("nearly_full", &label),
            &nearly_full,
            |b, grid| b.iter(|| black_box(grid.recommend())),
        );
    }

    group.finish();
}

/// Benchmark: park a vehicle in every slot of the default facility.
fn bench_fill_session(c: &mut Criterion) {
    let entry = Timestamp::new(8, 0).unwrap();
    let plates: Vec<String> = (0..30).map(|n| format!("car_{}", n)).collect();

    c.bench_function("fill_default_session", |b| {
        b.iter(|| {
            let mut session = ParkingSession::new(FacilityConfig::default()).unwrap();
            for plate in &plates {
                black_box(session.park(plate, entry, Placement::Recommended).unwrap());
            }
            session
        })
    });
}

/// Benchmark: fee calculation with and without discount.
fn bench_compute_fee(c: &mut Criterion) {
    let registry = Registry::from_iter(["1111", "1421", "5151"]);
    let rate = Decimal::from(10000);
    let entry = Timestamp::new(9, 0).unwrap();
    let exit = Timestamp::new(17, 45).unwrap();

    let mut group = c.benchmark_group("compute_fee");
    for plate in ["1111", "2222"] {
        group.bench_with_input(BenchmarkId::from_parameter(plate), plate, |b, plate| {
            b.iter(|| black_box(compute_fee(entry, exit, plate, &registry, rate).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_recommend, bench_fill_session, bench_compute_fee);
criterion_main!(benches);
