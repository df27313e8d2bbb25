//! Core inventory operation benchmarks: the row-major free-fit scan and
//! the defragmentation pass, plus the add/remove round trip.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use stowage_bench::{fragmented_profile, mixed_profile};
use stowage_core::Position;
use stowage_test_utils::TestItem;

fn bench_free_fit_scan(c: &mut Criterion) {
    let inventory = fragmented_profile(64, 64);
    c.bench_function("find_free_position_2x2_fragmented_64x64", |b| {
        b.iter(|| {
            inventory
                .find_free_position(black_box(2), black_box(2))
                .unwrap()
        })
    });
}

fn bench_reorganize(c: &mut Criterion) {
    c.bench_function("reorganize_mixed_64x64", |b| {
        b.iter_batched(
            || mixed_profile(64, 64),
            |mut inventory| inventory.reorganize(),
            BatchSize::SmallInput,
        )
    });
}

fn bench_add_remove_round_trip(c: &mut Criterion) {
    let mut inventory = fragmented_profile(64, 64);
    let item = TestItem::new("crate", 1, 1);
    c.bench_function("add_remove_1x1_fragmented_64x64", |b| {
        b.iter(|| {
            inventory.add_at(&item, black_box(Position::new(1, 0)));
            inventory.remove(&item);
        })
    });
}

criterion_group!(
    benches,
    bench_free_fit_scan,
    bench_reorganize,
    bench_add_remove_round_trip
);
criterion_main!(benches);
