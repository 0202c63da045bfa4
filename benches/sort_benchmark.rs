//! Benchmarks for the filter-and-sort load step and toggle re-sorts.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fetchlist::{prepare_records, sort_records, RawRecord, SortSpec};
use std::hint::black_box;

/// A list shaped like the production endpoint: four groups, a third unnamed.
fn synthetic_records(count: usize) -> Vec<RawRecord> {
    (0..count)
        .map(|i| {
            let id = i as i64;
            let name = match i % 3 {
                0 => None,
                1 => Some(String::new()),
                _ => Some(format!("Item {}", (i * 7919) % count.max(1))),
            };
            RawRecord {
                id,
                group_id: (id * 31) % 4 + 1,
                name,
            }
        })
        .collect()
}

fn benchmark_prepare(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepare_records");
    for size in [1_000usize, 10_000, 100_000] {
        let records = synthetic_records(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| prepare_records(black_box(records), SortSpec::default()));
        });
    }
    group.finish();
}

fn benchmark_toggle_resort(c: &mut Criterion) {
    let (items, _) = prepare_records(&synthetic_records(100_000), SortSpec::default());
    let toggled = SortSpec::default().toggle_name();

    c.bench_function("resort_after_name_toggle_100k", |b| {
        b.iter(|| {
            let mut resorted = items.clone();
            sort_records(&mut resorted, black_box(toggled));
            resorted
        });
    });
}

criterion_group!(benches, benchmark_prepare, benchmark_toggle_resort);
criterion_main!(benches);
