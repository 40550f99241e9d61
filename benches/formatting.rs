use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use logex::inspect::{MarkerColors, mapping, sequence, set};
use logex::inspect_record;
use std::collections::{BTreeMap, BTreeSet};
use std::hint::black_box;

struct Sample {
    id: u32,
    name: String,
}
inspect_record!(Sample { id, name });

fn bench_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("inspect::sequence");

    for len in [8usize, 128, 1024] {
        let values: Vec<u64> = (0..len as u64).collect();
        group.bench_with_input(BenchmarkId::new("scalars", len), &values, |b, v| {
            b.iter(|| sequence(black_box(v), true));
        });
    }

    let records: Vec<Sample> = (0..128)
        .map(|id| Sample {
            id,
            name: format!("sample-{id}"),
        })
        .collect();
    group.bench_function("records_128", |b| {
        b.iter(|| sequence(black_box(&records), true));
    });

    group.bench_function("inline_128", |b| {
        b.iter(|| sequence(black_box(&records), false));
    });

    group.finish();
}

fn bench_set(c: &mut Criterion) {
    let values: BTreeSet<i64> = (-64..64).collect();
    c.bench_function("inspect::set", |b| {
        b.iter(|| set(black_box(&values), true));
    });
}

fn bench_mapping(c: &mut Criterion) {
    let markers = MarkerColors::new("CC0600", "001EB0");
    let values: BTreeMap<String, f32> = (0..128)
        .map(|i| (format!("key{i}"), i as f32 * 0.5))
        .collect();

    c.bench_function("inspect::mapping", |b| {
        b.iter(|| mapping(black_box(&values), black_box(&markers), true));
    });
}

criterion_group!(benches, bench_sequence, bench_set, bench_mapping);
criterion_main!(benches);
