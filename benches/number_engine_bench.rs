// benches/number_engine_bench.rs
#![deny(unsafe_code)]

use criterion::{Criterion, criterion_group, criterion_main};
use ruspeak_normalize::{Config, configure};
use std::hint::black_box;

fn bench_cardinals(c: &mut Criterion) {
    let pipeline = configure(Config::default()).unwrap();
    let mut group = c.benchmark_group("number_engine");

    let integers = "1 11 21 100 1001 123456 999999999";
    group.bench_function("integers", |b| {
        b.iter(|| black_box(pipeline.process(black_box(integers))));
    });

    let floats = "3.14 0.5 2.71828 99.99";
    group.bench_function("floats", |b| {
        b.iter(|| black_box(pipeline.process(black_box(floats))));
    });

    let percentages = "1% 11% 21% 50% 99% 100%";
    group.bench_function("percentages", |b| {
        b.iter(|| black_box(pipeline.process(black_box(percentages))));
    });

    let dates_and_times = "2024-01-15 31.12.2023 14:05 23:59";
    group.bench_function("dates_and_times", |b| {
        b.iter(|| black_box(pipeline.process(black_box(dates_and_times))));
    });

    group.finish();
}

criterion_group!(benches, bench_cardinals);
criterion_main!(benches);
