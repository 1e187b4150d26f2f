// benches/pipeline_bench.rs
#![deny(unsafe_code)]

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use ruspeak_normalize::{Config, configure};
use std::hint::black_box;

const PLAIN_PROSE: &str = "Сегодня хорошая погода, команда закончила работу вовремя и все довольны результатом.";

const MIXED_TECH: &str = "Вызови getUserData() через API, ссылка http://example.com/a?b=1, версия >= 20.10.0, размер 100MB, прогресс 50%, дедлайн 2024-01-15 в 14:05";

const CODE_HEAVY: &str = "Запусти ```python\nprint('hello world')\ndef getUserData(userId):\n    return fetch(userId)\n``` и проверь результат";

fn mixed_stress() -> String {
    MIXED_TECH.repeat(200)
}

fn bench_pipeline(c: &mut Criterion) {
    let pipeline = configure(Config::default()).unwrap();
    let mut group = c.benchmark_group("pipeline");

    for (name, input) in [
        ("plain_prose", PLAIN_PROSE.to_string()),
        ("mixed_tech", MIXED_TECH.to_string()),
        ("code_heavy", CODE_HEAVY.to_string()),
        ("mixed_stress", mixed_stress()),
    ] {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| black_box(pipeline.process(black_box(&input))));
        });
    }
    group.finish();
}

fn bench_process_with_map(c: &mut Criterion) {
    let pipeline = configure(Config::default()).unwrap();
    c.bench_function("process_with_map/mixed_tech", |b| {
        b.iter(|| black_box(pipeline.process_with_map(black_box(MIXED_TECH))));
    });
}

criterion_group!(benches, bench_pipeline, bench_process_with_map);
criterion_main!(benches);
