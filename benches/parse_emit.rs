use cfg2::{from_str, to_string, to_string_with_options, Cfg, EmitOptions, QuoteStyle};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const SAMPLE: &str = include_str!("../tests/fixtures/sample.cfg");

fn generate(records: usize) -> String {
    let mut text = String::new();
    for i in 0..records {
        text.push_str(&format!("sys=host{i} 'site name'=\"rack {i}\"\n"));
        text.push_str(&format!("\tip=10.0.{}.{} ether=0080c7c72c{:02x}\n", i / 256, i % 256, i % 256));
        text.push_str("\tcomment='alice''s machine' # owner\n");
        text.push_str("\ttrust known\n\n");
    }
    text
}

fn benchmark_parse_sample(c: &mut Criterion) {
    c.bench_function("parse_sample", |b| b.iter(|| from_str(black_box(SAMPLE))));
}

fn benchmark_emit_sample(c: &mut Criterion) {
    let cfg = from_str(SAMPLE).unwrap();

    c.bench_function("emit_sample", |b| b.iter(|| to_string(black_box(&cfg))));
}

fn benchmark_parse_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_records");

    for size in [10, 100, 1000].iter() {
        let text = generate(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_emit_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit_records");

    for size in [10, 100, 1000].iter() {
        let cfg: Cfg = from_str(&generate(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &cfg, |b, cfg| {
            b.iter(|| {
                to_string_with_options(
                    black_box(cfg),
                    EmitOptions::new().with_quote(QuoteStyle::Single),
                )
            })
        });
    }
    group.finish();
}

fn benchmark_round_trip(c: &mut Criterion) {
    let text = generate(100);

    c.bench_function("round_trip_100", |b| {
        b.iter(|| {
            let cfg = from_str(black_box(&text)).unwrap();
            from_str(&to_string(&cfg)).unwrap()
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse_sample,
    benchmark_emit_sample,
    benchmark_parse_records,
    benchmark_emit_records,
    benchmark_round_trip
);
criterion_main!(benches);
