//! Criterion benchmarks for the Black-Scholes pricing kernel.
//!
//! Measures single-call latency for calls and puts across moneyness, and
//! the cost of request validation on its own.

use bsop_pricing::{price, OptionRequest, OptionType};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("black_scholes_price");

    for (label, strike) in [("itm", 80.0), ("atm", 100.0), ("otm", 120.0)] {
        let call = OptionRequest::new(0.05, 100.0, strike, 1.0, 0.2, OptionType::Call).unwrap();
        let put = OptionRequest::new(0.05, 100.0, strike, 1.0, 0.2, OptionType::Put).unwrap();

        group.bench_with_input(BenchmarkId::new("call", label), &call, |b, request| {
            b.iter(|| price(black_box(request)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("put", label), &put, |b, request| {
            b.iter(|| price(black_box(request)).unwrap());
        });
    }

    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    c.bench_function("request_validation", |b| {
        b.iter(|| {
            OptionRequest::new(
                black_box(0.05),
                black_box(100.0),
                black_box(100.0),
                black_box(1.0),
                black_box(0.2),
                OptionType::Call,
            )
            .unwrap()
        });
    });
}

criterion_group!(benches, bench_price, bench_validation);
criterion_main!(benches);
