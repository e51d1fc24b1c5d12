//! Criterion benchmarks for the closed-form engines.
//!
//! Measures single-evaluation cost of pricing and Greeks at the reference
//! point; both are branch-free transcendental evaluations and should stay
//! in the tens of nanoseconds.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vanilla_core::market_data::MarketSnapshot;
use vanilla_models::analytical::{black_scholes_greeks, black_scholes_price};
use vanilla_models::instruments::VanillaOption;

fn bench_price(c: &mut Criterion) {
    let market = MarketSnapshot::new(100.0_f64, 0.05, 0.2);
    let call = VanillaOption::european_call(100.0, 1.0);
    let put = VanillaOption::european_put(100.0, 1.0);

    let mut group = c.benchmark_group("black_scholes_price");
    group.bench_function("call", |b| {
        b.iter(|| black_scholes_price(black_box(&market), black_box(&call)).unwrap());
    });
    group.bench_function("put", |b| {
        b.iter(|| black_scholes_price(black_box(&market), black_box(&put)).unwrap());
    });
    group.finish();
}

fn bench_greeks(c: &mut Criterion) {
    let market = MarketSnapshot::new(100.0_f64, 0.05, 0.2);
    let call = VanillaOption::european_call(100.0, 1.0);
    let put = VanillaOption::european_put(100.0, 1.0);

    let mut group = c.benchmark_group("black_scholes_greeks");
    group.bench_function("call", |b| {
        b.iter(|| black_scholes_greeks(black_box(&market), black_box(&call)).unwrap());
    });
    group.bench_function("put", |b| {
        b.iter(|| black_scholes_greeks(black_box(&market), black_box(&put)).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_price, bench_greeks);
criterion_main!(benches);
