use crate::common::{configure_criterion, product_json, product_rule};
use criterion::{criterion_group, Criterion};
use rule_rail::memoize::{MemoizeConfig, Memoized};
use std::hint::black_box;

pub fn bench_memoized_rule(c: &mut Criterion) {
    let mut group = c.benchmark_group("memoize/rule");
    let input = product_json(3);

    let plain = product_rule();
    group.bench_function("uncached", |b| {
        b.iter(|| black_box(plain.validate(black_box(input.clone()))))
    });

    let cached = product_rule().memoize();
    group.bench_function("repeated_input", |b| {
        b.iter(|| black_box(cached.validate(black_box(input.clone()))))
    });

    let alternating = product_rule().memoize();
    let other = product_json(4);
    group.bench_function("alternating_input", |b| {
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let next = if flip { &input } else { &other };
            black_box(alternating.validate(next.clone()))
        })
    });

    group.finish();
}

pub fn bench_memoized_function(c: &mut Criterion) {
    let mut group = c.benchmark_group("memoize/function");

    let digits = Memoized::new(|n: u64, _: &()| n.to_string().len());
    group.bench_function("hit", |b| {
        b.iter(|| black_box(digits.call(black_box(1_000_000), &())))
    });

    let config = MemoizeConfig::<String, ()>::default()
        .with_input_eq(|a: &String, b: &String| a.eq_ignore_ascii_case(b));
    let length = Memoized::with_config(|s: String, _: &()| s.chars().count(), config);
    group.bench_function("custom_equality_hit", |b| {
        b.iter(|| black_box(length.call(black_box("Kilogram".to_string()), &())))
    });

    group.finish();
}

criterion_group! {
    name = memoize_benches;
    config = configure_criterion();
    targets = bench_memoized_rule, bench_memoized_function,
}
