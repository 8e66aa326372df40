use crate::common::configure_criterion;
use crate::common::product_rule;
use criterion::{criterion_group, Criterion};
use serde_json::json;
use std::hint::black_box;

pub fn bench_violation_serialization(c: &mut Criterion) {
    let violation = product_rule()
        .validate(json!({ "name": "", "price": -1, "weights": [1, "heavy", -2] }))
        .into_error()
        .expect("broken product must fail");

    c.bench_function("serde/violation_to_json", |b| {
        b.iter(|| black_box(serde_json::to_string(&violation).unwrap()))
    });
}

criterion_group! {
    name = serde_benches;
    config = configure_criterion();
    targets = bench_violation_serialization,
}
