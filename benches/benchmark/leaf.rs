use crate::common::{configure_criterion, product_json, product_rule, realistic_products};
use criterion::{criterion_group, Criterion};
use rule_rail::leaf::{contains_float, number, object, string, NumberRules, Violation};
use rule_rail::record;
use serde_json::{json, Value};
use std::hint::black_box;

pub fn bench_product_fields(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaf/product");
    let rule = product_rule();

    let valid = product_json(7);
    group.bench_function("valid", |b| {
        b.iter(|| black_box(rule.validate(black_box(valid.clone()))))
    });

    let broken = json!({ "name": "", "price": -1, "weights": [1, "heavy", -2] });
    group.bench_function("all_fields_broken", |b| {
        b.iter(|| black_box(rule.validate(black_box(broken.clone()))))
    });

    group.bench_function("realistic_batch", |b| {
        let products = realistic_products();
        b.iter(|| {
            let failures = products
                .iter()
                .filter(|product| rule.validate((*product).clone()).is_invalid())
                .count();
            black_box(failures)
        })
    });

    group.finish();
}

pub fn bench_record_shape(c: &mut Criterion) {
    let rule = object::<()>().shape(record! {
        "name" => string().map(Value::from).required(),
        "price" => number().positive().map(Value::from).required(),
        "stock" => number().non_negative().map(Value::from).optional().map(|v| v.unwrap_or(Value::Null)),
    });
    let input = json!({ "name": "Carrot", "price": 0.5, "stock": 12, "extra": true });

    c.bench_function("leaf/shape_record", |b| {
        b.iter(|| black_box(rule.validate(black_box(input.clone()))))
    });
}

pub fn bench_contains_float(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaf/contains_float");
    let rule = contains_float::<()>();

    group.bench_function("short_number", |b| {
        b.iter(|| black_box(rule.validate(black_box("12.5".to_string()))))
    });

    group.bench_function("number_with_suffix", |b| {
        b.iter(|| black_box(rule.validate(black_box("  12.5e3 kilograms net".to_string()))))
    });

    group.bench_function("no_number", |b| {
        b.iter(|| {
            let result: rule_rail::Validated<Violation, f64> =
                rule.validate(black_box("kilograms".to_string()));
            black_box(result)
        })
    });

    group.finish();
}

criterion_group! {
    name = leaf_benches;
    config = configure_criterion();
    targets = bench_product_fields, bench_record_shape, bench_contains_float,
}
