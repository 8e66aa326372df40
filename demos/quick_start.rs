use rule_rail::leaf::{array, number, object, string, NumberRules, StringRules, Violation};
use rule_rail::rule::{field, Predicate};
use rule_rail::types::ErrorVec;
use rule_rail::{Rule, Validated};
use serde_json::json;

#[derive(Debug)]
#[allow(dead_code)]
struct Product {
    name: String,
    price: f64,
    tags: Vec<String>,
}

fn product() -> Rule<serde_json::Value, Violation, Product> {
    object()
        .fields((
            field("name", string().not_empty().required()),
            field("price", number().positive().required()),
            field("tags", array().of(string().not_empty()).required()),
        ))
        .map(|(name, price, tags)| Product { name, price, tags })
}

fn password() -> Rule<String, ErrorVec<String>, String> {
    let long_enough = Predicate::ensure(|s: &String| s.len() >= 8, |s| {
        format!("{} characters is too short", s.len())
    });
    let has_digit = Predicate::ensure(
        |s: &String| s.chars().any(|c| c.is_ascii_digit()),
        |_| "must contain a digit".to_string(),
    );
    Rule::identity().test([long_enough, has_digit])
}

fn main() {
    println!("Running Quick Start examples...");

    // 1. A valid product
    println!("\n1. Valid input:");
    let carrot = json!({ "name": "Carrot", "price": 0.5, "tags": ["vegetable"] });
    match product().validate(carrot) {
        Validated::Valid(product) => println!("Valid: {product:?}"),
        Validated::Invalid(errors) => println!("Invalid: {errors}"),
    }

    // 2. Every failure is reported, not just the first
    println!("\n2. Accumulated errors:");
    let broken = json!({ "name": "", "price": -3, "tags": ["ok", "", 7] });
    if let Some(errors) = product().validate(broken).into_error() {
        println!("{} failures: {errors}", errors.count());
    }

    // 3. Independent constraints on one value
    println!("\n3. Predicates:");
    for candidate in ["hunter2", "correct horse 9"] {
        match password().validate(candidate.to_string()).to_result() {
            Ok(_) => println!("{candidate:?} accepted"),
            Err(reasons) => println!("{candidate:?} rejected: {}", reasons.join(", ")),
        }
    }
}
