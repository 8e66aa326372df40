use criterion::Criterion;
use rule_rail::leaf::{array, number, object, string, NumberRules, StringRules, Violation};
use rule_rail::rule::field;
use rule_rail::{Rule, Validated};
use serde_json::{json, Value};
use std::sync::OnceLock;
use std::time::Duration;

// ============================================================================
// Test Data & Domain Types
// ============================================================================

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub weights: Vec<f64>,
}

pub fn product_json(id: u64) -> Value {
    json!({
        "name": format!("product_{id}"),
        "price": 1.0 + id as f64,
        "weights": [0.5, 1.25, 2.0],
    })
}

/// Same shape as [`product_json`], but every fifth product carries broken
/// fields.
pub fn mixed_product_json(id: u64) -> Value {
    if id % 5 == 0 {
        json!({ "name": "", "price": -1, "weights": [1, "heavy", -2] })
    } else {
        product_json(id)
    }
}

pub fn realistic_products() -> &'static Vec<Value> {
    static INSTANCE: OnceLock<Vec<Value>> = OnceLock::new();
    INSTANCE.get_or_init(|| (0..1000).map(mixed_product_json).collect())
}

// ============================================================================
// Rules
// ============================================================================

pub fn product_rule() -> Rule<Value, Violation, Product> {
    object()
        .fields((
            field("name", string().not_empty().required()),
            field("price", number().positive().required()),
            field("weights", array().of(number().non_negative()).required()),
        ))
        .map(|(name, price, weights)| Product {
            name,
            price,
            weights,
        })
}

pub fn is_even(n: i64) -> Validated<&'static str, i64> {
    if n % 2 == 0 {
        Validated::ok(n)
    } else {
        Validated::error("NOT_EVEN")
    }
}

// ============================================================================
// Criterion Configuration
// ============================================================================

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
