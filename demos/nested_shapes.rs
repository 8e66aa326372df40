use rule_rail::leaf::{
    array, non_negative, number, object, positive, string, StringRules, Violation,
};
use rule_rail::memoize::Memoized;
use rule_rail::rule::field;
use rule_rail::{Rule, Validated};
use serde_json::{json, Value};

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct Line {
    sku: String,
    price: f64,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct Order {
    customer: String,
    discount: Option<f64>,
    lines: Vec<Line>,
}

/// Whether free (zero priced) lines are accepted, supplied at validation time.
type AllowFree = bool;

fn price() -> Rule<f64, Violation, f64, AllowFree> {
    let strict = positive::<()>();
    let lenient = non_negative::<()>();
    Rule::new(move |n: f64, allow_free: &AllowFree| {
        if *allow_free {
            lenient.validate(n)
        } else {
            strict.validate(n)
        }
    })
}

fn line() -> Rule<Value, Violation, Line, AllowFree> {
    object()
        .fields((
            field("sku", string().not_empty().required()),
            field("price", number().compose(price()).required()),
        ))
        .map(|(sku, price)| Line { sku, price })
}

fn order() -> Rule<Value, Violation, Order, AllowFree> {
    object()
        .fields((
            field("customer", string().not_empty().required()),
            field("discount", string().contains_float().optional()),
            field("lines", array().of(line()).required()),
        ))
        .map(|(customer, discount, lines)| Order {
            customer,
            discount,
            lines,
        })
}

fn report(label: &str, result: Validated<Violation, Order>) {
    match result {
        Validated::Valid(order) => println!("{label}: {} lines for {}", order.lines.len(), order.customer),
        Validated::Invalid(errors) => println!("{label}: {errors}"),
    }
}

fn main() {
    let rule = order();

    // 1. Nested errors mirror the input
    let input = json!({
        "customer": "ada",
        "discount": "5% off",
        "lines": [
            { "sku": "A-1", "price": 2.5 },
            { "sku": "", "price": -1 },
            { "sku": "B-7", "price": 0 },
        ],
    });
    let result = rule.apply(input.clone(), &false);
    report("strict", result.clone());

    if let Some(errors) = result.into_error() {
        let second = errors.field("lines").and_then(|lines| lines.at(1));
        println!("second line: {:?}", second.map(ToString::to_string));
    }

    // 2. The same input under a different meta value
    report("free lines allowed", rule.apply(input.clone(), &true));

    // 3. Memoizing an expensive validation
    let cached = Memoized::new(move |input: Value, allow_free: &AllowFree| rule.apply(input, allow_free));
    report("first call", cached.call(input.clone(), &true));
    println!("cached for same input: {}", cached.is_cached(&input, &true));
    println!("cached under other meta: {}", cached.is_cached(&input, &false));
}
