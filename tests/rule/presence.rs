use rule_rail::leaf::{positive, Reason, Violation};
use rule_rail::rule::{optional, required, Missing};
use rule_rail::{Rule, Validated};

fn not_positive(n: f64) -> Violation {
    Violation::from(Reason::NotPositive(n))
}

#[test]
fn required_unwraps_present_values() {
    let rule = required::<i32, ()>();
    assert_eq!(rule.validate(Some(4)), Validated::ok(4));
    assert_eq!(rule.validate(None), Validated::error(Missing));
}

#[test]
fn required_composed_with_positive_reports_missing_input() {
    let rule = required::<f64, ()>().compose(positive());

    assert_eq!(rule.validate(None), Validated::error(Violation::from(Reason::IsMissing)));
    assert_eq!(rule.validate(Some(-4.0)), Validated::error(not_positive(-4.0)));
    assert_eq!(rule.validate(Some(4.0)), Validated::ok(4.0));
}

#[test]
fn required_method_skips_the_rule_on_missing_input() {
    let rule = positive::<()>().required();

    assert_eq!(rule.validate(None), Validated::error(Violation::from(Missing)));
    assert_eq!(rule.validate(Some(2.0)), Validated::ok(2.0));
}

#[test]
fn optional_accepts_missing_input() {
    let rule = optional(positive::<()>());

    assert_eq!(rule.validate(None), Validated::ok(None));
    assert_eq!(rule.validate(Some(4.0)), Validated::ok(Some(4.0)));
    assert_eq!(rule.validate(Some(-4.0)), Validated::error(not_positive(-4.0)));
}

#[test]
fn optional_method_matches_the_function_form() {
    let method = positive::<()>().optional();
    let function = optional(positive::<()>());

    for input in [None, Some(1.0), Some(-1.0)] {
        assert_eq!(method.validate(input), function.validate(input));
    }
}

#[test]
fn missing_displays_a_readable_message() {
    assert_eq!(Missing.to_string(), "value is missing");

    let custom: Rule<Option<i32>, String, i32> = Rule::<i32, Missing, i32>::identity()
        .required()
        .map_err(|e| e.to_string());
    assert_eq!(custom.validate(None), Validated::error("value is missing".to_string()));
}
