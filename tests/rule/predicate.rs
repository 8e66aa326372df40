use std::cell::Cell;
use std::rc::Rc;

use rule_rail::rule::Predicate;
use rule_rail::types::ErrorVec;
use rule_rail::{Rule, Validated};

fn even() -> Predicate<i32, String> {
    Predicate::ensure(|n: &i32| n % 2 == 0, |n| format!("{n} is not even"))
}

fn positive() -> Predicate<i32, String> {
    Predicate::ensure(|n: &i32| *n > 0, |n| format!("{n} is not positive"))
}

fn checked() -> Rule<i32, ErrorVec<String>, i32> {
    Rule::identity().test([even(), positive()])
}

#[test]
fn test_keeps_values_passing_every_predicate() {
    assert_eq!(checked().validate(2), Validated::ok(2));
}

#[test]
fn test_reports_a_single_failure() {
    let errors = checked().validate(3).into_error().unwrap();
    assert_eq!(errors.as_slice(), ["3 is not even".to_string()]);
}

#[test]
fn test_reports_every_failure_in_declaration_order() {
    let errors = checked().validate(-3).into_error().unwrap();
    assert_eq!(
        errors.as_slice(),
        ["-3 is not even".to_string(), "-3 is not positive".to_string()]
    );
}

#[test]
fn test_does_not_run_predicates_after_an_upstream_failure() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let counting = Predicate::<i32, String>::from_fn(move |_| {
        counter.set(counter.get() + 1);
        Validated::ok(())
    });

    let upstream: Rule<i32, ErrorVec<String>, i32> =
        Rule::from_fn(|n: i32| Validated::invalid(format!("{n} rejected upstream")));
    let rule = upstream.test([counting]);

    let errors = rule.validate(1).into_error().unwrap();
    assert_eq!(errors.as_slice(), ["1 rejected upstream".to_string()]);
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_runs_every_predicate_even_after_failures() {
    let calls = Rc::new(Cell::new(0));
    let predicates: Vec<Predicate<i32, String>> = (0..3)
        .map(|index| {
            let counter = Rc::clone(&calls);
            Predicate::from_fn(move |n: &i32| {
                counter.set(counter.get() + 1);
                Validated::error(format!("check {index} failed for {n}"))
            })
        })
        .collect();

    let rule: Rule<i32, ErrorVec<String>, i32> = Rule::identity().test(predicates);
    let errors = rule.validate(5).into_error().unwrap();

    assert_eq!(errors.len(), 3);
    assert_eq!(errors[2], "check 2 failed for 5");
    assert_eq!(calls.get(), 3);
}

#[test]
fn predicates_see_the_meta_data() {
    let at_most = Predicate::<i32, String, i32>::new(|n, max| {
        if n <= max {
            Validated::ok(())
        } else {
            Validated::error(format!("{n} exceeds {max}"))
        }
    });
    let rule: Rule<i32, ErrorVec<String>, i32, i32> = Rule::identity().test([at_most]);

    assert_eq!(rule.apply(3, &5), Validated::ok(3));
    assert_eq!(rule.apply(7, &5).into_error().unwrap().as_slice(), ["7 exceeds 5".to_string()]);
}

#[test]
fn a_rule_can_serve_as_a_predicate() {
    let short: Rule<String, String, usize> = Rule::from_fn(|s: String| {
        if s.len() <= 3 {
            Validated::ok(s.len())
        } else {
            Validated::error(format!("{s} is too long"))
        }
    });

    let rule: Rule<String, ErrorVec<String>, String> = Rule::identity().test([short.as_predicate()]);
    assert_eq!(rule.validate("abc".into()), Validated::ok("abc".to_string()));
    assert_eq!(
        rule.validate("abcd".into()).into_error().unwrap().as_slice(),
        ["abcd is too long".to_string()]
    );
}
