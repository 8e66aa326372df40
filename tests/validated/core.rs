use rule_rail::types::ErrorVec;
use rule_rail::Validated;

#[test]
fn ok_and_error_constructors_set_the_variant() {
    let valid = Validated::<&str, i32>::ok(5);
    assert!(valid.is_valid());
    assert!(!valid.is_invalid());
    assert_eq!(valid.into_value(), Some(5));

    let invalid = Validated::<&str, i32>::error("missing");
    assert!(invalid.is_invalid());
    assert_eq!(invalid.into_error(), Some("missing"));
}

#[test]
fn map_applies_only_to_valid_values() {
    let length = |s: &str| s.len();

    assert_eq!(Validated::<&str, &str>::ok("Cool").map(length), Validated::ok(4));
    assert_eq!(Validated::<&str, &str>::error("Nah").map(length), Validated::error("Nah"));
}

#[test]
fn map_err_applies_only_to_errors() {
    let length = |s: &str| s.len();

    assert_eq!(Validated::<&str, &str>::ok("Cool").map_err(length), Validated::ok("Cool"));
    assert_eq!(Validated::<&str, &str>::error("Nah").map_err(length), Validated::error(3));
}

#[test]
fn and_then_chains_and_widens_the_error() {
    #[derive(Debug, PartialEq)]
    enum Failure {
        Flag(bool),
        Text(String),
    }

    impl From<bool> for Failure {
        fn from(flag: bool) -> Self {
            Failure::Flag(flag)
        }
    }

    let parse = |s: &str| -> Validated<Failure, i32> {
        s.parse::<i32>()
            .map_or_else(|_| Validated::error(Failure::Text(format!("{s} is not a number"))), Validated::ok)
    };

    let upstream_failed = Validated::<bool, &str>::error(false).and_then(parse);
    assert_eq!(upstream_failed, Validated::error(Failure::Flag(false)));

    let downstream_failed = Validated::<bool, &str>::ok("NaN").and_then(parse);
    assert_eq!(downstream_failed, Validated::error(Failure::Text("NaN is not a number".into())));

    assert_eq!(Validated::<bool, &str>::ok("44").and_then(parse), Validated::ok(44));
}

#[test]
fn filter_keeps_passing_values_and_errors() {
    let even = |n: &i32| n % 2 == 0;
    let not_even = |n: i32| format!("{n} is not even");

    assert_eq!(Validated::<String, i32>::ok(2).filter(even, not_even), Validated::ok(2));
    assert_eq!(
        Validated::<String, i32>::ok(3).filter(even, not_even),
        Validated::error("3 is not even".to_string())
    );
    assert_eq!(
        Validated::<String, i32>::error("upstream".into()).filter(even, not_even),
        Validated::error("upstream".to_string())
    );
}

fn is_even(n: &i32) -> Validated<String, ()> {
    if n % 2 == 0 {
        Validated::ok(())
    } else {
        Validated::error(format!("{n} is not even"))
    }
}

fn is_positive(n: &i32) -> Validated<String, ()> {
    if *n > 0 {
        Validated::ok(())
    } else {
        Validated::error(format!("{n} is not positive"))
    }
}

#[test]
fn test_reports_every_failed_predicate_in_order() {
    let checks = [is_even, is_positive];

    assert_eq!(Validated::<ErrorVec<String>, i32>::ok(2).test(checks), Validated::ok(2));

    let one = Validated::<ErrorVec<String>, i32>::ok(3).test(checks);
    assert_eq!(one.into_error().unwrap().as_slice(), ["3 is not even".to_string()]);

    let both = Validated::<ErrorVec<String>, i32>::ok(-3).test(checks);
    assert_eq!(
        both.into_error().unwrap().as_slice(),
        ["-3 is not even".to_string(), "-3 is not positive".to_string()]
    );
}

#[test]
fn test_passes_upstream_errors_through_untouched() {
    let upstream = Validated::<ErrorVec<String>, i32>::invalid("upstream".to_string());
    let tested = upstream.test([is_even, is_positive]);

    assert_eq!(tested.into_error().unwrap().as_slice(), ["upstream".to_string()]);
}

#[test]
fn recover_turns_errors_into_values() {
    let recovered = Validated::<i32, String>::error(3).recover(|n| format!("Now valid {n}"));
    assert_eq!(recovered.into_valid(), "Now valid 3");

    let untouched = Validated::<i32, String>::ok("fine".into()).recover(|n| n.to_string());
    assert_eq!(untouched.into_valid(), "fine");
}

#[test]
fn or_and_or_else_only_replace_failures() {
    assert_eq!(Validated::<bool, i32>::ok(1).or(Validated::<i32, i32>::error(4)), Validated::ok(1));
    assert_eq!(Validated::<bool, i32>::error(true).or(Validated::<i32, i32>::error(4)), Validated::error(4));

    let alternative = |flag: bool| -> Validated<String, i32> {
        if flag {
            Validated::ok(0)
        } else {
            Validated::error("still failing".into())
        }
    };
    assert_eq!(Validated::<bool, i32>::ok(7).or_else(alternative), Validated::ok(7));
    assert_eq!(Validated::<bool, i32>::error(true).or_else(alternative), Validated::ok(0));
    assert_eq!(
        Validated::<bool, i32>::error(false).or_else(alternative),
        Validated::error("still failing".to_string())
    );
}

#[test]
fn fold_selects_the_matching_branch() {
    let describe = |v: Validated<&str, i32>| v.fold(|n| format!("value {n}"), |e| format!("error {e}"));

    assert_eq!(describe(Validated::ok(1)), "value 1");
    assert_eq!(describe(Validated::error("bad")), "error bad");
}

#[test]
fn accessors_borrow_without_consuming() {
    let valid = Validated::<&str, i32>::ok(9);
    assert_eq!(valid.value(), Some(&9));
    assert_eq!(valid.error_ref(), None);
    assert_eq!(valid.as_ref(), Validated::ok(&9));

    let invalid = Validated::<&str, i32>::error("bad");
    assert_eq!(invalid.value(), None);
    assert_eq!(invalid.error_ref(), Some(&"bad"));
}

#[test]
fn result_conversions_round_trip_variants() {
    let from_ok: Validated<&str, i32> = Ok(1).into();
    let from_err: Validated<&str, i32> = Err("no").into();
    assert_eq!(from_ok, Validated::ok(1));
    assert_eq!(from_err, Validated::error("no"));

    let back: Result<i32, &str> = from_err.into();
    assert_eq!(back, Err("no"));
    assert_eq!(from_ok.to_result(), Ok(1));
}

#[test]
fn invalid_many_and_iter_errors_expose_all_errors() {
    let validation = Validated::<ErrorVec<&str>, i32>::invalid_many(["x", "y"]);
    let collected: Vec<_> = validation.iter_errors().copied().collect();
    assert_eq!(collected, ["x", "y"]);

    let valid = Validated::<ErrorVec<&str>, i32>::ok(1);
    assert_eq!(valid.iter_errors().count(), 0);
}

#[cfg(feature = "serde")]
#[test]
fn serializes_as_externally_tagged_enum() {
    let valid = Validated::<&str, i32>::ok(1);
    let json = serde_json::to_value(&valid).unwrap();
    assert_eq!(json, serde_json::json!({ "Valid": 1 }));

    let back: Validated<String, i32> = serde_json::from_value(serde_json::json!({ "Invalid": "bad" })).unwrap();
    assert_eq!(back, Validated::error("bad".to_string()));
}
