use std::borrow::Borrow;

use rule_rail::{Rule, Validated};

type Meta = (i32, String);

#[test]
fn compose_gives_both_rules_the_same_meta() {
    let left: Rule<bool, String, i32, Meta> =
        Rule::new(|flag, (n, _): &Meta| Validated::ok(if flag { -n } else { *n }));
    let right: Rule<i32, String, String, Meta> =
        Rule::new(|p, (_, s): &Meta| Validated::ok(format!("{p} {s}")));

    let composed = left.compose(right);
    assert_eq!(composed.apply(true, &(4, "dash".into())), Validated::ok("-4 dash".to_string()));
}

#[test]
fn rules_ignoring_meta_fit_any_composition() {
    let doubled: Rule<i32, String, i32, Meta> = Rule::from_fn(|n| Validated::ok(n * 2));
    let labelled: Rule<i32, String, String, Meta> =
        Rule::new(|n, (_, label): &Meta| Validated::ok(format!("{label}={n}")));

    let rule = doubled.compose(labelled);
    assert_eq!(rule.apply(21, &(0, "answer".into())), Validated::ok("answer=42".to_string()));
}

#[test]
fn lmap_meta_derives_inner_meta_from_outer_meta() {
    struct Context {
        limit: i32,
    }

    let at_most: Rule<i32, String, i32, i32> = Rule::new(|n, max: &i32| {
        if n <= *max {
            Validated::ok(n)
        } else {
            Validated::error(format!("{n} > {max}"))
        }
    });
    let rule: Rule<i32, String, i32, Context> = at_most.lmap_meta(|ctx: &Context| ctx.limit);

    assert_eq!(rule.apply(3, &Context { limit: 5 }), Validated::ok(3));
    assert_eq!(rule.apply(6, &Context { limit: 5 }), Validated::error("6 > 5".to_string()));
}

#[test]
fn lmap_meta_reconciles_nested_meta_shapes() {
    let with_suffix: Rule<String, (), String, String> =
        Rule::new(|s, suffix: &String| Validated::ok(format!("{s}{suffix}")));
    let outer: Rule<String, (), String, Meta> = Rule::identity();

    let rule = outer.compose(with_suffix.lmap_meta(|(_, s): &Meta| s.clone()));
    assert_eq!(rule.apply("file".into(), &(0, ".rs".into())), Validated::ok("file.rs".to_string()));
}

#[test]
fn upcast_meta_borrows_the_wider_meta() {
    struct Settings {
        name: String,
    }

    impl Borrow<String> for Settings {
        fn borrow(&self) -> &String {
            &self.name
        }
    }

    let greeting: Rule<(), (), String, String> = Rule::new(|_, name: &String| Validated::ok(format!("hi {name}")));
    let rule: Rule<(), (), String, Settings> = greeting.upcast_meta();

    let settings = Settings { name: "ada".into() };
    assert_eq!(rule.apply((), &settings), Validated::ok("hi ada".to_string()));
}

#[test]
fn upcast_meta_does_not_change_results() {
    let parity: Rule<i32, (), bool> = Rule::from_fn(|n| Validated::ok(n % 2 == 0));
    let widened: Rule<i32, (), bool, ()> = parity.clone().upcast_meta();

    for n in -3..3 {
        assert_eq!(widened.apply(n, &()), parity.validate(n));
    }
}
