use std::cell::Cell;

use outcome_rail::{all, first_ok, Outcome, ValueVec};

fn ok(v: i32) -> Outcome<i32, String> {
    Outcome::ok(v)
}

fn err(e: &str) -> Outcome<i32, String> {
    Outcome::err(e.to_string())
}

#[test]
fn test_first_ok_macro_returns_the_first_success() {
    let rz = first_ok!(err("a"), ok(1), ok(2));
    assert_eq!(rz, Some(ok(1)));
}

#[test]
fn test_first_ok_macro_is_lazy_past_the_first_success() {
    let evaluated = Cell::new(false);
    let rz = first_ok!(err("a"), ok(1), {
        evaluated.set(true);
        ok(2)
    });
    assert_eq!(rz, Some(ok(1)));
    assert!(!evaluated.get());
}

#[test]
fn test_first_ok_macro_keeps_the_last_err() {
    let rz = first_ok!(err("a"), err("b"));
    assert_eq!(rz, Some(err("b")));
}

#[test]
fn test_first_ok_macro_with_no_arguments_is_none() {
    let rz: Option<Outcome<i32, String>> = first_ok!();
    assert_eq!(rz, None);
}

#[test]
fn test_all_macro_collects_every_value() {
    let rz = all!(ok(1), ok(2), ok(3));
    assert_eq!(rz.value().as_slice(), &[1, 2, 3]);
}

#[test]
fn test_all_macro_short_circuits_on_the_first_err() {
    let evaluated = Cell::new(false);
    let rz = all!(ok(1), err("x"), {
        evaluated.set(true);
        ok(3)
    });
    assert_eq!(rz, Outcome::err("x".to_string()));
    assert!(!evaluated.get());
}

#[test]
fn test_all_macro_with_no_arguments_is_ok_empty() {
    let rz: Outcome<ValueVec<i32>, String> = all!();
    assert_eq!(rz, Outcome::ok(ValueVec::new()));
}

#[test]
fn test_macro_and_function_forms_agree() {
    let lazy = first_ok!(err("a"), ok(1));
    let eager = first_ok([err("a"), ok(1)]);
    assert_eq!(lazy, eager);

    let lazy = all!(ok(1), ok(2));
    let eager = all([ok(1), ok(2)]);
    assert_eq!(lazy, eager);
}
