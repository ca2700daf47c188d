use outcome_rail::{GuardError, Outcome};

fn ok(v: i32) -> Outcome<i32, String> {
    Outcome::ok(v)
}

fn err(e: &str) -> Outcome<i32, String> {
    Outcome::err(e.to_string())
}

#[test]
fn test_guard_passes_through_on_success() {
    assert_eq!(ok(3).guard(|v| *v > 0), ok(3));
}

#[test]
fn test_guard_fails_with_default_error() {
    let rz = ok(3).guard(|v| *v < 0);
    assert!(rz.is_err());
    let message = rz.error();
    assert!(message.contains("Ok(3)"));
    assert!(message.contains("failed to pass the guard"));
}

#[test]
fn test_guard_default_error_is_a_guard_error() {
    let rz: Outcome<i32, GuardError> = Outcome::ok(3).guard(|v| *v < 0);
    assert!(rz.error().message().contains("Ok(3)"));
}

#[test]
fn test_guard_is_noop_on_err() {
    assert_eq!(err("e").guard(|_| false), err("e"));
}

#[test]
fn test_guard_or_uses_the_error_verbatim() {
    let rz = ok(-1).guard_or(|v| *v > 0, "negative".to_string());
    assert_eq!(rz, err("negative"));
    assert_eq!(ok(1).guard_or(|v| *v > 0, "negative".to_string()), ok(1));
}

#[test]
fn test_guard_or_else_sees_the_value() {
    let rz = ok(-7).guard_or_else(|v| *v > 0, |v| format!("{} is negative", v));
    assert_eq!(rz, err("-7 is negative"));
}

#[test]
fn test_check_aliases() {
    assert_eq!(ok(3).check(|v| *v > 0), ok(3));
    assert_eq!(ok(-1).check_or(|v| *v > 0, "neg".to_string()), err("neg"));
    assert_eq!(
        ok(-1).check_or_else(|v| *v > 0, |v| format!("bad {}", v)),
        err("bad -1")
    );
}

#[test]
fn test_guard_some_keeps_present_values() {
    let rz = Outcome::<Option<i32>, String>::ok(Some(3)).guard_some();
    assert_eq!(rz, Outcome::ok(Some(3)));
}

#[test]
fn test_guard_some_rejects_absent_values_with_location() {
    let rz = Outcome::<Option<i32>, String>::ok(None).guard_some();
    assert!(rz.is_err());
    let message = rz.error();
    assert!(message.contains("some-value guard"));
    assert!(message.contains("guard.rs"), "message was: {}", message);
}

#[test]
fn test_guard_some_is_noop_on_err() {
    let rz = Outcome::<Option<i32>, String>::err("e".to_string()).guard_some();
    assert_eq!(rz, Outcome::err("e".to_string()));
}

#[test]
fn test_guard_some_or_uses_the_error_verbatim() {
    let rz = Outcome::<Option<i32>, String>::ok(None).guard_some_or("gone".to_string());
    assert_eq!(rz, Outcome::err("gone".to_string()));
}

#[test]
fn test_check_some_alias() {
    let rz = Outcome::<Option<i32>, String>::ok(None).check_some();
    assert!(rz.is_err());
}
