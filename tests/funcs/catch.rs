use std::panic::panic_any;

use outcome_rail::{catch, catch_wrap, raises, Outcome};

#[derive(Debug, PartialEq)]
struct Timeout(u64);

#[derive(Debug, PartialEq)]
struct MissingKey(&'static str);

#[derive(Debug, PartialEq)]
enum LookupError {
    Timeout(u64),
    MissingKey(&'static str),
}

impl From<Timeout> for LookupError {
    fn from(fault: Timeout) -> Self {
        LookupError::Timeout(fault.0)
    }
}

impl From<MissingKey> for LookupError {
    fn from(fault: MissingKey) -> Self {
        LookupError::MissingKey(fault.0)
    }
}

#[test]
fn test_catch_normalizes_a_normal_return() {
    let rz: Outcome<i32, MissingKey> =
        catch(raises::<(MissingKey,)>(), || Ok::<_, MissingKey>(80));
    assert_eq!(rz, Outcome::ok(80));

    let rz: Outcome<i32, MissingKey> = catch(raises::<(MissingKey,)>(), || {
        Outcome::<i32, MissingKey>::err(MissingKey("math"))
    });
    assert_eq!(rz, Outcome::err(MissingKey("math")));
}

#[test]
fn test_catch_captures_a_declared_fault() {
    let rz = catch(raises::<(MissingKey,)>(), || -> Result<i32, MissingKey> {
        panic_any(MissingKey("physics"))
    });
    assert_eq!(rz, Outcome::err(MissingKey("physics")));
}

#[test]
#[should_panic]
fn test_catch_lets_an_undeclared_fault_keep_unwinding() {
    let _ = catch(raises::<(MissingKey,)>(), || -> Result<i32, MissingKey> {
        panic_any(Timeout(30))
    });
}

#[test]
fn test_catch_tries_the_kinds_in_tuple_order() {
    let rz = catch(
        raises::<(Timeout, MissingKey)>(),
        || -> Result<i32, LookupError> { panic_any(MissingKey("bio")) },
    );
    assert_eq!(rz, Outcome::err(LookupError::MissingKey("bio")));

    let rz = catch(
        raises::<(Timeout, MissingKey)>(),
        || -> Result<i32, LookupError> { panic_any(Timeout(30)) },
    );
    assert_eq!(rz, Outcome::err(LookupError::Timeout(30)));
}

#[test]
fn test_catch_captures_formatted_panic_messages_as_string() {
    let rz = catch(raises::<(String,)>(), || -> Result<i32, String> {
        panic!("lookup exploded: {}", 7)
    });
    assert_eq!(rz, Outcome::err("lookup exploded: 7".to_string()));
}

#[test]
fn test_catch_wrap_spreads_tuple_arguments() {
    #[derive(Debug, PartialEq)]
    struct Undefined;

    let mut div = catch_wrap(raises::<(Undefined,)>(), |num: i32, den: i32| {
        if den == 0 {
            panic_any(Undefined);
        }
        Ok::<_, Undefined>(num / den)
    });
    assert_eq!(div((6, 3)), Outcome::ok(2));
    assert_eq!(div((6, 0)), Outcome::err(Undefined));
    assert_eq!(div((9, 3)), Outcome::ok(3));
}

#[test]
fn test_catch_wrap_single_argument_target() {
    let mut score = catch_wrap(raises::<(MissingKey,)>(), |subject: &'static str| {
        match subject {
            "math" => Ok::<_, MissingKey>(80),
            _ => panic_any(MissingKey(subject)),
        }
    });
    assert_eq!(score(("math",)), Outcome::ok(80));
    assert_eq!(score(("bio",)), Outcome::err(MissingKey("bio")));
}
