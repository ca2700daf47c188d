use std::cell::Cell;
use std::rc::Rc;

use outcome_rail::{ensure, Outcome};

fn ok(v: i32) -> Outcome<i32, String> {
    Outcome::ok(v)
}

fn err(e: &str) -> Outcome<i32, String> {
    Outcome::err(e.to_string())
}

#[test]
fn test_then_applies_on_ok() {
    assert_eq!(ok(3).then(|v| Ok::<_, String>(v * 2)), ok(6));
}

#[test]
fn test_then_matches_ensure_of_the_callback() {
    let f = |v: i32| Ok::<_, String>(v + 1);
    assert_eq!(ok(3).then(f), ensure(f(3)));
}

#[test]
fn test_then_passes_err_through_without_calling() {
    let touched = Cell::new(false);
    let rz = err("e").then(|v| {
        touched.set(true);
        Ok::<_, String>(v)
    });
    assert_eq!(rz, err("e"));
    assert!(!touched.get());
}

#[test]
fn test_then_callback_may_return_an_outcome() {
    let rz = ok(3).then(|v| Outcome::<i32, String>::err(format!("no {}", v)));
    assert_eq!(rz, err("no 3"));
}

#[test]
#[should_panic]
fn test_then_lets_undeclared_faults_escape() {
    let _ = ok(0).then(|v| Ok::<_, String>(100 / v));
}

#[test]
fn test_then_unpack_spreads_tuple_values() {
    let pair = Outcome::<(i32, i32), String>::ok((3, 4));
    assert_eq!(pair.then_unpack(|a: i32, b: i32| Ok::<_, String>(a * b)), ok(12));
}

#[test]
fn test_then_unpack_passes_err_through() {
    let failed = Outcome::<(i32, i32), String>::err("e".to_string());
    assert_eq!(
        failed.then_unpack(|a: i32, b: i32| Ok::<_, String>(a + b)),
        err("e")
    );
}

#[test]
fn test_err_then_recovers() {
    let rz = err("gone").err_then(|_| Ok::<_, String>(0));
    assert_eq!(rz, ok(0));
}

#[test]
fn test_err_then_may_stay_on_the_failure_track() {
    let rz = err("gone").err_then(|e| Err::<i32, _>(format!("still {}", e)));
    assert_eq!(rz, err("still gone"));
}

#[test]
fn test_err_then_is_noop_on_ok() {
    let touched = Cell::new(false);
    let rz = ok(1).err_then(|e| {
        touched.set(true);
        Err::<i32, _>(e)
    });
    assert_eq!(rz, ok(1));
    assert!(!touched.get());
}

#[test]
fn test_err_then_unpack_spreads_tuple_errors() {
    let failed = Outcome::<i32, (u16, String)>::err((404, "missing".to_string()));
    let rz = failed.err_then_unpack(|code: u16, _msg: String| Ok::<_, (u16, String)>(i32::from(code)));
    assert_eq!(rz, Outcome::ok(404));
}

#[test]
fn test_map_and_map_err() {
    assert_eq!(ok(21).map(|v| v * 2), ok(42));
    assert_eq!(err("e").map(|v| v * 2), err("e"));
    assert_eq!(ok(1).map_err(|e| format!("[{}]", e)), ok(1));
    assert_eq!(err("e").map_err(|e| format!("[{}]", e)), err("[e]"));
}

#[test]
fn test_fill_replaces_matching_errors() {
    assert_eq!(err("missing").fill(|e| e == "missing", 0), ok(0));
    assert_eq!(err("corrupt").fill(|e| e == "missing", 0), err("corrupt"));
    assert_eq!(ok(3).fill(|_| true, 0), ok(3));
}

#[test]
fn test_then_all_collects_every_result() {
    let rz = ok(2).then_all([
        (|v: &i32| Ok::<_, String>(v + 1)) as fn(&i32) -> Result<i32, String>,
        |v: &i32| Ok(v * 10),
    ]);
    assert_eq!(rz.value().as_slice(), &[3, 20]);
}

#[test]
fn test_then_all_short_circuits_on_first_err() {
    let calls = Rc::new(Cell::new(0));
    let count = |c: &Rc<Cell<i32>>| {
        let c = Rc::clone(c);
        move |_: &i32| {
            c.set(c.get() + 1);
        }
    };

    let (c1, c2, c3) = (count(&calls), count(&calls), count(&calls));
    let funcs: Vec<Box<dyn FnMut(&i32) -> Outcome<i32, String>>> = vec![
        Box::new(move |v| {
            c1(v);
            Outcome::ok(*v)
        }),
        Box::new(move |v| {
            c2(v);
            Outcome::err("stop".to_string())
        }),
        Box::new(move |v| {
            c3(v);
            Outcome::ok(*v)
        }),
    ];

    let rz = ok(7).then_all(funcs);
    assert_eq!(rz, Outcome::err("stop".to_string()));
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_then_all_is_noop_on_err() {
    let rz = err("e").then_all([(|v: &i32| Ok::<_, String>(*v)) as fn(&i32) -> Result<i32, String>]);
    assert_eq!(rz, Outcome::err("e".to_string()));
}

#[test]
fn test_then_first_ok_returns_first_success() {
    let rz = ok(7).then_first_ok([
        (|_: &i32| Err::<i32, _>("l1 miss".to_string())) as fn(&i32) -> Result<i32, String>,
        |v: &i32| Ok(v * 10),
        |v: &i32| Ok(v * 100),
    ]);
    assert_eq!(rz, ok(70));
}

#[test]
fn test_then_first_ok_stops_calling_after_a_hit() {
    let calls = Rc::new(Cell::new(0));
    let mk = |c: &Rc<Cell<i32>>, rz: Outcome<i32, String>| {
        let c = Rc::clone(c);
        move |_: &i32| {
            c.set(c.get() + 1);
            rz.clone()
        }
    };

    let funcs: Vec<Box<dyn FnMut(&i32) -> Outcome<i32, String>>> = vec![
        Box::new(mk(&calls, Outcome::ok(1))),
        Box::new(mk(&calls, Outcome::ok(2))),
    ];

    let rz = ok(0).then_first_ok(funcs);
    assert_eq!(rz, ok(1));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_then_first_ok_keeps_last_err_when_nothing_hits() {
    let rz = ok(7).then_first_ok([
        (|_: &i32| Err::<i32, _>("a".to_string())) as fn(&i32) -> Result<i32, String>,
        |_: &i32| Err("b".to_string()),
    ]);
    assert_eq!(rz, err("b"));
}

#[test]
fn test_then_first_ok_on_empty_funcs_is_the_empty_failure() {
    let funcs: Vec<fn(&i32) -> Result<i32, String>> = Vec::new();
    let rz = ok(7).then_first_ok(funcs);
    assert_eq!(rz, err("empty sequence"));
}

#[cfg(feature = "std")]
mod catching {
    use super::{err, ok};
    use outcome_rail::{raises, Outcome};
    use std::panic::panic_any;

    #[derive(Debug, PartialEq)]
    struct Overflow;

    impl From<Overflow> for String {
        fn from(_: Overflow) -> Self {
            "overflow".to_string()
        }
    }

    #[test]
    fn test_then_catch_converts_declared_faults() {
        let rz = ok(i32::MAX).then_catch(raises::<(Overflow,)>(), |v| match v.checked_add(1) {
            Some(next) => Ok::<_, String>(next),
            None => panic_any(Overflow),
        });
        assert_eq!(rz, err("overflow"));
    }

    #[test]
    fn test_then_catch_normal_path() {
        let rz = ok(1).then_catch(raises::<(Overflow,)>(), |v| Ok::<_, String>(v + 1));
        assert_eq!(rz, ok(2));
    }

    #[test]
    #[should_panic]
    fn test_then_catch_lets_undeclared_faults_escape() {
        #[derive(Debug)]
        struct Unrelated;

        let _ = ok(1).then_catch(raises::<(Overflow,)>(), |_| -> Result<i32, String> {
            panic_any(Unrelated)
        });
    }

    #[test]
    fn test_then_unpack_catch() {
        let pair = Outcome::<(i32, i32), String>::ok((1, i32::MAX));
        let rz = pair.then_unpack_catch(raises::<(Overflow,)>(), |a: i32, b: i32| match b
            .checked_add(a)
        {
            Some(sum) => Ok::<_, String>(sum),
            None => panic_any(Overflow),
        });
        assert_eq!(rz, Outcome::err("overflow".to_string()));
    }

    #[test]
    fn test_err_then_catch_faulty_recovery_becomes_err() {
        let rz = err("gone").err_then_catch(raises::<(Overflow,)>(), |_| -> Result<i32, String> {
            panic_any(Overflow)
        });
        assert_eq!(rz, err("overflow"));
    }

    #[test]
    fn test_err_then_unpack_catch_spreads_and_captures() {
        #[derive(Debug, PartialEq)]
        struct Unrecoverable;

        impl From<Unrecoverable> for (u16, String) {
            fn from(_: Unrecoverable) -> Self {
                (500, "unrecoverable".to_string())
            }
        }

        let failed = Outcome::<i32, (u16, String)>::err((404, "missing".to_string()));
        let rz = failed.err_then_unpack_catch(
            raises::<(Unrecoverable,)>(),
            |code: u16, _msg: String| -> Result<i32, (u16, String)> {
                if code >= 500 {
                    Ok(0)
                } else {
                    panic_any(Unrecoverable)
                }
            },
        );
        assert_eq!(rz, Outcome::err((500, "unrecoverable".to_string())));
    }

    #[test]
    fn test_err_then_unpack_catch_normal_recovery() {
        #[derive(Debug, PartialEq)]
        struct Unrecoverable;

        impl From<Unrecoverable> for (u16, String) {
            fn from(_: Unrecoverable) -> Self {
                (500, "unrecoverable".to_string())
            }
        }

        let failed = Outcome::<i32, (u16, String)>::err((404, "missing".to_string()));
        let rz = failed.err_then_unpack_catch(
            raises::<(Unrecoverable,)>(),
            |code: u16, _msg: String| Ok::<_, (u16, String)>(i32::from(code)),
        );
        assert_eq!(rz, Outcome::ok(404));
    }

    #[test]
    fn test_err_then_unpack_catch_is_noop_on_ok() {
        #[derive(Debug, PartialEq)]
        struct Unrecoverable;

        impl From<Unrecoverable> for (u16, String) {
            fn from(_: Unrecoverable) -> Self {
                (500, "unrecoverable".to_string())
            }
        }

        let rz = Outcome::<i32, (u16, String)>::ok(1).err_then_unpack_catch(
            raises::<(Unrecoverable,)>(),
            |_code: u16, _msg: String| -> Result<i32, (u16, String)> { panic_any(Unrecoverable) },
        );
        assert_eq!(rz, Outcome::ok(1));
    }
}
