//! Variadic, lazy forms of the aggregation functions.
//!
//! The function forms ([`all`](crate::aggregate::all),
//! [`first_ok`](crate::aggregate::first_ok)) consume an iterator of already
//! homogeneous outcomes; the macro forms take a comma-separated list of
//! expressions and keep the short-circuit lazy across them, so a later
//! expression is never evaluated once the aggregate is decided.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{first_ok, Outcome};
//!
//! fn l1(_key: &str) -> Outcome<i32, String> {
//!     Outcome::err("l1 miss".to_string())
//! }
//!
//! fn db(_key: &str) -> Outcome<i32, String> {
//!     Outcome::ok(42)
//! }
//!
//! let hit = first_ok!(l1("answer"), db("answer"));
//! assert_eq!(hit, Some(Outcome::ok(42)));
//! ```

/// Lazy, variadic [`first_ok`](crate::aggregate::first_ok).
///
/// Evaluates the expressions left to right, stopping at the first `Ok`;
/// yields `Some(first Ok)`, else `Some(last Err)`, else `None` when invoked
/// with no arguments.
///
/// # Examples
///
/// ```
/// use outcome_rail::{first_ok, Outcome};
///
/// let mut evaluated = false;
/// let rz = first_ok!(
///     Outcome::<i32, String>::err("a".to_string()),
///     Outcome::ok(1),
///     {
///         evaluated = true;
///         Outcome::ok(2)
///     },
/// );
/// assert_eq!(rz, Some(Outcome::ok(1)));
/// assert!(!evaluated);
/// ```
#[macro_export]
macro_rules! first_ok {
    () => {
        ::core::option::Option::None
    };
    ($($rz:expr),+ $(,)?) => {{
        let mut last = ::core::option::Option::None;
        loop {
            $(
                let rz = $rz;
                if rz.is_ok() {
                    break ::core::option::Option::Some(rz);
                }
                last = ::core::option::Option::Some(rz);
            )+
            break last;
        }
    }};
}

/// Lazy, variadic [`all`](crate::aggregate::all).
///
/// Evaluates the expressions left to right; the first `Err` short-circuits
/// and later expressions are never evaluated. All successes collect into an
/// `Ok(ValueVec)`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{all, Outcome};
///
/// let rz = all!(
///     Outcome::<i32, String>::ok(1),
///     Outcome::ok(2),
/// );
/// assert_eq!(rz.value().as_slice(), &[1, 2]);
/// ```
#[macro_export]
macro_rules! all {
    () => {
        $crate::Outcome::Ok($crate::ValueVec::new())
    };
    ($($rz:expr),+ $(,)?) => {{
        loop {
            let mut values = $crate::ValueVec::new();
            $(
                match $rz {
                    $crate::Outcome::Ok(value) => values.push(value),
                    $crate::Outcome::Err(error) => break $crate::Outcome::Err(error),
                }
            )+
            break $crate::Outcome::Ok(values);
        }
    }};
}
