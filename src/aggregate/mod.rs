//! Combining many outcomes into one: [`all`], [`any`], and [`first_ok`].
//!
//! `all` and `first_ok` short-circuit: once the aggregate is decided, no
//! further items are pulled from the input iterator, so lazily produced
//! outcomes after that point are never evaluated. `any` inspects everything.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{all, first_ok, Outcome};
//!
//! let rz = all([Outcome::<i32, String>::ok(1), Outcome::ok(2), Outcome::ok(3)]);
//! assert_eq!(rz.value().as_slice(), &[1, 2, 3]);
//!
//! let hit = first_ok([
//!     Outcome::<i32, String>::err("a".to_string()),
//!     Outcome::ok(1),
//!     Outcome::ok(2),
//! ]);
//! assert_eq!(hit, Some(Outcome::ok(1)));
//! ```

use smallvec::SmallVec;

use crate::error::EmptySequence;
use crate::outcome::Outcome;

/// SmallVec-backed collection for aggregated success values.
///
/// Uses inline storage for up to 4 elements, so typical fan-outs avoid heap
/// allocation.
pub type ValueVec<V> = SmallVec<[V; 4]>;

/// Collects every success value, or fails with the first error.
///
/// Short-circuits: items after the first `Err` are never pulled from the
/// iterator. An empty input is vacuously successful.
///
/// # Examples
///
/// ```
/// use outcome_rail::{all, Outcome};
///
/// let failed = all([
///     Outcome::<i32, String>::ok(1),
///     Outcome::err("x".to_string()),
///     Outcome::ok(3),
/// ]);
/// assert_eq!(failed, Outcome::err("x".to_string()));
///
/// let empty = all(Vec::<Outcome<i32, String>>::new());
/// assert_eq!(empty, Outcome::ok(outcome_rail::ValueVec::new()));
/// ```
pub fn all<V, E, I>(results: I) -> Outcome<ValueVec<V>, E>
where
    I: IntoIterator<Item = Outcome<V, E>>,
{
    let mut values = ValueVec::new();
    for rz in results {
        match rz {
            Outcome::Ok(value) => values.push(value),
            Outcome::Err(error) => return Outcome::Err(error),
        }
    }
    Outcome::Ok(values)
}

/// Collects the values of every `Ok`, or fails with the last error seen.
///
/// Unlike [`all`] this never short-circuits: every item is evaluated. At
/// least one success makes the aggregate a success; an empty input is the
/// distinguished [`EmptySequence`] failure.
///
/// # Examples
///
/// ```
/// use outcome_rail::{any, Outcome};
///
/// let rz = any([
///     Outcome::<i32, String>::ok(1),
///     Outcome::err("x".to_string()),
///     Outcome::ok(3),
/// ]);
/// assert_eq!(rz.value().as_slice(), &[1, 3]);
///
/// let all_failed = any([
///     Outcome::<i32, String>::err("a".to_string()),
///     Outcome::err("b".to_string()),
/// ]);
/// assert_eq!(all_failed, Outcome::err("b".to_string()));
/// ```
pub fn any<V, E, I>(results: I) -> Outcome<ValueVec<V>, E>
where
    E: From<EmptySequence>,
    I: IntoIterator<Item = Outcome<V, E>>,
{
    let mut values = ValueVec::new();
    let mut last_err = None;
    for rz in results {
        match rz {
            Outcome::Ok(value) => values.push(value),
            Outcome::Err(error) => last_err = Some(error),
        }
    }
    if !values.is_empty() {
        Outcome::Ok(values)
    } else if let Some(error) = last_err {
        Outcome::Err(error)
    } else {
        Outcome::Err(EmptySequence.into())
    }
}

/// Returns the first `Ok`, or the last `Err`, or `None` for an empty input.
///
/// Short-circuits on the first success: remaining items are never pulled
/// from the iterator.
///
/// # Examples
///
/// ```
/// use outcome_rail::{first_ok, Outcome};
///
/// let miss = first_ok([
///     Outcome::<i32, String>::err("a".to_string()),
///     Outcome::err("b".to_string()),
/// ]);
/// assert_eq!(miss, Some(Outcome::err("b".to_string())));
///
/// assert_eq!(first_ok(Vec::<Outcome<i32, String>>::new()), None);
/// ```
pub fn first_ok<V, E, I>(results: I) -> Option<Outcome<V, E>>
where
    I: IntoIterator<Item = Outcome<V, E>>,
{
    let mut last = None;
    for rz in results {
        if rz.is_ok() {
            return Some(rz);
        }
        last = Some(rz);
    }
    last
}

/// Adapts an outcome-sequence-producing function into one returning the
/// [`first_ok`] aggregate directly.
///
/// The function shape mirrors the layered-lookup idiom: produce candidates
/// lazily, take the first hit.
///
/// # Examples
///
/// ```
/// use outcome_rail::{first_ok_wrap, Outcome};
///
/// let mut lookup = first_ok_wrap(|key: &str| {
///     [
///         Outcome::<i32, String>::err(format!("{} not in l1", key)),
///         Outcome::ok(42),
///     ]
/// });
/// assert_eq!(lookup("answer"), Some(Outcome::ok(42)));
/// ```
pub fn first_ok_wrap<Args, V, E, I, F>(mut func: F) -> impl FnMut(Args) -> Option<Outcome<V, E>>
where
    F: FnMut(Args) -> I,
    I: IntoIterator<Item = Outcome<V, E>>,
{
    move |args| first_ok(func(args))
}
