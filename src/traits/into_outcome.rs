//! The normalization protocol behind every chaining combinator.
//!
//! Callbacks handed to [`then`](crate::Outcome::then) and friends may return
//! either an [`Outcome`] or a plain [`core::result::Result`]; both are folded
//! back onto the rail through [`IntoOutcome`]. The free function [`ensure`]
//! exposes the same normalization directly.

use crate::outcome::Outcome;
use core::any::Any;

/// Conversion of a callback's return value into an [`Outcome`].
///
/// Implemented for `Outcome<V, E>` (identity) and `Result<V, E>`
/// (variant-for-variant conversion), so fallible callbacks can keep their
/// natural return type. Raw value transforms go through
/// [`map`](crate::Outcome::map) instead, which needs no normalization.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ensure, Outcome};
///
/// let from_result: Outcome<i32, String> = ensure(Ok::<_, String>(42));
/// assert_eq!(from_result, Outcome::ok(42));
///
/// let passthrough = ensure(Outcome::<i32, String>::err("nope".to_string()));
/// assert_eq!(passthrough, Outcome::err("nope".to_string()));
/// ```
pub trait IntoOutcome<V, E> {
    /// Normalizes `self` into an outcome.
    fn into_outcome(self) -> Outcome<V, E>;
}

impl<V, E> IntoOutcome<V, E> for Outcome<V, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<V, E> {
        self
    }
}

impl<V, E> IntoOutcome<V, E> for Result<V, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<V, E> {
        match self {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

/// Normalizes a result-shaped value into an [`Outcome`].
///
/// Already-an-outcome values pass through unchanged; `Result` values convert
/// variant for variant. This is the function every combinator applies to its
/// callback's return value.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ensure, Outcome};
///
/// let rz: Outcome<i32, String> = ensure(Err::<i32, _>("bad".to_string()));
/// assert_eq!(rz, Outcome::err("bad".to_string()));
/// ```
#[must_use]
#[inline]
pub fn ensure<V, E, R>(obj: R) -> Outcome<V, E>
where
    R: IntoOutcome<V, E>,
{
    obj.into_outcome()
}

/// Runtime type predicate: is this erased value an `Outcome<V, E>`?
///
/// The static counterpart is simply the type system; this exists for code
/// holding `dyn Any` values that wants to know whether an outcome is inside.
///
/// # Examples
///
/// ```
/// use core::any::Any;
/// use outcome_rail::{is_outcome, Outcome};
///
/// let boxed: Box<dyn Any> = Box::new(Outcome::<i32, String>::ok(1));
/// assert!(is_outcome::<i32, String>(boxed.as_ref()));
/// assert!(!is_outcome::<u8, String>(boxed.as_ref()));
/// ```
#[must_use]
#[inline]
pub fn is_outcome<V: Any, E: Any>(obj: &dyn Any) -> bool {
    obj.is::<Outcome<V, E>>()
}
