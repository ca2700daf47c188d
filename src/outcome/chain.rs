//! Chaining combinators: the `then`/`err_then` family, recovery via `fill`,
//! and the fan-out forms `then_all` / `then_first_ok`.
//!
//! Every callback return value is normalized through
//! [`IntoOutcome`](crate::traits::IntoOutcome), so callbacks may answer with
//! an [`Outcome`] or a plain `Result` interchangeably. Faults raised inside a
//! callback propagate to the caller unless explicitly whitelisted with one of
//! the `*_catch` forms; only declared fault kinds become data.

use crate::aggregate::{self, ValueVec};
use crate::error::EmptySequence;
use crate::outcome::Outcome;
use crate::traits::{IntoOutcome, TupleApply};

#[cfg(feature = "std")]
use crate::catch::{catch, FaultSet, Raises};

impl<V, E> Outcome<V, E> {
    /// Applies `f` to the success value; an `Err` passes through unchanged.
    ///
    /// Faults raised inside `f` are deliberately not converted: an unexpected
    /// panic is a programming defect, not an expected failure. Use
    /// [`then_catch`](Self::then_catch) to whitelist specific fault kinds.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::<i32, String>::ok(3).then(|v| Ok::<_, String>(v * 2));
    /// assert_eq!(rz, Outcome::ok(6));
    ///
    /// let failed = Outcome::<i32, String>::err("e".to_string());
    /// assert_eq!(failed.then(|v| Ok::<_, String>(v * 2)), Outcome::err("e".to_string()));
    /// ```
    #[inline]
    pub fn then<U, R, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> R,
        R: IntoOutcome<U, E>,
    {
        match self {
            Self::Ok(value) => f(value).into_outcome(),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Like [`then`](Self::then), but faults whose payload matches one of the
    /// whitelisted kinds are captured as `Err`.
    ///
    /// Non-matching faults keep unwinding: only declared kinds become data.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{raises, Outcome};
    /// use std::panic::panic_any;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Overflow;
    ///
    /// let rz: Outcome<i32, Overflow> = Outcome::ok(i32::MAX)
    ///     .then_catch(raises::<(Overflow,)>(), |v| {
    ///         match v.checked_add(1) {
    ///             Some(next) => Ok::<_, Overflow>(next),
    ///             None => panic_any(Overflow),
    ///         }
    ///     });
    /// assert_eq!(rz, Outcome::err(Overflow));
    /// ```
    #[cfg(feature = "std")]
    pub fn then_catch<K, U, R, F>(self, kinds: Raises<K>, f: F) -> Outcome<U, E>
    where
        K: FaultSet<E>,
        F: FnOnce(V) -> R,
        R: IntoOutcome<U, E>,
    {
        match self {
            Self::Ok(value) => catch(kinds, move || f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Spreads a tuple-valued success as positional arguments to `f`.
    ///
    /// Otherwise identical to [`then`](Self::then).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::<(i32, i32), String>::ok((3, 4))
    ///     .then_unpack(|a: i32, b: i32| Ok::<_, String>(a + b));
    /// assert_eq!(rz, Outcome::ok(7));
    /// ```
    #[inline]
    pub fn then_unpack<U, R, F>(self, f: F) -> Outcome<U, E>
    where
        F: TupleApply<V, Output = R>,
        R: IntoOutcome<U, E>,
    {
        match self {
            Self::Ok(value) => f.apply(value).into_outcome(),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// [`then_unpack`](Self::then_unpack) with whitelisted fault capture.
    #[cfg(feature = "std")]
    pub fn then_unpack_catch<K, U, R, F>(self, kinds: Raises<K>, f: F) -> Outcome<U, E>
    where
        K: FaultSet<E>,
        F: TupleApply<V, Output = R>,
        R: IntoOutcome<U, E>,
    {
        match self {
            Self::Ok(value) => catch(kinds, move || f.apply(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Applies `f` to the error of an `Err`; an `Ok` passes through.
    ///
    /// The mirror of [`then`](Self::then): recovery chains return an `Ok` to
    /// rejoin the success track or another `Err` to stay on the failure one.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let recovered = Outcome::<i32, String>::err("gone".to_string())
    ///     .err_then(|_| Ok::<_, String>(0));
    /// assert_eq!(recovered, Outcome::ok(0));
    /// ```
    #[inline]
    pub fn err_then<R, F>(self, f: F) -> Outcome<V, E>
    where
        F: FnOnce(E) -> R,
        R: IntoOutcome<V, E>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => f(error).into_outcome(),
        }
    }

    /// [`err_then`](Self::err_then) with whitelisted fault capture.
    #[cfg(feature = "std")]
    pub fn err_then_catch<K, R, F>(self, kinds: Raises<K>, f: F) -> Outcome<V, E>
    where
        K: FaultSet<E>,
        F: FnOnce(E) -> R,
        R: IntoOutcome<V, E>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => catch(kinds, move || f(error)),
        }
    }

    /// Spreads a tuple-valued error as positional arguments to `f`;
    /// otherwise identical to [`err_then`](Self::err_then).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::<i32, (u16, String)>::err((404, "missing".to_string()))
    ///     .err_then_unpack(|code: u16, _msg: String| Ok::<_, (u16, String)>(i32::from(code)));
    /// assert_eq!(rz, Outcome::ok(404));
    /// ```
    #[inline]
    pub fn err_then_unpack<R, F>(self, f: F) -> Outcome<V, E>
    where
        F: TupleApply<E, Output = R>,
        R: IntoOutcome<V, E>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => f.apply(error).into_outcome(),
        }
    }

    /// [`err_then_unpack`](Self::err_then_unpack) with whitelisted fault
    /// capture.
    #[cfg(feature = "std")]
    pub fn err_then_unpack_catch<K, R, F>(self, kinds: Raises<K>, f: F) -> Outcome<V, E>
    where
        K: FaultSet<E>,
        F: TupleApply<E, Output = R>,
        R: IntoOutcome<V, E>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => catch(kinds, move || f.apply(error)),
        }
    }

    /// Transforms the success value with a plain function.
    ///
    /// The raw-value sibling of [`then`](Self::then): no normalization, no
    /// failure path.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::<i32, String>::ok(21).map(|v| v * 2);
    /// assert_eq!(rz, Outcome::ok(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms the error with a plain function.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::<i32, i32>::err(404).map_err(|e| format!("code {}", e));
    /// assert_eq!(rz, Outcome::err("code 404".to_string()));
    /// ```
    #[must_use]
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<V, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Converts a recoverable failure into a default success.
    ///
    /// On `Err`, if `pred(error)` holds the whole outcome becomes
    /// `Ok(value)`; otherwise it passes through. No-op on `Ok`. Useful for
    /// mapping one specific failure to a fallback without a full recovery
    /// function.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::<i32, String>::err("missing".to_string())
    ///     .fill(|e| e == "missing", 0);
    /// assert_eq!(rz, Outcome::ok(0));
    ///
    /// let other = Outcome::<i32, String>::err("corrupt".to_string())
    ///     .fill(|e| e == "missing", 0);
    /// assert_eq!(other, Outcome::err("corrupt".to_string()));
    /// ```
    pub fn fill<P>(self, pred: P, value: V) -> Self
    where
        P: FnOnce(&E) -> bool,
    {
        match self {
            Self::Err(error) => {
                if pred(&error) {
                    Self::Ok(value)
                } else {
                    Self::Err(error)
                }
            }
            ok => ok,
        }
    }

    /// Applies every function to the success value and aggregates with
    /// [`all`](crate::aggregate::all).
    ///
    /// Each function sees a shared reference to the value. The first `Err`
    /// produced short-circuits: later functions are never invoked. On an
    /// `Err` outcome nothing runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::<i32, String>::ok(2).then_all([
    ///     (|v: &i32| Ok::<_, String>(v + 1)) as fn(&i32) -> Result<i32, String>,
    ///     |v: &i32| Ok(v * 10),
    /// ]);
    /// assert_eq!(rz.value().as_slice(), &[3, 20]);
    /// ```
    pub fn then_all<U, R, F, I>(self, funcs: I) -> Outcome<ValueVec<U>, E>
    where
        I: IntoIterator<Item = F>,
        F: FnMut(&V) -> R,
        R: IntoOutcome<U, E>,
    {
        match self {
            Self::Ok(value) => {
                aggregate::all(funcs.into_iter().map(|mut f| f(&value).into_outcome()))
            }
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Applies the functions lazily and returns the first `Ok`, or the last
    /// `Err` if none succeed.
    ///
    /// Functions after the first success are never invoked. An empty function
    /// list yields `Err(EmptySequence)`. On an `Err` outcome nothing runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::<i32, String>::ok(7).then_first_ok([
    ///     (|_: &i32| Err::<i32, _>("l1 miss".to_string())) as fn(&i32) -> Result<i32, String>,
    ///     |v: &i32| Ok(v * 10),
    /// ]);
    /// assert_eq!(rz, Outcome::ok(70));
    /// ```
    pub fn then_first_ok<U, R, F, I>(self, funcs: I) -> Outcome<U, E>
    where
        I: IntoIterator<Item = F>,
        F: FnMut(&V) -> R,
        R: IntoOutcome<U, E>,
        E: From<EmptySequence>,
    {
        match self {
            Self::Ok(value) => {
                aggregate::first_ok(funcs.into_iter().map(|mut f| f(&value).into_outcome()))
                    .unwrap_or_else(|| Outcome::Err(EmptySequence.into()))
            }
            Self::Err(error) => Outcome::Err(error),
        }
    }
}
