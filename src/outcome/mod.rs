//! The two-track [`Outcome`] type and its variant-level operations.
//!
//! Chaining combinators live in the `chain` impl block, validation guards in
//! `guard`, and zero-or-one iteration in [`iter`].

use core::fmt;

use crate::error::{AccessError, ConstructError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod chain;
mod guard;
pub mod iter;

/// A disjoint success/failure value: either `Ok` carrying a value or `Err`
/// carrying an error.
///
/// `Outcome<V, E>` mirrors `core::result::Result` but adds the railway
/// algebra of this crate: normalization of callback returns, guard
/// combinators, whitelisted fault capture, and multi-outcome aggregation.
/// Instances are immutable after construction; every transformation produces
/// a new outcome, so shared references are always safe to iterate and test.
///
/// # Type Parameters
///
/// * `V` - The success value type
/// * `E` - The error type
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let rz: Outcome<i32, String> = Outcome::ok(40)
///     .then(|v| Ok::<_, String>(v + 2))
///     .guard(|v| *v > 0);
/// assert_eq!(rz, Outcome::ok(42));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<V, E> {
    /// Success carrying a value.
    Ok(V),
    /// Failure carrying an error.
    Err(E),
}

impl<V, E> Outcome<V, E> {
    /// Creates a success outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::<i32, String>::ok(42);
    /// assert!(rz.is_ok());
    /// ```
    #[must_use]
    #[inline]
    pub fn ok(value: V) -> Self {
        Self::Ok(value)
    }

    /// Creates a failure outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::<i32, String>::err("nope".to_string());
    /// assert!(rz.is_err());
    /// ```
    #[must_use]
    #[inline]
    pub fn err(error: E) -> Self {
        Self::Err(error)
    }

    /// Rebuilds an existing outcome on the success track.
    ///
    /// An `Ok` flattens to itself instead of double-wrapping; an `Err` cannot
    /// be laundered into a success and is rejected.
    ///
    /// # Panics
    ///
    /// Raises [`ConstructError::OkFromErr`] if `outcome` is an `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let inner = Outcome::<i32, String>::ok(3);
    /// assert_eq!(Outcome::ok_from(inner), Outcome::ok(3));
    /// ```
    #[track_caller]
    pub fn ok_from(outcome: Outcome<V, E>) -> Self {
        match outcome {
            Self::Ok(value) => Self::Ok(value),
            Self::Err(_) => crate::error::raise(ConstructError::OkFromErr),
        }
    }

    /// Rebuilds an existing outcome on the failure track.
    ///
    /// The mirror of [`ok_from`](Self::ok_from): an `Err` flattens to itself,
    /// an `Ok` is rejected.
    ///
    /// # Panics
    ///
    /// Raises [`ConstructError::ErrFromOk`] if `outcome` is an `Ok`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let inner = Outcome::<i32, String>::err("bad".to_string());
    /// assert_eq!(Outcome::err_from(inner), Outcome::err("bad".to_string()));
    /// ```
    #[track_caller]
    pub fn err_from(outcome: Outcome<V, E>) -> Self {
        match outcome {
            Self::Err(error) => Self::Err(error),
            Self::Ok(_) => crate::error::raise(ConstructError::ErrFromOk),
        }
    }

    /// Returns `true` if this is an `Ok`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert!(Outcome::<i32, String>::ok(1).is_ok());
    /// assert!(!Outcome::<i32, String>::err("e".to_string()).is_ok());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert!(Outcome::<i32, String>::err("e".to_string()).is_err());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Borrows the success value.
    ///
    /// # Panics
    ///
    /// Raises [`AccessError::ValueOnErr`] on an `Err` outcome; the accessor
    /// for the variant you are not in does not exist. Use
    /// [`try_value`](Self::try_value) for a non-panicking lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::<i32, String>::ok(3);
    /// assert_eq!(*rz.value(), 3);
    /// ```
    #[must_use]
    #[track_caller]
    pub fn value(&self) -> &V {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => crate::error::raise(AccessError::ValueOnErr),
        }
    }

    /// Borrows the error.
    ///
    /// # Panics
    ///
    /// Raises [`AccessError::ErrorOnOk`] on an `Ok` outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::<i32, String>::err("bad".to_string());
    /// assert_eq!(rz.error(), "bad");
    /// ```
    #[must_use]
    #[track_caller]
    pub fn error(&self) -> &E {
        match self {
            Self::Err(error) => error,
            Self::Ok(_) => crate::error::raise(AccessError::ErrorOnOk),
        }
    }

    /// Borrows the success value, reporting wrong-variant access as data.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{AccessError, Outcome};
    ///
    /// let rz = Outcome::<i32, String>::err("bad".to_string());
    /// assert_eq!(rz.try_value(), Err(AccessError::ValueOnErr));
    /// ```
    #[inline]
    pub fn try_value(&self) -> Result<&V, AccessError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => Err(AccessError::ValueOnErr),
        }
    }

    /// Borrows the error, reporting wrong-variant access as data.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{AccessError, Outcome};
    ///
    /// let rz = Outcome::<i32, String>::ok(1);
    /// assert_eq!(rz.try_error(), Err(AccessError::ErrorOnOk));
    /// ```
    #[inline]
    pub fn try_error(&self) -> Result<&E, AccessError> {
        match self {
            Self::Err(error) => Ok(error),
            Self::Ok(_) => Err(AccessError::ErrorOnOk),
        }
    }

    /// Extracts the success value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, String>::ok(3).into_value(), Some(3));
    /// assert_eq!(Outcome::<i32, String>::err("e".to_string()).into_value(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Extracts the error, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::<i32, String>::err("e".to_string());
    /// assert_eq!(rz.into_error(), Some("e".to_string()));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Err(error) => Some(error),
            Self::Ok(_) => None,
        }
    }

    /// Returns the success value, or `default` unconditionally on `Err`.
    ///
    /// The error is never inspected.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, String>::ok(3).get_or(0), 3);
    /// assert_eq!(Outcome::<i32, String>::err("e".to_string()).get_or(0), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn get_or(self, default: V) -> V {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value, or computes a default from the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::<usize, String>::err("four".to_string());
    /// assert_eq!(rz.get_or_else(|e| e.len()), 4);
    /// ```
    #[must_use]
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => default(error),
        }
    }

    /// Returns the success value, or raises the stored error.
    ///
    /// This is the single sanctioned boundary where a failure re-enters the
    /// host's fault propagation; intended only for a system's outermost edge.
    /// The error itself is the panic payload, so an outer
    /// [`catch`](crate::catch::catch) whitelisting `E` can recover it.
    ///
    /// # Panics
    ///
    /// Raises the stored error if this is an `Err`.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::<i32, String>::err("boom".to_string());
    /// rz.get_or_raise();
    /// ```
    #[cfg(feature = "std")]
    #[track_caller]
    pub fn get_or_raise(self) -> V
    where
        E: core::any::Any + Send,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => crate::error::raise(error),
        }
    }

    /// Returns the success value, or raises the stored error (textual form).
    #[cfg(not(feature = "std"))]
    #[track_caller]
    pub fn get_or_raise(self) -> V
    where
        E: fmt::Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => panic!("{:?}", error),
        }
    }

    /// Returns the success value, or raises a caller-supplied error instead
    /// of the stored one.
    ///
    /// The replacement is built lazily; `Ok` outcomes never evaluate it.
    ///
    /// # Panics
    ///
    /// Raises `error()` if this is an `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::<i32, String>::ok(3);
    /// assert_eq!(rz.get_or_raise_with(|| "unreachable"), 3);
    /// ```
    #[cfg(feature = "std")]
    #[track_caller]
    pub fn get_or_raise_with<D, F>(self, error: F) -> V
    where
        D: core::any::Any + Send,
        F: FnOnce() -> D,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => crate::error::raise(error()),
        }
    }

    /// Returns the success value, or raises a caller-supplied error
    /// (textual form).
    #[cfg(not(feature = "std"))]
    #[track_caller]
    pub fn get_or_raise_with<D, F>(self, error: F) -> V
    where
        D: fmt::Debug,
        F: FnOnce() -> D,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => panic!("{:?}", error()),
        }
    }

    /// Sequence length: 1 for `Ok`, 0 for `Err`.
    ///
    /// An outcome behaves as a sequence of zero or one values; see
    /// [`iter`](Self::iter).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, String>::ok(1).len(), 1);
    /// assert_eq!(Outcome::<i32, String>::err("e".to_string()).len(), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Ok(_) => 1,
            Self::Err(_) => 0,
        }
    }

    /// Returns `true` if the outcome yields no values, i.e. is an `Err`.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.is_err()
    }
}

impl<V, E> Outcome<Outcome<V, E>, E> {
    /// Flattens one level of success-side nesting.
    ///
    /// `Ok(Ok(v))` becomes `Ok(v)`; an outer `Err` passes through. A nested
    /// `Ok(Err(_))` is the cross-variant construction the type forbids.
    ///
    /// # Panics
    ///
    /// Raises [`ConstructError::OkFromErr`] on `Ok(Err(_))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let nested = Outcome::<_, String>::ok(Outcome::<i32, String>::ok(3));
    /// assert_eq!(nested.flatten(), Outcome::ok(3));
    /// ```
    #[track_caller]
    pub fn flatten(self) -> Outcome<V, E> {
        match self {
            Self::Ok(inner) => Outcome::ok_from(inner),
            Self::Err(error) => Outcome::Err(error),
        }
    }
}

/// Renders `Ok(<value>)` / `Err(<error>)` with `Debug` payloads, matching the
/// derived `Debug` shape.
impl<V: fmt::Debug, E: fmt::Debug> fmt::Display for Outcome<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(f, "Ok({:?})", value),
            Self::Err(error) => write!(f, "Err({:?})", error),
        }
    }
}

/// Truthiness: `Ok` is `true`, `Err` is `false`.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let rz = Outcome::<i32, String>::ok(1);
/// assert!(bool::from(&rz));
/// ```
impl<V, E> From<&Outcome<V, E>> for bool {
    #[inline]
    fn from(outcome: &Outcome<V, E>) -> Self {
        outcome.is_ok()
    }
}
