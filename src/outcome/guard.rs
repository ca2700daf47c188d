//! Validation combinators: `guard` / `check` and the some-value guards.

use core::fmt;

use crate::error::GuardError;
use crate::outcome::Outcome;

impl<V, E> Outcome<V, E> {
    /// Keeps an `Ok` whose value passes `pred`; otherwise fails with a
    /// default [`GuardError`] describing the outcome and the predicate.
    ///
    /// No-op on `Err`. Error types opt into the default content with
    /// `From<GuardError>`; use [`guard_or`](Self::guard_or) or
    /// [`guard_or_else`](Self::guard_or_else) to supply the error yourself.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::<i32, String>::ok(3).guard(|v| *v > 0);
    /// assert_eq!(rz, Outcome::ok(3));
    ///
    /// let failed = Outcome::<i32, String>::ok(3).guard(|v| *v < 0);
    /// assert!(failed.is_err());
    /// ```
    pub fn guard<P>(self, pred: P) -> Self
    where
        P: FnOnce(&V) -> bool,
        V: fmt::Debug,
        E: From<GuardError>,
    {
        match self {
            Self::Ok(value) => {
                if pred(&value) {
                    Self::Ok(value)
                } else {
                    let err = GuardError::predicate(
                        format_args!("Ok({:?})", value),
                        core::any::type_name::<P>(),
                    );
                    Self::Err(err.into())
                }
            }
            err => err,
        }
    }

    /// [`guard`](Self::guard) with a verbatim error for the failing case.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::<i32, String>::ok(-1).guard_or(|v| *v > 0, "negative".to_string());
    /// assert_eq!(rz, Outcome::err("negative".to_string()));
    /// ```
    pub fn guard_or<P>(self, pred: P, err: E) -> Self
    where
        P: FnOnce(&V) -> bool,
    {
        match self {
            Self::Ok(value) => {
                if pred(&value) {
                    Self::Ok(value)
                } else {
                    Self::Err(err)
                }
            }
            failed => failed,
        }
    }

    /// [`guard`](Self::guard) with an error computed from the failing value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::<i32, String>::ok(-7)
    ///     .guard_or_else(|v| *v > 0, |v| format!("{} is negative", v));
    /// assert_eq!(rz, Outcome::err("-7 is negative".to_string()));
    /// ```
    pub fn guard_or_else<P, F>(self, pred: P, err: F) -> Self
    where
        P: FnOnce(&V) -> bool,
        F: FnOnce(&V) -> E,
    {
        match self {
            Self::Ok(value) => {
                if pred(&value) {
                    Self::Ok(value)
                } else {
                    let error = err(&value);
                    Self::Err(error)
                }
            }
            failed => failed,
        }
    }

    /// Alias for [`guard`](Self::guard).
    #[inline]
    pub fn check<P>(self, pred: P) -> Self
    where
        P: FnOnce(&V) -> bool,
        V: fmt::Debug,
        E: From<GuardError>,
    {
        self.guard(pred)
    }

    /// Alias for [`guard_or`](Self::guard_or).
    #[inline]
    pub fn check_or<P>(self, pred: P, err: E) -> Self
    where
        P: FnOnce(&V) -> bool,
    {
        self.guard_or(pred, err)
    }

    /// Alias for [`guard_or_else`](Self::guard_or_else).
    #[inline]
    pub fn check_or_else<P, F>(self, pred: P, err: F) -> Self
    where
        P: FnOnce(&V) -> bool,
        F: FnOnce(&V) -> E,
    {
        self.guard_or_else(pred, err)
    }
}

impl<V, E> Outcome<Option<V>, E> {
    /// Keeps an `Ok` holding a present value; an absent one fails with a
    /// [`GuardError`] naming the guarding call site.
    ///
    /// The predicate here is implicit, so the default message embeds the
    /// caller's file and line for diagnosability. No-op on `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let present = Outcome::<Option<i32>, String>::ok(Some(3)).guard_some();
    /// assert_eq!(present, Outcome::ok(Some(3)));
    ///
    /// let absent = Outcome::<Option<i32>, String>::ok(None).guard_some();
    /// assert!(absent.is_err());
    /// ```
    #[track_caller]
    pub fn guard_some(self) -> Self
    where
        E: From<GuardError>,
    {
        match self {
            Self::Ok(Some(value)) => Self::Ok(Some(value)),
            Self::Ok(None) => {
                let err = GuardError::absent(core::panic::Location::caller());
                Self::Err(err.into())
            }
            failed => failed,
        }
    }

    /// [`guard_some`](Self::guard_some) with a verbatim error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::<Option<i32>, String>::ok(None).guard_some_or("gone".to_string());
    /// assert_eq!(rz, Outcome::err("gone".to_string()));
    /// ```
    pub fn guard_some_or(self, err: E) -> Self {
        match self {
            Self::Ok(Some(value)) => Self::Ok(Some(value)),
            Self::Ok(None) => Self::Err(err),
            failed => failed,
        }
    }

    /// Alias for [`guard_some`](Self::guard_some).
    #[track_caller]
    #[inline]
    pub fn check_some(self) -> Self
    where
        E: From<GuardError>,
    {
        self.guard_some()
    }
}
