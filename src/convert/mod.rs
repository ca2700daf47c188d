//! Conversions between [`Outcome`], `core::result::Result`, and `Option`.
//!
//! These adapters make it straightforward to adopt the rail incrementally:
//! wrap a legacy `Result` at the boundary, chain combinators, and unwrap back
//! when handing values to external APIs.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let legacy: Result<i32, String> = Ok(42);
//! let rz = Outcome::from(legacy);
//! assert_eq!(rz, Outcome::ok(42));
//!
//! let back: Result<i32, String> = rz.into_result();
//! assert_eq!(back, Ok(42));
//! ```

use crate::outcome::Outcome;

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    #[inline]
    fn from(outcome: Outcome<V, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

impl<V, E> Outcome<V, E> {
    /// Converts into a plain `Result`, e.g. to use the `?` operator.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::<i32, String>::err("bad".to_string());
    /// assert_eq!(rz.into_result(), Err("bad".to_string()));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_result(self) -> Result<V, E> {
        self.into()
    }

    /// Wraps a plain `Result` onto the rail.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::from_result(Ok::<_, String>(1));
    /// assert_eq!(rz, Outcome::ok(1));
    /// ```
    #[must_use]
    #[inline]
    pub fn from_result(result: Result<V, E>) -> Self {
        result.into()
    }

    /// Turns a present value into `Ok` and an absent one into `Err(error)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::from_option(None::<i32>, "gone".to_string());
    /// assert_eq!(rz, Outcome::err("gone".to_string()));
    /// ```
    #[must_use]
    #[inline]
    pub fn from_option(option: Option<V>, error: E) -> Self {
        match option {
            Some(value) => Self::Ok(value),
            None => Self::Err(error),
        }
    }

    /// Drops the error, keeping the success value if any.
    ///
    /// Synonym of [`into_value`](Outcome::into_value).
    #[must_use]
    #[inline]
    pub fn into_option(self) -> Option<V> {
        self.into_value()
    }
}
