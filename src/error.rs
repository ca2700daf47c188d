//! Error kinds raised or carried by the core [`Outcome`](crate::Outcome) type.
//!
//! Three of these are programmer-facing fault kinds ([`ConstructError`],
//! [`AccessError`], [`GuardError`]); [`EmptySequence`] is the distinguished
//! error produced when aggregating an empty input. All of them are plain,
//! pattern-matchable values implementing [`core::error::Error`], so callers
//! can whitelist them in [`catch`](crate::catch::catch) like any other fault.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{GuardError, Outcome};
//!
//! let rz: Outcome<i32, GuardError> = Outcome::ok(-3);
//! let guarded = rz.guard(|v| *v > 0);
//! assert!(guarded.is_err());
//! ```

use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

/// Raised when an outcome is rebuilt across variants.
///
/// Rewrapping an `Ok` as `Ok` (or an `Err` as `Err`) flattens to the inner
/// payload, but crossing the tracks would silently launder a failure into a
/// success (or the reverse), so it is always fatal to the constructing call.
///
/// # Examples
///
/// ```
/// use outcome_rail::{catch, raises, ConstructError, Outcome};
///
/// let failed: Outcome<i32, &'static str> = Outcome::err("boom");
/// let rz = catch(raises::<(ConstructError,)>(), move || {
///     Ok::<_, ConstructError>(Outcome::ok_from(failed))
/// });
/// assert_eq!(rz, Outcome::err(ConstructError::OkFromErr));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructError {
    /// Tried to rebuild an `Err` outcome on the success track.
    OkFromErr,
    /// Tried to rebuild an `Ok` outcome on the failure track.
    ErrFromOk,
}

impl fmt::Display for ConstructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OkFromErr => write!(f, "can't rebuild an Err outcome as Ok"),
            Self::ErrFromOk => write!(f, "can't rebuild an Ok outcome as Err"),
        }
    }
}

impl core::error::Error for ConstructError {}

/// Raised when the accessor for the other variant is used.
///
/// Reading [`value`](crate::Outcome::value) on an `Err`, or
/// [`error`](crate::Outcome::error) on an `Ok`, signals programmer misuse;
/// the non-panicking [`try_value`](crate::Outcome::try_value) and
/// [`try_error`](crate::Outcome::try_error) return this kind as data instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessError {
    /// `value` was read on an `Err` outcome.
    ValueOnErr,
    /// `error` was read on an `Ok` outcome.
    ErrorOnOk,
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueOnErr => write!(f, "`value` does not exist on an Err outcome"),
            Self::ErrorOnOk => write!(f, "`error` does not exist on an Ok outcome"),
        }
    }
}

impl core::error::Error for AccessError {}

/// Default failure content produced by the guard combinators.
///
/// When [`guard`](crate::Outcome::guard) or [`guard_some`](crate::Outcome::guard_some)
/// rejects a value and the caller supplied no explicit error, the resulting
/// `Err` carries a `GuardError` describing what failed. Error types opt in
/// with `From<GuardError>`; `String` already does.
///
/// # Examples
///
/// ```
/// use outcome_rail::{GuardError, Outcome};
///
/// let rz: Outcome<i32, String> = Outcome::ok(3);
/// let failed = rz.guard(|v| *v < 0);
/// assert!(failed.error().contains("failed to pass the guard"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuardError {
    message: String,
}

impl GuardError {
    /// Creates a guard error with an explicit message.
    #[must_use]
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Error for a value that failed a predicate guard.
    pub(crate) fn predicate(subject: fmt::Arguments<'_>, pred: &'static str) -> Self {
        Self {
            message: format!("{} failed to pass the guard: {}", subject, pred),
        }
    }

    /// Error for an absent value, pointing at the guarding call site.
    pub(crate) fn absent(location: &core::panic::Location<'_>) -> Self {
        Self {
            message: format!(
                "failed to pass the some-value guard: {}:{}",
                location.file(),
                location.line()
            ),
        }
    }

    /// The human-readable failure description.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for GuardError {}

impl From<GuardError> for String {
    #[inline]
    fn from(err: GuardError) -> Self {
        err.message
    }
}

/// Distinguished error for aggregating an empty sequence.
///
/// [`any`](crate::aggregate::any) has nothing meaningful to return when the
/// input produced no outcomes at all, so it reports this kind through the
/// caller's error type (`E: From<EmptySequence>`).
///
/// # Examples
///
/// ```
/// use outcome_rail::{any, Outcome};
///
/// let rz: Outcome<_, String> = any(Vec::<Outcome<i32, String>>::new());
/// assert_eq!(rz, Outcome::err("empty sequence".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct EmptySequence;

impl fmt::Display for EmptySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "empty sequence")
    }
}

impl core::error::Error for EmptySequence {}

impl From<EmptySequence> for String {
    #[inline]
    fn from(_: EmptySequence) -> Self {
        String::from("empty sequence")
    }
}

/// Raises a fault with a typed payload so `catch` can downcast it later.
///
/// Off-std there is no panic payload machinery, so the textual form is used.
#[cfg(feature = "std")]
#[track_caller]
pub(crate) fn raise<T: core::any::Any + Send>(fault: T) -> ! {
    std::panic::panic_any(fault)
}

#[cfg(not(feature = "std"))]
#[track_caller]
pub(crate) fn raise<T: fmt::Display>(fault: T) -> ! {
    panic!("{}", fault)
}
