//! Whitelisted fault capture: turning declared panic kinds into `Err` data.
//!
//! A fault raised with a typed payload (`std::panic::panic_any`) can be
//! captured by [`catch`] when its type appears in the caller-declared
//! [`Raises`] set; anything else keeps unwinding. This preserves the line
//! between expected failures (data) and programming defects (faults).
//!
//! The whitelist is a tuple of kinds, tried in order, each convertible into
//! the outcome's error type:
//!
//! ```
//! use outcome_rail::{catch, raises, Outcome};
//! use std::panic::panic_any;
//!
//! #[derive(Debug, PartialEq)]
//! struct MissingKey(&'static str);
//!
//! fn score(subject: &'static str) -> i32 {
//!     match subject {
//!         "math" => 80,
//!         "physics" => 95,
//!         _ => panic_any(MissingKey(subject)),
//!     }
//! }
//!
//! let hit: Outcome<i32, MissingKey> =
//!     catch(raises::<(MissingKey,)>(), || Ok::<_, MissingKey>(score("math")));
//! assert_eq!(hit, Outcome::ok(80));
//!
//! let miss: Outcome<i32, MissingKey> =
//!     catch(raises::<(MissingKey,)>(), || Ok::<_, MissingKey>(score("bio")));
//! assert_eq!(miss, Outcome::err(MissingKey("bio")));
//! ```

use core::any::Any;
use core::marker::PhantomData;
use std::boxed::Box;
use std::panic::{self, AssertUnwindSafe};

use crate::outcome::Outcome;
use crate::traits::{IntoOutcome, TupleApply};

/// Zero-sized token naming the whitelist of fault kinds to capture.
///
/// Built with [`raises`]; `K` is a tuple of payload types, e.g.
/// `raises::<(Timeout, MissingKey)>()`.
pub struct Raises<K> {
    kinds: PhantomData<fn() -> K>,
}

impl<K> Clone for Raises<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Raises<K> {}

impl<K> core::fmt::Debug for Raises<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Raises<{}>", core::any::type_name::<K>())
    }
}

/// Declares the fault kinds a [`catch`] call is willing to capture.
#[must_use]
#[inline]
pub fn raises<K>() -> Raises<K> {
    Raises { kinds: PhantomData }
}

/// Ordered downcast of a panic payload against a tuple of fault kinds.
///
/// Kinds are tried in tuple order; the first whose type matches the payload
/// wins and is converted into the error type. A payload matching none is
/// handed back so the fault can resume unwinding.
pub trait FaultSet<E> {
    /// Attempts to claim `fault` as one of the whitelisted kinds.
    fn capture(fault: Box<dyn Any + Send>) -> Result<E, Box<dyn Any + Send>>;
}

macro_rules! impl_fault_set {
    ($(($($kind:ident),+))+) => {
        $(
            impl<E, $($kind),+> FaultSet<E> for ($($kind,)+)
            where
                $($kind: Any + Send + Into<E>),+
            {
                fn capture(fault: Box<dyn Any + Send>) -> Result<E, Box<dyn Any + Send>> {
                    $(
                        let fault = match fault.downcast::<$kind>() {
                            Ok(kind) => return Ok((*kind).into()),
                            Err(other) => other,
                        };
                    )+
                    Err(fault)
                }
            }
        )+
    };
}

impl_fault_set! {
    (K1)
    (K1, K2)
    (K1, K2, K3)
    (K1, K2, K3, K4)
    (K1, K2, K3, K4, K5)
    (K1, K2, K3, K4, K5, K6)
}

/// Runs `func`, capturing whitelisted faults as `Err`.
///
/// A normal return is normalized through
/// [`IntoOutcome`](crate::traits::IntoOutcome). A fault whose payload
/// downcasts to one of the kinds in `kinds` becomes `Err`; any other fault
/// resumes unwinding untouched.
///
/// `String` and `&'static str` are ordinary payload types here, so
/// `raises::<(String,)>()` captures formatted `panic!` messages.
///
/// # Examples
///
/// ```
/// use outcome_rail::{catch, raises, Outcome};
///
/// let rz: Outcome<i32, String> = catch(raises::<(String,)>(), || {
///     let data: [i32; 1] = [7];
///     Ok::<_, String>(data[0])
/// });
/// assert_eq!(rz, Outcome::ok(7));
/// ```
pub fn catch<K, V, E, R, F>(kinds: Raises<K>, func: F) -> Outcome<V, E>
where
    K: FaultSet<E>,
    F: FnOnce() -> R,
    R: IntoOutcome<V, E>,
{
    let Raises { kinds: _ } = kinds;
    match panic::catch_unwind(AssertUnwindSafe(func)) {
        Ok(out) => out.into_outcome(),
        Err(fault) => match K::capture(fault) {
            Ok(error) => Outcome::Err(error),
            Err(fault) => panic::resume_unwind(fault),
        },
    }
}

/// The decorator shape of [`catch`]: wraps a callable instead of invoking it.
///
/// The returned closure takes the target's arguments as one tuple and spreads
/// them positionally, with the same capture semantics as [`catch`]. The
/// target must be `Clone` (any capture-free closure or `fn` is).
///
/// # Examples
///
/// ```
/// use outcome_rail::{catch_wrap, raises, Outcome};
/// use std::panic::panic_any;
///
/// #[derive(Debug, PartialEq)]
/// struct Undefined;
///
/// let mut div = catch_wrap(raises::<(Undefined,)>(), |num: i32, den: i32| {
///     if den == 0 {
///         panic_any(Undefined);
///     }
///     Ok::<_, Undefined>(num / den)
/// });
/// assert_eq!(div((6, 3)), Outcome::ok(2));
/// assert_eq!(div((6, 0)), Outcome::err(Undefined));
/// ```
pub fn catch_wrap<K, V, E, Args, R, F>(
    kinds: Raises<K>,
    func: F,
) -> impl FnMut(Args) -> Outcome<V, E>
where
    K: FaultSet<E>,
    F: TupleApply<Args, Output = R> + Clone,
    R: IntoOutcome<V, E>,
{
    move |args| catch(kinds, || func.clone().apply(args))
}
