//! A railway-style success/failure type with a rich combinator algebra.
//!
//! [`Outcome<V, E>`](Outcome) is either `Ok(value)` or `Err(error)`, and all
//! downstream computation is expressed as transformations over that wrapper
//! instead of raised-and-caught faults. Combinators chain on the success
//! track ([`then`](Outcome::then)), recover on the failure track
//! ([`err_then`](Outcome::err_then)), validate ([`guard`](Outcome::guard)),
//! and aggregate many outcomes into one ([`all`], [`any`], [`first_ok`]).
//! Faults stay faults unless explicitly whitelisted through
//! [`catch`](catch::catch).
//!
//! # Examples
//!
//! ## Chaining and guarding
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let rz: Outcome<i32, String> = Outcome::ok(40)
//!     .then(|v| Ok::<_, String>(v + 2))
//!     .guard(|v| *v > 0);
//! assert_eq!(rz, Outcome::ok(42));
//! assert_eq!(rz.get_or(0), 42);
//! ```
//!
//! ## Capturing declared faults
//!
//! ```
//! use outcome_rail::{catch, raises, Outcome};
//! use std::panic::panic_any;
//!
//! #[derive(Debug, PartialEq)]
//! struct MissingKey(&'static str);
//!
//! let rz: Outcome<i32, MissingKey> = catch(raises::<(MissingKey,)>(), || {
//!     let scores = [("math", 80), ("physics", 95)];
//!     match scores.iter().find(|(k, _)| *k == "bio") {
//!         Some((_, v)) => Ok::<_, MissingKey>(*v),
//!         None => panic_any(MissingKey("bio")),
//!     }
//! });
//! assert_eq!(rz, Outcome::err(MissingKey("bio")));
//! ```
//!
//! ## Aggregating layered lookups
//!
//! ```
//! use outcome_rail::{first_ok, Outcome};
//!
//! let cached: Outcome<i32, String> = Outcome::err("cache miss".to_string());
//! let hit = first_ok!(cached, Outcome::ok(42));
//! assert_eq!(hit, Some(Outcome::ok(42)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Multi-outcome aggregation: `all`, `any`, `first_ok`
pub mod aggregate;
/// Conversions to and from `Result` and `Option`
pub mod convert;
/// Error kinds for construction, access, guard, and aggregation failures
pub mod error;
/// Lazy variadic macro forms of the aggregators
pub mod macros;
/// The core `Outcome` type, its combinators, and iteration
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Normalization and tuple-spreading traits
pub mod traits;

/// Whitelisted fault capture (requires `std`)
#[cfg(feature = "std")]
pub mod catch;

pub use aggregate::{all, any, first_ok, first_ok_wrap, ValueVec};
pub use error::{AccessError, ConstructError, EmptySequence, GuardError};
pub use outcome::Outcome;
pub use traits::{ensure, is_outcome, IntoOutcome, TupleApply};

#[cfg(feature = "std")]
pub use catch::{catch, catch_wrap, raises, FaultSet, Raises};
