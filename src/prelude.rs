//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Type**: [`Outcome`]
//! - **Error kinds**: [`AccessError`], [`ConstructError`], [`EmptySequence`], [`GuardError`]
//! - **Traits**: [`IntoOutcome`], [`TupleApply`]
//! - **Free functions**: [`ensure`], [`is_outcome`], [`all`], [`any`], [`first_ok`],
//!   [`first_ok_wrap`], and (with `std`) [`catch`], [`catch_wrap`], [`raises`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn parse_positive(input: &str) -> Outcome<i32, String> {
//!     Outcome::from_result(input.parse::<i32>().map_err(|e| e.to_string()))
//!         .guard(|v| *v > 0)
//! }
//!
//! assert_eq!(parse_positive("3"), Outcome::ok(3));
//! assert!(parse_positive("-3").is_err());
//! ```

pub use crate::aggregate::{all, any, first_ok, first_ok_wrap, ValueVec};
pub use crate::error::{AccessError, ConstructError, EmptySequence, GuardError};
pub use crate::outcome::Outcome;
pub use crate::traits::{ensure, is_outcome, IntoOutcome, TupleApply};

#[cfg(feature = "std")]
pub use crate::catch::{catch, catch_wrap, raises, FaultSet, Raises};
