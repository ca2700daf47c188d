//! Core traits for outcome normalization and argument spreading.

pub mod apply;
pub mod into_outcome;

pub use apply::TupleApply;
pub use into_outcome::{ensure, is_outcome, IntoOutcome};
