pub mod macros;
pub mod outcome;
