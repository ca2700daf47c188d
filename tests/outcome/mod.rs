pub mod chain;
pub mod guard;
