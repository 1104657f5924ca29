//! Command implementations

pub mod fairness;
pub mod scramble;
pub mod simple;

pub use fairness::{FairnessReport, run_fairness};
pub use scramble::scramble_once;
pub use simple::{enter_guess, run_simple};
