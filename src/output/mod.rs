//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_fairness_report, print_goodbye, print_round, print_scramble,
    print_submission,
};
