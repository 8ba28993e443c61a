//! Terminal output formatting
//!
//! Display utilities for line mode and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_accepted, print_check_result, print_rejection, print_round_header, print_used_words,
};
