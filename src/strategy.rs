//! # Strategy
//!
//! The formatting behaviour of a [`Printer`] is a plain closure chosen at
//! construction. Any `Fn(&str) -> String` works, including the two named
//! strategies below.
//!
//! ```rust
//! use patterns_recipe::strategy::{upper_case_formatter, Printer};
//!
//! let printer = Printer::new(upper_case_formatter);
//! assert_eq!(printer.print_string("shout"), "SHOUT");
//!
//! let prefixed = Printer::new(|s: &str| format!("Prefix: {s}"));
//! assert_eq!(prefixed.print_string("x"), "Prefix: x");
//! ```

use tracing::info;

pub fn lower_case_formatter(s: &str) -> String {
    s.to_lowercase()
}

pub fn upper_case_formatter(s: &str) -> String {
    s.to_uppercase()
}

pub struct Printer<F>
where
    F: Fn(&str) -> String,
{
    string_formatter_strategy: F,
}

impl<F> Printer<F>
where
    F: Fn(&str) -> String,
{
    pub fn new(string_formatter_strategy: F) -> Self {
        Self {
            string_formatter_strategy,
        }
    }

    /// Format `string` with this printer's strategy and print it.
    pub fn print_string(&self, string: &str) -> String {
        let formatted = (self.string_formatter_strategy)(string);
        info!("{formatted}");
        formatted
    }
}
