//! Numeric traits used across the crate (fuzzy float comparing and the [Real] number trait).
mod fuzzy;
mod real;

pub use fuzzy::{FuzzyEq, FuzzyOrd};
pub use real::Real;
