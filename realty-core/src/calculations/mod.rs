//! Property financing calculations.
//!
//! The formula engine applies a flat-rate interest model: total interest is
//! net value × rate × years, with no compounding or amortization.

pub mod common;
pub mod formula;

pub use formula::{compute, try_compute};
