//! Mathematical utilities: correlation statistics.

pub mod stats;

pub use stats::*;
