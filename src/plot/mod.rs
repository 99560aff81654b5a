//! Figure rendering.

pub mod figure;

pub use figure::*;
