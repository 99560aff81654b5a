//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the unified synthetic dataset records (`CaminoParallel`, `CaminoDispersed`)
//! - the diffusivity constants the sub-datasets were simulated with
//! - the correlation summary exported/printed after rendering

pub mod types;

pub use types::*;
