//! Input/output helpers.
//!
//! - whitespace-delimited numeric text tables (`table`)
//! - correlation summary JSON export (`export`)

pub mod export;
pub mod table;

pub use export::*;
pub use table::*;
