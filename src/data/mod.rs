//! Bundled dataset access.
//!
//! - data directory resolution (`resource`)
//! - Camino synthetic dataset loaders (`camino`)
//! - Wu-Minn HCP coronal slice loader (`hcp`)
//! - demo estimate generation (`demo`)

pub mod camino;
pub mod demo;
pub mod hcp;
pub mod resource;

pub use camino::*;
pub use demo::*;
pub use hcp::*;
pub use resource::*;
