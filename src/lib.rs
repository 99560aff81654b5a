//! `camino-vis` library crate.
//!
//! Loads the diffusion-MRI datasets bundled with the package (a Wu-Minn HCP
//! coronal slice and Camino-simulated synthetic signals) and renders a fixed
//! correlation figure comparing estimated intra-compartment volume fractions
//! against the simulated ground truth.
//!
//! The binary (`camino-vis`) is a thin wrapper around this library so that:
//!
//! - loaders and the figure pipeline are testable without spawning processes
//! - modules are reusable from other analysis code

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod plot;
