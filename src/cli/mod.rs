//! Command-line parsing.
//!
//! Argument parsing and command dispatch stay separate from the loaders and
//! figure code: this module only defines the surface, `app` drives it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "camino-vis",
    version,
    about = "Bundled Camino/HCP dataset loaders and the ground-truth correlation figure"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the 2x2 correlation figure from two estimated-fraction files.
    Figure(FigureArgs),
    /// Render the figure from seeded noisy copies of the ground truth.
    ///
    /// Useful for checking the figure pipeline without running a model fit.
    Demo(DemoArgs),
    /// Print summaries of the bundled datasets.
    Info(InfoArgs),
}

/// Options for `figure`.
#[derive(Debug, Parser, Clone)]
pub struct FigureArgs {
    /// Single-column text file of estimated fractions, aligned with the
    /// parallel dataset's row order.
    #[arg(long, value_name = "FILE")]
    pub parallel: PathBuf,

    /// Single-column text file of estimated fractions, aligned with the
    /// dispersed dataset's row order.
    #[arg(long, value_name = "FILE")]
    pub dispersed: PathBuf,

    /// Output SVG path.
    #[arg(long, default_value = "fraction_correlation.svg")]
    pub out: PathBuf,

    /// Export the correlation summary to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

/// Options for `demo`.
#[derive(Debug, Parser, Clone)]
pub struct DemoArgs {
    /// Standard deviation of the Gaussian noise added to the ground truth.
    #[arg(long, default_value_t = 0.05)]
    pub sigma: f64,

    /// Random seed for estimate generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Output SVG path.
    #[arg(long, default_value = "fraction_correlation.svg")]
    pub out: PathBuf,

    /// Export the correlation summary to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

/// Options for `info`.
#[derive(Debug, Parser, Clone)]
pub struct InfoArgs {
    /// Also load the HCP coronal slice and print its dimensions.
    #[arg(long)]
    pub slice: bool,
}
