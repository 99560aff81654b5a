//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` configuration (data directory override)
//! - parses CLI arguments
//! - runs the requested loader/figure pipeline
//! - prints the correlation report and writes optional exports

use clap::Parser;

use crate::cli::{Cli, Command, DemoArgs, FigureArgs, InfoArgs};
use crate::data::{camino, demo, hcp, resource};
use crate::domain::{CorrelationSummary, DIFFUSIVITIES};
use crate::error::AppError;
use crate::io::{export, table};
use crate::plot;

/// Entry point for the `camino-vis` binary.
pub fn run() -> Result<(), AppError> {
    // `.env` may set CAMINO_VIS_DATA; ignore a missing file.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Command::Figure(args) => handle_figure(args),
        Command::Demo(args) => handle_demo(args),
        Command::Info(args) => handle_info(args),
    }
}

fn handle_figure(args: FigureArgs) -> Result<(), AppError> {
    let estim_parallel = table::read_column(&args.parallel)?;
    let estim_dispersed = table::read_column(&args.dispersed)?;

    let summary =
        plot::visualize_fraction_correlation(&estim_parallel, &estim_dispersed, &args.out)?;

    print_summary(&summary);
    println!("Figure written to {}", args.out.display());

    if let Some(path) = &args.export {
        export::write_summary_json(path, &summary)?;
        println!("Summary written to {}", path.display());
    }
    Ok(())
}

fn handle_demo(args: DemoArgs) -> Result<(), AppError> {
    let data_dir = resource::data_dir();
    let parallel = camino::load_parallel(&data_dir)?;
    let dispersed = camino::load_dispersed(&data_dir)?;

    // Independent seeds per dataset so the two noise draws don't correlate.
    let estim_parallel = demo::noisy_estimates(&parallel.fractions, args.sigma, args.seed)?;
    let estim_dispersed =
        demo::noisy_estimates(&dispersed.fractions, args.sigma, args.seed.wrapping_add(1))?;

    let figure = plot::compute_figure(&parallel, &dispersed, &estim_parallel, &estim_dispersed)?;
    plot::render_figure(&args.out, &figure)?;

    println!("Demo estimates: sigma {}, seed {}", args.sigma, args.seed);
    print_summary(&figure.summary);
    println!("Figure written to {}", args.out.display());

    if let Some(path) = &args.export {
        export::write_summary_json(path, &figure.summary)?;
        println!("Summary written to {}", path.display());
    }
    Ok(())
}

fn handle_info(args: InfoArgs) -> Result<(), AppError> {
    let data_dir = resource::data_dir();
    println!("Data directory: {}", data_dir.display());

    let parallel = camino::load_parallel(&data_dir)?;
    println!("Parallel dataset: {} rows", parallel.len());
    print_group_counts(&parallel.diffusivities);
    print_range("fractions", &parallel.fractions);
    println!(
        "  signal measurements per row: {}",
        parallel.signal_attenuation.ncols()
    );

    let dispersed = camino::load_dispersed(&data_dir)?;
    println!("Dispersed dataset: {} rows", dispersed.len());
    print_group_counts(&dispersed.diffusivities);
    print_range("fractions", &dispersed.fractions);
    print_range("kappa", &dispersed.kappa);
    print_range("beta", &dispersed.beta);

    if args.slice {
        let slice = hcp::wu_minn_hcp_coronal_slice(&data_dir)?;
        let (nx, nz, nvol) = slice.dim();
        println!("HCP coronal slice: {nx} x {nz} voxels, {nvol} volumes");
    }
    Ok(())
}

fn print_summary(summary: &CorrelationSummary) {
    println!("Pearson correlation, ground truth vs. estimate:");
    println!(
        "  parallel   static diffusivity : {:.3}",
        summary.parallel_static_r
    );
    println!(
        "  parallel   all diffusivities  : {:.3}",
        summary.parallel_all_r
    );
    println!(
        "  dispersed  static diffusivity : {:.3}",
        summary.dispersed_static_r
    );
    println!(
        "  dispersed  all diffusivities  : {:.3}",
        summary.dispersed_all_r
    );
}

fn print_group_counts(diffusivities: &[f64]) {
    for d in DIFFUSIVITIES {
        let n = diffusivities.iter().filter(|&&v| v == d).count();
        println!("  diffusivity {d:.1e}: {n} rows");
    }
}

fn print_range(label: &str, values: &[f64]) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    println!("  {label}: [{min:.3}, {max:.3}]");
}
