//! The ground-truth vs. estimate correlation figure.
//!
//! A fixed 2×2 scatter grid:
//!
//! - top row: parallel dataset, bottom row: dispersed dataset
//! - left column: rows simulated at the static diffusivity (1.7e-9)
//! - right column: all rows, diffusivities mixed
//!
//! Each panel scatters ground truth (x) against the caller's estimate (y),
//! draws the identity reference line, and is annotated with its Pearson r
//! rounded to 3 decimals. Outer axes share the ranges [0.2, 0.8] (x) and
//! [0.2, 0.9] (y).
//!
//! The figure is data-driven: `compute_figure` assembles panels + statistics
//! without touching a backend, and `render_figure` only draws. This keeps the
//! statistics testable without parsing SVG output.
//!
//! Output is SVG so no system font stack is required for the annotations.

use std::path::Path;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::data::{camino, resource};
use crate::domain::{CaminoDispersed, CaminoParallel, CorrelationSummary};
use crate::error::AppError;
use crate::math::{masked, pearson};

/// Figure pixel size.
const FIGURE_SIZE: (u32, u32) = (960, 720);

/// Shared axis ranges for every panel.
const X_RANGE: (f64, f64) = (0.2, 0.8);
const Y_RANGE: (f64, f64) = (0.2, 0.9);

/// Where the `pearsonR=` annotation sits, in data coordinates.
const ANNOTATION_AT: (f64, f64) = (0.216, 0.817);

/// One scatter panel: ground truth (x) vs. estimate (y), plus its Pearson r.
#[derive(Debug, Clone)]
pub struct Panel {
    pub points: Vec<(f64, f64)>,
    pub r: f64,
}

/// The full figure: panels in row-major order
/// `[parallel static, parallel all, dispersed static, dispersed all]`.
#[derive(Debug, Clone)]
pub struct CorrelationFigure {
    pub panels: [Panel; 4],
    pub summary: CorrelationSummary,
}

/// Load the bundled datasets, build the figure, and render it to `out_path`.
///
/// `estim_parallel` / `estim_dispersed` must be aligned with the respective
/// dataset's row order and match its length.
pub fn visualize_fraction_correlation(
    estim_parallel: &[f64],
    estim_dispersed: &[f64],
    out_path: &Path,
) -> Result<CorrelationSummary, AppError> {
    let data_dir = resource::data_dir();
    let parallel = camino::load_parallel(&data_dir)?;
    let dispersed = camino::load_dispersed(&data_dir)?;

    let figure = compute_figure(&parallel, &dispersed, estim_parallel, estim_dispersed)?;
    render_figure(out_path, &figure)?;
    Ok(figure.summary)
}

/// Assemble panels and correlation statistics (no drawing).
pub fn compute_figure(
    parallel: &CaminoParallel,
    dispersed: &CaminoDispersed,
    estim_parallel: &[f64],
    estim_dispersed: &[f64],
) -> Result<CorrelationFigure, AppError> {
    check_alignment("parallel", parallel.len(), estim_parallel.len())?;
    check_alignment("dispersed", dispersed.len(), estim_dispersed.len())?;

    let mask_par = parallel.static_diffusivity_mask();
    let mask_disp = dispersed.static_diffusivity_mask();

    let truth_par_static = masked(&parallel.fractions, &mask_par);
    let estim_par_static = masked(estim_parallel, &mask_par);
    let truth_disp_static = masked(&dispersed.fractions, &mask_disp);
    let estim_disp_static = masked(estim_dispersed, &mask_disp);

    let parallel_static_r = pearson(&estim_par_static, &truth_par_static)?;
    let parallel_all_r = pearson(estim_parallel, &parallel.fractions)?;
    let dispersed_static_r = pearson(&estim_disp_static, &truth_disp_static)?;
    let dispersed_all_r = pearson(estim_dispersed, &dispersed.fractions)?;

    let summary = CorrelationSummary {
        parallel_static_r,
        parallel_all_r,
        dispersed_static_r,
        dispersed_all_r,
        n_parallel: parallel.len(),
        n_dispersed: dispersed.len(),
    };

    let panels = [
        Panel {
            points: scatter(&truth_par_static, &estim_par_static),
            r: parallel_static_r,
        },
        Panel {
            points: scatter(&parallel.fractions, estim_parallel),
            r: parallel_all_r,
        },
        Panel {
            points: scatter(&truth_disp_static, &estim_disp_static),
            r: dispersed_static_r,
        },
        Panel {
            points: scatter(&dispersed.fractions, estim_dispersed),
            r: dispersed_all_r,
        },
    ];

    Ok(CorrelationFigure { panels, summary })
}

/// Render a computed figure to an SVG file.
pub fn render_figure(out_path: &Path, figure: &CorrelationFigure) -> Result<(), AppError> {
    let root = SVGBackend::new(out_path, FIGURE_SIZE).into_drawing_area();

    draw_all(&root, figure).map_err(|e| {
        AppError::data(format!(
            "Failed to render figure '{}': {e}",
            out_path.display()
        ))
    })
}

/// Per-panel chrome: matplotlib's shared-axis layout labels only the outer
/// edges, and only the top row carries titles.
struct PanelChrome {
    title: Option<&'static str>,
    x_desc: Option<&'static str>,
    y_desc: Option<&'static str>,
}

const PANEL_CHROME: [PanelChrome; 4] = [
    PanelChrome {
        title: Some("Static Diffusivity"),
        x_desc: None,
        y_desc: Some("Estimated intra-vf"),
    },
    PanelChrome {
        title: Some("Varying Diffusivity"),
        x_desc: None,
        y_desc: None,
    },
    PanelChrome {
        title: None,
        x_desc: Some("Ground Truth"),
        y_desc: Some("Estimated intra-vf"),
    },
    PanelChrome {
        title: None,
        x_desc: Some("Ground Truth"),
        y_desc: None,
    },
];

fn draw_all<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &CorrelationFigure,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;
    let areas = root.split_evenly((2, 2));

    for ((area, panel), chrome) in areas.iter().zip(&figure.panels).zip(&PANEL_CHROME) {
        draw_panel(area, panel, chrome)?;
    }

    root.present()
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    chrome: &PanelChrome,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let mut builder = ChartBuilder::on(area);
    builder
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(45);
    if let Some(title) = chrome.title {
        builder.caption(title, ("sans-serif", 18));
    }
    let mut chart = builder.build_cartesian_2d(X_RANGE.0..X_RANGE.1, Y_RANGE.0..Y_RANGE.1)?;

    let mut mesh = chart.configure_mesh();
    mesh.disable_mesh().x_labels(7).y_labels(8);
    if let Some(desc) = chrome.x_desc {
        mesh.x_desc(desc);
    }
    if let Some(desc) = chrome.y_desc {
        mesh.y_desc(desc);
    }
    mesh.draw()?;

    // Identity reference: perfect estimation lands on this line.
    chart.draw_series(LineSeries::new(
        [(X_RANGE.0, X_RANGE.0), (X_RANGE.1, X_RANGE.1)],
        BLACK.stroke_width(2),
    ))?;

    chart.draw_series(
        panel
            .points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
    )?;

    chart.draw_series(std::iter::once(Text::new(
        format!("pearsonR= {:.3}", panel.r),
        ANNOTATION_AT,
        ("sans-serif", 14),
    )))?;

    Ok(())
}

fn check_alignment(which: &str, dataset_len: usize, estimate_len: usize) -> Result<(), AppError> {
    if dataset_len != estimate_len {
        return Err(AppError::input(format!(
            "Estimated fractions for the {which} dataset have {estimate_len} rows, \
             but the dataset has {dataset_len}",
        )));
    }
    Ok(())
}

fn scatter(truth: &[f64], estimate: &[f64]) -> Vec<(f64, f64)> {
    truth.iter().copied().zip(estimate.iter().copied()).collect()
}
