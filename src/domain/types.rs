//! Shared domain types.
//!
//! The dataset records are deliberately plain: equal-length sequences with
//! named fields, assembled once by the loaders and consumed read-only by the
//! figure pipeline.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Intra-axonal diffusivity of the first (static) sub-dataset, in m²/s.
///
/// The figure's left column restricts both datasets to rows simulated with
/// this value.
pub const STATIC_DIFFUSIVITY: f64 = 1.7e-9;

/// Diffusivities of the three sub-datasets, in concatenation order.
///
/// Rows within one sub-dataset all share one of these exact constants, so
/// `==` masking on the unified `diffusivities` sequence is reliable.
pub const DIFFUSIVITIES: [f64; 3] = [STATIC_DIFFUSIVITY, 2.0e-9, 2.3e-9];

/// Unified parallel-cylinder synthetic dataset.
///
/// Formed by concatenating the three per-diffusivity sub-datasets in
/// `DIFFUSIVITIES` order, so fraction, diffusivity, and signal rows stay
/// aligned by index.
#[derive(Debug, Clone)]
pub struct CaminoParallel {
    /// Ground-truth intra-compartment volume fraction per row.
    pub fractions: Vec<f64>,
    /// Simulation diffusivity per row (constant within a sub-dataset).
    pub diffusivities: Vec<f64>,
    /// Signal attenuation per row, one measurement per column.
    pub signal_attenuation: Array2<f64>,
}

/// Unified dispersed (Watson-distributed) synthetic dataset.
///
/// Same layout as `CaminoParallel` plus the per-row dispersion parameters
/// from the 3-column `[fraction, kappa, beta]` tables.
#[derive(Debug, Clone)]
pub struct CaminoDispersed {
    pub fractions: Vec<f64>,
    pub diffusivities: Vec<f64>,
    pub signal_attenuation: Array2<f64>,
    /// Watson concentration parameter per row.
    pub kappa: Vec<f64>,
    /// Watson secondary dispersion parameter per row.
    pub beta: Vec<f64>,
}

impl CaminoParallel {
    /// Number of rows in the unified dataset.
    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    /// Mask selecting rows simulated at `STATIC_DIFFUSIVITY`.
    pub fn static_diffusivity_mask(&self) -> Vec<bool> {
        static_mask(&self.diffusivities)
    }
}

impl CaminoDispersed {
    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    /// Mask selecting rows simulated at `STATIC_DIFFUSIVITY`.
    pub fn static_diffusivity_mask(&self) -> Vec<bool> {
        static_mask(&self.diffusivities)
    }
}

fn static_mask(diffusivities: &[f64]) -> Vec<bool> {
    diffusivities.iter().map(|&d| d == STATIC_DIFFUSIVITY).collect()
}

/// The four Pearson coefficients behind the 2×2 figure, plus row counts.
///
/// `*_static` restricts to the `STATIC_DIFFUSIVITY` rows; `*_all` uses every
/// row of the respective dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationSummary {
    pub parallel_static_r: f64,
    pub parallel_all_r: f64,
    pub dispersed_static_r: f64,
    pub dispersed_all_r: f64,
    pub n_parallel: usize,
    pub n_dispersed: usize,
}
