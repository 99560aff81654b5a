//! Camino synthetic dataset loaders.
//!
//! The package bundles two families of Camino Monte-Carlo simulations, each
//! split into three sub-datasets by intra-axonal diffusivity:
//!
//! - **parallel**: straight parallel cylinders; per sub-dataset a
//!   single-column ground-truth fraction file plus a signal-attenuation table
//! - **dispersed**: Watson-dispersed cylinders; per sub-dataset a 3-column
//!   `[fraction, kappa, beta]` parameter table plus a signal table
//!
//! The loaders concatenate the sub-datasets in the fixed `DIFFUSIVITIES`
//! order (1.7e-9, 2.0e-9, 2.3e-9) and tag every row with its diffusivity,
//! so all sequences of a unified dataset stay aligned by row index.

use std::path::Path;

use ndarray::{Array2, Axis, concatenate};

use crate::domain::{CaminoDispersed, CaminoParallel, DIFFUSIVITIES};
use crate::error::AppError;
use crate::io::table::{read_column, read_matrix};

/// File-name suffixes of the three sub-datasets, in concatenation order.
const SUFFIXES: [&str; 3] = ["D1_7", "D2_0", "D2_3"];

/// Load the unified parallel-cylinder dataset from `data_dir`.
pub fn load_parallel(data_dir: &Path) -> Result<CaminoParallel, AppError> {
    let mut fractions = Vec::new();
    let mut diffusivities = Vec::new();
    let mut signals = Vec::new();

    for (suffix, &diffusivity) in SUFFIXES.iter().zip(DIFFUSIVITIES.iter()) {
        let sub_fractions = read_column(&data_dir.join(format!("fractions_camino_{suffix}.txt")))?;
        let sub_signal = read_matrix(&data_dir.join(format!("data_camino_{suffix}.txt")))?;
        check_row_counts(suffix, sub_fractions.len(), sub_signal.nrows())?;

        diffusivities.extend(std::iter::repeat(diffusivity).take(sub_fractions.len()));
        fractions.extend(sub_fractions);
        signals.push(sub_signal);
    }

    Ok(CaminoParallel {
        fractions,
        diffusivities,
        signal_attenuation: stack_signals(&signals)?,
    })
}

/// Load the unified dispersed dataset from `data_dir`.
pub fn load_dispersed(data_dir: &Path) -> Result<CaminoDispersed, AppError> {
    let mut fractions = Vec::new();
    let mut kappa = Vec::new();
    let mut beta = Vec::new();
    let mut diffusivities = Vec::new();
    let mut signals = Vec::new();

    for (suffix, &diffusivity) in SUFFIXES.iter().zip(DIFFUSIVITIES.iter()) {
        let params_path = data_dir.join(format!("parameters_camino_dispersed_{suffix}.txt"));
        let params = read_matrix(&params_path)?;
        if params.ncols() != 3 {
            return Err(AppError::data(format!(
                "Parameter table '{}' must have 3 columns [fraction, kappa, beta], found {}",
                params_path.display(),
                params.ncols()
            )));
        }

        let sub_signal = read_matrix(&data_dir.join(format!("data_camino_dispersed_{suffix}.txt")))?;
        check_row_counts(suffix, params.nrows(), sub_signal.nrows())?;

        diffusivities.extend(std::iter::repeat(diffusivity).take(params.nrows()));
        fractions.extend(params.column(0).iter().copied());
        kappa.extend(params.column(1).iter().copied());
        beta.extend(params.column(2).iter().copied());
        signals.push(sub_signal);
    }

    Ok(CaminoDispersed {
        fractions,
        diffusivities,
        signal_attenuation: stack_signals(&signals)?,
        kappa,
        beta,
    })
}

fn check_row_counts(suffix: &str, fraction_rows: usize, signal_rows: usize) -> Result<(), AppError> {
    if fraction_rows != signal_rows {
        return Err(AppError::data(format!(
            "Sub-dataset {suffix}: {fraction_rows} fraction rows but {signal_rows} signal rows",
        )));
    }
    Ok(())
}

/// Concatenate per-sub-dataset signal tables along rows.
///
/// Fails when the sub-datasets disagree on the number of measurements per
/// row, which would mean the bundled files are from different protocols.
fn stack_signals(signals: &[Array2<f64>]) -> Result<Array2<f64>, AppError> {
    let views: Vec<_> = signals.iter().map(|s| s.view()).collect();
    concatenate(Axis(0), &views).map_err(|e| {
        AppError::data(format!("Signal tables have mismatched column counts: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::resource::bundled_data_dir;
    use crate::domain::STATIC_DIFFUSIVITY;

    #[test]
    fn parallel_sequences_have_equal_lengths() {
        let data = load_parallel(&bundled_data_dir()).unwrap();
        assert!(!data.is_empty());
        assert_eq!(data.fractions.len(), data.diffusivities.len());
        assert_eq!(data.fractions.len(), data.signal_attenuation.nrows());
    }

    #[test]
    fn dispersed_sequences_have_equal_lengths() {
        let data = load_dispersed(&bundled_data_dir()).unwrap();
        assert!(!data.is_empty());
        assert_eq!(data.fractions.len(), data.diffusivities.len());
        assert_eq!(data.fractions.len(), data.signal_attenuation.nrows());
        assert_eq!(data.fractions.len(), data.kappa.len());
        assert_eq!(data.fractions.len(), data.beta.len());
    }

    #[test]
    fn parallel_rows_are_concatenated_in_diffusivity_order() {
        let dir = bundled_data_dir();
        let n1 = read_column(&dir.join("fractions_camino_D1_7.txt")).unwrap().len();
        let n2 = read_column(&dir.join("fractions_camino_D2_0.txt")).unwrap().len();
        let n3 = read_column(&dir.join("fractions_camino_D2_3.txt")).unwrap().len();

        let data = load_parallel(&dir).unwrap();
        assert_eq!(data.len(), n1 + n2 + n3);
        assert!(data.diffusivities[..n1].iter().all(|&d| d == 1.7e-9));
        assert!(data.diffusivities[n1..n1 + n2].iter().all(|&d| d == 2.0e-9));
        assert!(data.diffusivities[n1 + n2..].iter().all(|&d| d == 2.3e-9));
    }

    #[test]
    fn dispersed_rows_are_concatenated_in_diffusivity_order() {
        let dir = bundled_data_dir();
        let n1 = read_matrix(&dir.join("parameters_camino_dispersed_D1_7.txt")).unwrap().nrows();

        let data = load_dispersed(&dir).unwrap();
        assert!(data.diffusivities[..n1].iter().all(|&d| d == 1.7e-9));
        assert!(data.diffusivities[n1..].iter().all(|&d| d != 1.7e-9));
    }

    #[test]
    fn static_mask_selects_exactly_the_first_sub_dataset() {
        let dir = bundled_data_dir();
        let n1 = read_column(&dir.join("fractions_camino_D1_7.txt")).unwrap().len();

        let data = load_parallel(&dir).unwrap();
        let mask = data.static_diffusivity_mask();
        assert_eq!(mask.iter().filter(|&&m| m).count(), n1);
        assert!(mask[..n1].iter().all(|&m| m));
        assert!(mask[n1..].iter().all(|&m| !m));
    }

    #[test]
    fn fractions_are_valid_volume_fractions() {
        let data = load_parallel(&bundled_data_dir()).unwrap();
        assert!(
            data.fractions.iter().all(|&f| (0.0..=1.0).contains(&f)),
            "fractions must lie in [0, 1]"
        );
    }

    #[test]
    fn static_mask_matches_authored_labels_on_synthetic_rows() {
        // Hand-built dataset with known labels, independent of bundled files.
        let data = CaminoParallel {
            fractions: vec![0.3, 0.4, 0.5, 0.6],
            diffusivities: vec![STATIC_DIFFUSIVITY, STATIC_DIFFUSIVITY, 2.0e-9, 2.3e-9],
            signal_attenuation: Array2::zeros((4, 2)),
        };
        assert_eq!(data.static_diffusivity_mask(), vec![true, true, false, false]);
    }

    #[test]
    fn missing_data_directory_fails() {
        let err = load_parallel(Path::new("/nonexistent/camino-data")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
