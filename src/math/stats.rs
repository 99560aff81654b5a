//! Pearson correlation.
//!
//! Single-pass accumulation of centered cross- and auto-covariances. All
//! arithmetic is in `f64`; the sequences here are short (hundreds of rows),
//! so no compensated summation is needed.

use crate::error::AppError;

/// Pearson correlation coefficient between two equal-length sequences.
///
/// Errors on length mismatch, fewer than two observations, or zero variance
/// in either input (the coefficient is undefined there, and a constant
/// estimate column is a data problem we want surfaced, not smoothed to 0).
pub fn pearson(x: &[f64], y: &[f64]) -> Result<f64, AppError> {
    if x.len() != y.len() {
        return Err(AppError::data(format!(
            "Pearson inputs have mismatched lengths ({} vs {})",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(AppError::data(
            "Pearson correlation needs at least two observations",
        ));
    }

    let n = x.len() as f64;
    let mean_x: f64 = x.iter().sum::<f64>() / n;
    let mean_y: f64 = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;

    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x <= 0.0 || var_y <= 0.0 {
        return Err(AppError::data(
            "Pearson correlation is undefined for zero-variance input",
        ));
    }

    let r = cov / (var_x.sqrt() * var_y.sqrt());
    if !r.is_finite() {
        return Err(AppError::data("Pearson correlation is not finite"));
    }
    Ok(r)
}

/// Apply a row mask, keeping entries where the mask is `true`.
///
/// The figure's "static diffusivity" panels are the masked restriction of
/// the full sequences, so the helper lives next to the statistic it feeds.
pub fn masked(values: &[f64], mask: &[bool]) -> Vec<f64> {
    values
        .iter()
        .zip(mask)
        .filter_map(|(&v, &keep)| keep.then_some(v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_sequences_correlate_perfectly() {
        let x = [0.21, 0.35, 0.48, 0.62, 0.79];
        let r = pearson(&x, &x).unwrap();
        assert!((r - 1.0).abs() < 1e-12, "expected r == 1, got {r}");
    }

    #[test]
    fn reflected_sequences_correlate_negatively() {
        let x = [0.21, 0.35, 0.48, 0.62, 0.79];
        let y: Vec<f64> = x.iter().map(|v| 1.0 - v).collect();
        let r = pearson(&x, &y).unwrap();
        assert!((r + 1.0).abs() < 1e-12, "expected r == -1, got {r}");
    }

    #[test]
    fn linear_transform_preserves_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y: Vec<f64> = x.iter().map(|v| 0.5 * v + 0.1).collect();
        let r = pearson(&x, &y).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn constant_input_is_rejected() {
        let x = [0.5, 0.5, 0.5];
        let y = [0.1, 0.2, 0.3];
        let err = pearson(&x, &y).unwrap_err();
        assert!(err.to_string().contains("zero-variance"), "got: {err}");
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = pearson(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(err.to_string().contains("mismatched lengths"), "got: {err}");
    }

    #[test]
    fn masked_keeps_flagged_rows_in_order() {
        let values = [10.0, 20.0, 30.0, 40.0];
        let mask = [true, false, true, false];
        assert_eq!(masked(&values, &mask), vec![10.0, 30.0]);
    }
}
