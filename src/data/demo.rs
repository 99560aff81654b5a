//! Demo estimate generation.
//!
//! `camino-vis demo` renders the correlation figure without an external
//! model run by perturbing the ground-truth fractions with seeded Gaussian
//! noise. Deterministic per seed so demo figures are reproducible.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::error::AppError;

/// Ground-truth fractions plus `N(0, sigma)` noise, clamped to `[0, 1]`.
pub fn noisy_estimates(fractions: &[f64], sigma: f64, seed: u64) -> Result<Vec<f64>, AppError> {
    if !(sigma.is_finite() && sigma >= 0.0) {
        return Err(AppError::input(format!("Noise sigma must be >= 0, got {sigma}")));
    }
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::data(format!("Noise distribution error: {e}")))?;
    let mut rng = StdRng::seed_from_u64(seed);

    Ok(fractions
        .iter()
        .map(|&f| (f + sigma * normal.sample(&mut rng)).clamp(0.0, 1.0))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::pearson;

    const TRUTH: [f64; 6] = [0.25, 0.33, 0.41, 0.55, 0.68, 0.77];

    #[test]
    fn same_seed_reproduces_the_same_estimates() {
        let a = noisy_estimates(&TRUTH, 0.05, 7).unwrap();
        let b = noisy_estimates(&TRUTH, 0.05, 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_sigma_returns_ground_truth() {
        let estimates = noisy_estimates(&TRUTH, 0.0, 1).unwrap();
        assert_eq!(estimates, TRUTH.to_vec());
        let r = pearson(&estimates, &TRUTH).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn estimates_stay_within_unit_interval() {
        let estimates = noisy_estimates(&TRUTH, 5.0, 3).unwrap();
        assert!(estimates.iter().all(|&e| (0.0..=1.0).contains(&e)));
    }

    #[test]
    fn negative_sigma_is_rejected() {
        let err = noisy_estimates(&TRUTH, -0.1, 1).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
