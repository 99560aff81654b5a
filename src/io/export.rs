//! Export the correlation summary to JSON.
//!
//! The JSON file is the "portable" record of a figure run: the four Pearson
//! coefficients plus the row counts they were computed over. It is meant to
//! be easy to consume from notebooks or downstream scripts.

use std::fs::File;
use std::path::Path;

use crate::domain::CorrelationSummary;
use crate::error::AppError;

/// Write a correlation summary JSON file.
pub fn write_summary_json(path: &Path, summary: &CorrelationSummary) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::input(format!("Failed to create summary JSON '{}': {e}", path.display()))
    })?;

    serde_json::to_writer_pretty(file, summary)
        .map_err(|e| AppError::data(format!("Failed to write summary JSON: {e}")))?;

    Ok(())
}

/// Read a correlation summary JSON file.
pub fn read_summary_json(path: &Path) -> Result<CorrelationSummary, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::input(format!("Failed to open summary JSON '{}': {e}", path.display()))
    })?;
    let summary: CorrelationSummary = serde_json::from_reader(file)
        .map_err(|e| AppError::data(format!("Invalid summary JSON: {e}")))?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_json_round_trips() {
        let summary = CorrelationSummary {
            parallel_static_r: 0.981,
            parallel_all_r: 0.874,
            dispersed_static_r: 0.942,
            dispersed_all_r: 0.816,
            n_parallel: 120,
            n_dispersed: 120,
        };
        let path = std::env::temp_dir().join("camino-vis-summary.json");
        write_summary_json(&path, &summary).unwrap();
        let restored = read_summary_json(&path).unwrap();
        assert_eq!(restored.n_parallel, 120);
        assert!((restored.parallel_static_r - 0.981).abs() < 1e-12);
    }
}
