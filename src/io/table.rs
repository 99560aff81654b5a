//! Whitespace-delimited numeric text tables.
//!
//! Both the bundled Camino files and user-supplied estimate files are plain
//! text: one row per line, columns separated by whitespace. The reader is
//! strict so problems surface at load time with a path + line number:
//!
//! - blank lines and `#` comments are skipped
//! - every remaining line must parse as numbers
//! - every row must have the same number of columns
//! - an empty table is an error (a missing dataset should not load as `[]`)

use std::fs;
use std::path::Path;

use ndarray::Array2;

use crate::error::AppError;

/// Read a single-column file into a vector.
///
/// Errors if any row carries more than one value.
pub fn read_column(path: &Path) -> Result<Vec<f64>, AppError> {
    let table = read_matrix(path)?;
    if table.ncols() != 1 {
        return Err(AppError::data(format!(
            "Expected a single column in '{}', found {} columns",
            path.display(),
            table.ncols()
        )));
    }
    Ok(table.column(0).to_vec())
}

/// Read a rectangular table into a row-major matrix.
pub fn read_matrix(path: &Path) -> Result<Array2<f64>, AppError> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::input(format!("Failed to read '{}': {e}", path.display())))?;

    let mut values = Vec::new();
    let mut ncols = None;
    let mut nrows = 0usize;

    for (lineno, line) in text.lines().enumerate() {
        let row = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        if row.trim().is_empty() {
            continue;
        }

        let mut width = 0usize;
        for token in row.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| {
                AppError::data(format!(
                    "Malformed number '{token}' in '{}' (line {})",
                    path.display(),
                    lineno + 1
                ))
            })?;
            values.push(value);
            width += 1;
        }

        match ncols {
            None => ncols = Some(width),
            Some(expected) if expected != width => {
                return Err(AppError::data(format!(
                    "Ragged row in '{}' (line {}): expected {expected} columns, found {width}",
                    path.display(),
                    lineno + 1
                )));
            }
            Some(_) => {}
        }
        nrows += 1;
    }

    let ncols = ncols.ok_or_else(|| {
        AppError::data(format!("Empty table in '{}'", path.display()))
    })?;

    Array2::from_shape_vec((nrows, ncols), values)
        .map_err(|e| AppError::data(format!("Bad table shape in '{}': {e}", path.display())))
}
