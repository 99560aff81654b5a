//! Resolution of the bundled `data/` directory.
//!
//! The datasets ship with the crate under `<manifest>/data`. For installed
//! or relocated deployments, `CAMINO_VIS_DATA` overrides the location; the
//! variable may come from the process environment or a `.env` file loaded at
//! startup.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the bundled data directory.
pub const DATA_DIR_ENV: &str = "CAMINO_VIS_DATA";

/// Resolve the data directory: `CAMINO_VIS_DATA` if set and non-empty,
/// otherwise the directory bundled with the crate sources.
pub fn data_dir() -> PathBuf {
    match env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => bundled_data_dir(),
    }
}

/// The `data/` directory bundled with the crate sources.
pub fn bundled_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dir_contains_the_camino_fraction_files() {
        let dir = bundled_data_dir();
        for name in [
            "fractions_camino_D1_7.txt",
            "fractions_camino_D2_0.txt",
            "fractions_camino_D2_3.txt",
        ] {
            assert!(dir.join(name).is_file(), "missing bundled file {name}");
        }
    }
}
