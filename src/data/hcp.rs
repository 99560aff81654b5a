//! Wu-Minn HCP coronal slice loader.
//!
//! The bundled volume is a gzipped NIfTI-1 file holding one coronal slice of
//! a diffusion-weighted acquisition: `(x, 1, z, volumes)` with a singleton
//! coronal axis. The loader drops that axis and returns `(x, z, volumes)`.

use std::path::Path;

use ndarray::{Array3, Axis, Ix3};
use nifti::{IntoNdArray, NiftiObject, ReaderOptions};

use crate::error::AppError;

/// File name of the bundled coronal slice.
pub const CORONAL_SLICE_FILE: &str = "wu_minn_hcp_coronal_slice.nii.gz";

/// Load the coronal slice as a 3D `f32` array.
pub fn wu_minn_hcp_coronal_slice(data_dir: &Path) -> Result<Array3<f32>, AppError> {
    let path = data_dir.join(CORONAL_SLICE_FILE);
    let object = ReaderOptions::new()
        .read_file(&path)
        .map_err(|e| AppError::input(format!("Failed to read NIfTI '{}': {e}", path.display())))?;

    let volume = object
        .into_volume()
        .into_ndarray::<f32>()
        .map_err(|e| AppError::data(format!("Failed to decode NIfTI volume: {e}")))?;

    let volume = if volume.ndim() == 4 && volume.shape()[1] == 1 {
        volume.index_axis_move(Axis(1), 0)
    } else {
        volume
    };

    volume.into_dimensionality::<Ix3>().map_err(|_| {
        AppError::data(format!(
            "Expected a coronal-slice volume (3D after squeezing), '{}' is not",
            path.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::resource::bundled_data_dir;

    #[test]
    fn coronal_slice_loads_as_3d() {
        let slice = wu_minn_hcp_coronal_slice(&bundled_data_dir()).unwrap();
        let (nx, nz, nvol) = slice.dim();
        assert!(nx > 0 && nz > 0 && nvol > 0, "degenerate slice {nx}x{nz}x{nvol}");
        assert!(slice.iter().all(|v| v.is_finite()), "slice contains non-finite values");
    }

    #[test]
    fn missing_volume_is_an_input_error() {
        let err = wu_minn_hcp_coronal_slice(Path::new("/nonexistent")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
