//! imgtensor-test - Regression test framework for the imgtensor crates
//!
//! This crate provides a golden-file regression test framework with
//! three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files (default)
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use imgtensor_test::RegParams;
//!
//! let mut rp = RegParams::new("totensor");
//! rp.compare_values(0.5, value as f64, 0.001);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use imgtensor_core::{Raster, Tensor};

/// Load a test image from the test data directory as a packed RGB raster
///
/// Alpha is stripped during loading; use [`load_test_image_rgba`] to keep
/// it.
///
/// # Arguments
///
/// * `name` - Image filename (e.g., "gradient.png")
///
/// # Returns
///
/// The loaded raster, or an error if loading fails.
pub fn load_test_image(name: &str) -> TestResult<Raster> {
    let path = test_data_path(name);
    let img = image::open(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })?;

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(Raster::from_vec(width, height, 3, rgb.into_raw())?)
}

/// Load a test image from the test data directory as a packed RGBA raster
pub fn load_test_image_rgba(name: &str) -> TestResult<Raster> {
    let path = test_data_path(name);
    let img = image::open(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Raster::from_vec(width, height, 4, rgba.into_raw())?)
}

/// Requantize a tensor to a byte raster for golden-file comparison
///
/// `scale` and `offset` describe the value mapping that produced the
/// tensor; this applies the inverse, then rounds and clamps each value
/// to the 0..=255 range.
///
/// # Arguments
///
/// * `tensor` - Tensor to requantize
/// * `scale` - Scale applied when the tensor was produced
/// * `offset` - Offset applied when the tensor was produced
pub fn tensor_to_raster(tensor: &Tensor, scale: f32, offset: f32) -> TestResult<Raster> {
    let data = tensor
        .data()
        .iter()
        .map(|&v| ((v - offset) / scale).round().clamp(0.0, 255.0) as u8)
        .collect();

    Ok(Raster::from_vec(tensor.width(), tensor.height(), 3, data)?)
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // imgtensor-test is at crates/imgtensor-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
