//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use imgtensor_core::{Raster, Tensor};
use std::fs;
use std::path::Path;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Generate golden files
    Generate,
    /// Compare with golden files (default)
    #[default]
    Compare,
    /// Display mode - run without comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from environment variable or string
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "totensor")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    /// Test mode (generate, compare, or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "totensor")
    ///
    /// # Returns
    ///
    /// A new `RegParams` instance configured based on the `REGTEST_MODE`
    /// environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        // Ensure directories exist
        let _ = fs::create_dir_all(golden_dir());
        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value (typically from golden/reference)
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Compare two tensors element-wise
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected tensor (typically from a reference path)
    /// * `actual` - Actual computed tensor
    /// * `delta` - Maximum allowed per-element difference
    ///
    /// # Returns
    ///
    /// `true` if the tensors have the same shape and every element
    /// matches within delta, `false` otherwise.
    pub fn compare_tensors(&mut self, expected: &Tensor, actual: &Tensor, delta: f32) -> bool {
        self.index += 1;

        if expected.dimensions() != actual.dimensions() {
            let msg = format!(
                "Failure in {}_reg: tensor comparison for index {} - dimension mismatch \
                 {:?} vs {:?}",
                self.test_name,
                self.index,
                expected.dimensions(),
                actual.dimensions()
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            return false;
        }

        let mut max_diff = 0.0_f32;
        let mut worst = 0_usize;
        for (i, (e, a)) in expected.data().iter().zip(actual.data().iter()).enumerate() {
            let diff = (e - a).abs();
            if diff > max_diff {
                max_diff = diff;
                worst = i;
            }
        }

        if max_diff > delta {
            let msg = format!(
                "Failure in {}_reg: tensor comparison for index {}\n\
                 max difference = {} at element {} but allowed delta = {}",
                self.test_name, self.index, max_diff, worst, delta
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Compare two rasters byte-wise
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected raster
    /// * `actual` - Actual computed raster
    /// * `max_diff` - Maximum allowed per-byte difference
    ///
    /// # Returns
    ///
    /// `true` if the rasters have the same shape and every byte matches
    /// within `max_diff`, `false` otherwise.
    pub fn compare_rasters(&mut self, expected: &Raster, actual: &Raster, max_diff: u8) -> bool {
        self.index += 1;

        if expected.dimensions() != actual.dimensions()
            || expected.channels() != actual.channels()
        {
            let msg = format!(
                "Failure in {}_reg: raster comparison for index {} - dimension mismatch",
                self.test_name, self.index
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            return false;
        }

        let mut worst = 0_u8;
        let mut worst_index = 0_usize;
        for (i, (e, a)) in expected.data().iter().zip(actual.data().iter()).enumerate() {
            let diff = e.abs_diff(*a);
            if diff > worst {
                worst = diff;
                worst_index = i;
            }
        }

        if worst > max_diff {
            let msg = format!(
                "Failure in {}_reg: raster comparison for index {}\n\
                 max difference = {} at byte {} but allowed = {}",
                self.test_name, self.index, worst, worst_index, max_diff
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Write a raster to a PNG file and check against the golden file
    ///
    /// # Arguments
    ///
    /// * `raster` - Raster to write
    ///
    /// # Returns
    ///
    /// `Ok(())` if successful, error otherwise.
    pub fn write_raster_and_check(&mut self, raster: &Raster) -> TestResult<()> {
        self.index += 1;

        let local_path = format!("{}/{}.{:02}.png", regout_dir(), self.test_name, self.index);

        let color = match raster.channels() {
            1 => image::ExtendedColorType::L8,
            2 => image::ExtendedColorType::La8,
            3 => image::ExtendedColorType::Rgb8,
            _ => image::ExtendedColorType::Rgba8,
        };
        image::save_buffer(
            &local_path,
            raster.data(),
            raster.width(),
            raster.height(),
            color,
        )
        .map_err(|e| TestError::ImageWrite {
            path: local_path.clone(),
            message: e.to_string(),
        })?;

        // Check based on mode
        self.check_file(&local_path)
    }

    /// Check a file against its golden counterpart
    ///
    /// In generate mode, copies the file to golden.
    /// In compare mode, compares with golden file.
    /// In display mode, does nothing.
    fn check_file(&mut self, local_path: &str) -> TestResult<()> {
        let ext = Path::new(local_path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        let golden_path = format!(
            "{}/{}_golden.{:02}.{}",
            golden_dir(),
            self.test_name,
            self.index,
            ext
        );

        match self.mode {
            RegTestMode::Generate => {
                // Copy local to golden
                fs::copy(local_path, &golden_path)?;
                eprintln!("Generated: {}", golden_path);
            }
            RegTestMode::Compare => {
                // Compare files
                if !Path::new(&golden_path).exists() {
                    let msg = format!(
                        "Failure in {}_reg: golden file not found: {}",
                        self.test_name, golden_path
                    );
                    eprintln!("{}", msg);
                    self.failures.push(msg);
                    self.success = false;
                    return Ok(());
                }

                let local_data = fs::read(local_path)?;
                let golden_data = fs::read(&golden_path)?;

                if local_data != golden_data {
                    // For images, try pixel-by-pixel comparison
                    let same = self.compare_image_files(local_path, &golden_path);

                    if !same {
                        let msg = format!(
                            "Failure in {}_reg, index {}: comparing {} with {}",
                            self.test_name, self.index, local_path, golden_path
                        );
                        eprintln!("{}", msg);
                        self.failures.push(msg);
                        self.success = false;
                    }
                }
            }
            RegTestMode::Display => {
                // Nothing to do in display mode
            }
        }

        Ok(())
    }

    /// Compare two image files pixel-by-pixel
    fn compare_image_files(&self, path1: &str, path2: &str) -> bool {
        let img1 = match image::open(path1) {
            Ok(i) => i,
            Err(_) => return false,
        };
        let img2 = match image::open(path2) {
            Ok(i) => i,
            Err(_) => return false,
        };

        let rgba1 = img1.to_rgba8();
        let rgba2 = img2.to_rgba8();

        rgba1.dimensions() == rgba2.dimensions() && rgba1.as_raw() == rgba2.as_raw()
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
