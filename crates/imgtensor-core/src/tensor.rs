//! Float tensor output container
//!
//! `Tensor` is the engine's output type: a dense `height x width x 3`
//! grid of `f32` values in row-major order with interleaved channels and
//! no row padding. Element `(x, y, c)` lives at index
//! `(y * width + x) * 3 + c`.
//!
//! The channel count is fixed at three; four-channel sources are reduced
//! during sampling, before values reach the tensor.

use crate::error::{Error, Result};

/// A dense `height x width x 3` float32 tensor
///
/// # Examples
///
/// ```
/// use imgtensor_core::Tensor;
///
/// let mut tensor = Tensor::new(4, 2).unwrap();
/// tensor.set(3, 1, 0, 0.25).unwrap();
/// assert_eq!(tensor.get(3, 1, 0).unwrap(), 0.25);
/// assert_eq!(tensor.data().len(), 4 * 2 * 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl Tensor {
    /// Interleaved channels per tensor element
    pub const CHANNELS: usize = 3;

    /// Create a zero-filled tensor
    ///
    /// # Arguments
    ///
    /// * `width` - Width in elements (must be > 0)
    /// * `height` - Height in elements (must be > 0)
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = width as usize * height as usize * Self::CHANNELS;
        Ok(Tensor {
            width,
            height,
            data: vec![0.0; size],
        })
    }

    /// Create a tensor from raw data in row-major interleaved order
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` for zero dimensions and
    /// `Error::DataLengthMismatch` when the data length is not exactly
    /// `width * height * 3`.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = width as usize * height as usize * Self::CHANNELS;
        if data.len() != expected {
            return Err(Error::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Tensor {
            width,
            height,
            data,
        })
    }

    /// Get the width in elements
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in elements
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u32, y: u32, channel: usize) -> usize {
        (y as usize * self.width as usize + x as usize) * Self::CHANNELS + channel
    }

    /// Get the value at (x, y, channel)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if any coordinate is out of
    /// range.
    #[inline]
    pub fn get(&self, x: u32, y: u32, channel: usize) -> Result<f32> {
        if x >= self.width || y >= self.height || channel >= Self::CHANNELS {
            return Err(Error::IndexOutOfBounds {
                index: self.index(x, y, channel),
                len: self.data.len(),
            });
        }
        Ok(self.data[self.index(x, y, channel)])
    }

    /// Set the value at (x, y, channel)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if any coordinate is out of
    /// range.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, channel: usize, value: f32) -> Result<()> {
        if x >= self.width || y >= self.height || channel >= Self::CHANNELS {
            return Err(Error::IndexOutOfBounds {
                index: self.index(x, y, channel),
                len: self.data.len(),
            });
        }
        let idx = self.index(x, y, channel);
        self.data[idx] = value;
        Ok(())
    }

    /// Get the three channel values of the element at (x, y)
    ///
    /// Returns `None` when the coordinates are outside the tensor.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[f32]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y, 0);
        Some(&self.data[idx..idx + Self::CHANNELS])
    }

    /// Get a mutable slice of the element at (x, y)
    ///
    /// Returns `None` when the coordinates are outside the tensor.
    #[inline]
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut [f32]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y, 0);
        Some(&mut self.data[idx..idx + Self::CHANNELS])
    }

    /// Get row `y` as a slice of `width * 3` values
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[f32] {
        let start = y as usize * self.width as usize * Self::CHANNELS;
        &self.data[start..start + self.width as usize * Self::CHANNELS]
    }

    /// Get row `y` as a mutable slice of `width * 3` values
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [f32] {
        let start = y as usize * self.width as usize * Self::CHANNELS;
        let end = start + self.width as usize * Self::CHANNELS;
        &mut self.data[start..end]
    }

    /// Get the full backing buffer in row-major interleaved order
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get the full backing buffer mutably
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consume the tensor and return its backing buffer
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    /// Get the smallest value in the tensor
    pub fn min_value(&self) -> f32 {
        self.data.iter().fold(f32::INFINITY, |acc, &v| acc.min(v))
    }

    /// Get the largest value in the tensor
    pub fn max_value(&self) -> f32 {
        self.data
            .iter()
            .fold(f32::NEG_INFINITY, |acc, &v| acc.max(v))
    }
}
