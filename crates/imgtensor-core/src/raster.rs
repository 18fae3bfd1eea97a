//! Byte rasters with explicit row stride
//!
//! Source images enter the engine as interleaved 8-bit rasters:
//! - `Raster` - an owned pixel buffer, useful for building images in
//!   tests and for requantized output
//! - `RasterView` - a borrowed, read-only view over caller-owned memory
//!
//! # Pixel layout
//!
//! Rows are stored top to bottom. A row occupies `stride` bytes, of
//! which the first `width * channels` are pixel data; any remainder is
//! padding and never read. Within a pixel, channels are interleaved in
//! the caller's order (the engine never reorders channels). The
//! container accepts 1 to 4 channels; operations that need a specific
//! channel count check it at their own boundary.

use crate::error::{Error, Result};

/// Largest channel count the raster container accepts
pub const MAX_CHANNELS: u32 = 4;

fn check_layout(width: u32, height: u32, channels: u32, stride: usize, len: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    if channels == 0 || channels > MAX_CHANNELS {
        return Err(Error::InvalidChannelCount(channels));
    }

    let min_stride = width as usize * channels as usize;
    if stride < min_stride {
        return Err(Error::InvalidStride {
            stride,
            min: min_stride,
        });
    }

    // A stride * height product that overflows usize cannot be backed by
    // any real allocation, so report it as a too-small buffer.
    let required = stride
        .checked_mul(height as usize)
        .ok_or(Error::BufferTooSmall {
            required: usize::MAX,
            actual: len,
        })?;
    if len < required {
        return Err(Error::BufferTooSmall {
            required,
            actual: len,
        });
    }

    Ok(())
}

// ============================================================================
// RasterView
// ============================================================================

/// A borrowed, read-only view of an interleaved 8-bit raster
///
/// The view holds a reference to caller-owned memory; nothing is copied.
/// Constructors validate the layout so that accessors can rely on it.
///
/// # Examples
///
/// ```
/// use imgtensor_core::RasterView;
///
/// // A 2x2 RGB image with one padding byte per row.
/// let data = [
///     10, 10, 10, 20, 20, 20, 0, //
///     30, 30, 30, 40, 40, 40, 0,
/// ];
/// let view = RasterView::from_slice(2, 2, 3, 7, &data).unwrap();
/// assert_eq!(view.pixel(1, 1), Some(&[40u8, 40, 40][..]));
/// assert_eq!(view.pixel(2, 0), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RasterView<'a> {
    width: u32,
    height: u32,
    channels: u32,
    stride: usize,
    data: &'a [u8],
}

impl<'a> RasterView<'a> {
    /// Create a view over an existing pixel buffer
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels (must be > 0)
    /// * `height` - Height in pixels (must be > 0)
    /// * `channels` - Interleaved channels per pixel (1 to 4)
    /// * `stride` - Row stride in bytes (at least `width * channels`)
    /// * `data` - Pixel buffer (at least `stride * height` bytes)
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension`, `Error::InvalidChannelCount`,
    /// `Error::InvalidStride` or `Error::BufferTooSmall` when the layout
    /// is inconsistent.
    pub fn from_slice(
        width: u32,
        height: u32,
        channels: u32,
        stride: usize,
        data: &'a [u8],
    ) -> Result<Self> {
        check_layout(width, height, channels, stride, data.len())?;
        Ok(RasterView {
            width,
            height,
            channels,
            stride,
            data,
        })
    }

    /// Get the width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the number of interleaved channels per pixel
    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Get the row stride in bytes
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Get the underlying byte buffer
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Get the channel slice of the pixel at (x, y)
    ///
    /// Returns `None` when the coordinates are outside the raster.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<&'a [u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let c = self.channels as usize;
        let offset = y as usize * self.stride + x as usize * c;
        Some(&self.data[offset..offset + c])
    }
}

// ============================================================================
// Raster
// ============================================================================

/// An owned interleaved 8-bit raster with packed rows
///
/// Owned rasters are always packed (`stride == width * channels`);
/// strided layouts only occur on borrowed input, via [`RasterView`].
///
/// # Examples
///
/// ```
/// use imgtensor_core::Raster;
///
/// let mut raster = Raster::new_packed(4, 4, 3).unwrap();
/// raster.set_pixel(2, 1, &[255, 128, 0]).unwrap();
/// assert_eq!(raster.pixel(2, 1), Some(&[255u8, 128, 0][..]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    channels: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Create a zero-filled packed raster
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0, or
    /// `Error::InvalidChannelCount` for channel counts outside 1 to 4.
    pub fn new_packed(width: u32, height: u32, channels: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if channels == 0 || channels > MAX_CHANNELS {
            return Err(Error::InvalidChannelCount(channels));
        }

        let size = width as usize * height as usize * channels as usize;
        Ok(Raster {
            width,
            height,
            channels,
            data: vec![0; size],
        })
    }

    /// Create a packed raster from raw pixel data
    ///
    /// # Errors
    ///
    /// Returns `Error::DataLengthMismatch` when the buffer length is not
    /// exactly `width * height * channels`, and the same layout errors
    /// as [`Raster::new_packed`].
    pub fn from_vec(width: u32, height: u32, channels: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if channels == 0 || channels > MAX_CHANNELS {
            return Err(Error::InvalidChannelCount(channels));
        }

        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(Error::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Raster {
            width,
            height,
            channels,
            data,
        })
    }

    /// Get the width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the number of interleaved channels per pixel
    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Get the row stride in bytes (always `width * channels`)
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    /// Get the underlying byte buffer
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the raster and return its byte buffer
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Borrow the raster as a read-only view
    pub fn as_view(&self) -> RasterView<'_> {
        RasterView {
            width: self.width,
            height: self.height,
            channels: self.channels,
            stride: self.stride(),
            data: &self.data,
        }
    }

    /// Get the channel slice of the pixel at (x, y)
    ///
    /// Returns `None` when the coordinates are outside the raster.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let c = self.channels as usize;
        let offset = (y as usize * self.width as usize + x as usize) * c;
        Some(&self.data[offset..offset + c])
    }

    /// Set the pixel at (x, y) from a channel slice
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` for coordinates outside the
    /// raster and `Error::DataLengthMismatch` when the slice length does
    /// not equal the channel count.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: &[u8]) -> Result<()> {
        let c = self.channels as usize;
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize * self.width as usize + x as usize) * c,
                len: self.data.len(),
            });
        }
        if value.len() != c {
            return Err(Error::DataLengthMismatch {
                expected: c,
                actual: value.len(),
            });
        }

        let offset = (y as usize * self.width as usize + x as usize) * c;
        self.data[offset..offset + c].copy_from_slice(value);
        Ok(())
    }
}
