//! Affine extraction of rotated regions
//!
//! This module maps the output grid onto a source-pixel quadrilateral
//! and samples it:
//! - Affine map construction from a destination rectangle onto four
//!   region corners
//! - Inverse-mapping warp producing a byte-range float tensor
//!
//! # Affine map
//!
//! The map takes destination pixel coordinates to source coordinates:
//! ```text
//! sx = a*x + b*y + tx
//! sy = c*x + d*y + ty
//! ```
//!
//! Destination pixels are addressed on the integer grid: pixel `(x, y)`
//! maps through the transform as the point `(x, y)`, with no half-pixel
//! center offset. The corner fit uses the rectangle bounds `(0, 0)` to
//! `(width, height)`.

use imgtensor_core::{Point, RasterView, Tensor};

use crate::error::{TransformError, TransformResult};
use crate::sample::{self, BorderMode};

/// 2D affine map from destination to source coordinates (6 coefficients)
///
/// Represents the transformation:
/// ```text
/// sx = coeffs[0]*x + coeffs[1]*y + coeffs[2]
/// sy = coeffs[3]*x + coeffs[4]*y + coeffs[5]
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AffineMap {
    /// Coefficients [a, b, tx, c, d, ty]
    coeffs: [f32; 6],
}

impl Default for AffineMap {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineMap {
    /// Create the identity map
    pub fn identity() -> Self {
        Self::from_coeffs([1.0, 0.0, 0.0, 0.0, 1.0, 0.0])
    }

    /// Create from raw coefficients
    pub fn from_coeffs(coeffs: [f32; 6]) -> Self {
        Self { coeffs }
    }

    /// Get the raw coefficients
    pub fn coeffs(&self) -> &[f32; 6] {
        &self.coeffs
    }

    /// Fit the map taking a `width x height` destination rectangle onto
    /// four source corners
    ///
    /// The corners are in top-left, top-right, bottom-right, bottom-left
    /// order, as produced by `RotatedRect::corners`. The fit is exact
    /// for the three corners TL, TR and BL; the fourth destination
    /// corner `(width, height)` lands on `TR + BL - TL`, which equals BR
    /// whenever the quad is a parallelogram.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidOutputDimensions` when width or
    /// height is 0.
    pub fn rect_to_quad(width: u32, height: u32, corners: [Point; 4]) -> TransformResult<Self> {
        if width == 0 || height == 0 {
            return Err(TransformError::InvalidOutputDimensions { width, height });
        }

        let [tl, tr, _br, bl] = corners;
        let w = width as f32;
        let h = height as f32;

        Ok(Self::from_coeffs([
            (tr.x - tl.x) / w,
            (bl.x - tl.x) / h,
            tl.x,
            (tr.y - tl.y) / w,
            (bl.y - tl.y) / h,
            tl.y,
        ]))
    }

    /// Transform a point through this map
    pub fn apply(&self, pt: Point) -> Point {
        let (x, y) = self.transform(pt.x, pt.y);
        Point::new(x, y)
    }

    /// Transform scalar coordinates through this map
    #[inline]
    pub fn transform(&self, x: f32, y: f32) -> (f32, f32) {
        let [a, b, tx, c, d, ty] = self.coeffs;
        (a * x + b * y + tx, c * x + d * y + ty)
    }

    /// Compute the inverse map
    ///
    /// # Errors
    ///
    /// Returns `TransformError::SingularMap` when the linear part is not
    /// invertible, e.g. for a quad collapsed onto a line.
    pub fn inverse(&self) -> TransformResult<Self> {
        let [a, b, tx, c, d, ty] = self.coeffs;
        let det = a * d - b * c;
        if det.abs() < f32::EPSILON {
            return Err(TransformError::SingularMap);
        }

        Ok(Self::from_coeffs([
            d / det,
            -b / det,
            (b * ty - d * tx) / det,
            -c / det,
            a / det,
            (c * tx - a * ty) / det,
        ]))
    }
}

/// Warp a source quad into a byte-range float tensor
///
/// Every destination pixel `(x, y)` of the `width x height` grid is
/// inverse-mapped through the quad fit and sampled bilinearly; the
/// result holds interleaved values in [0, 255] ready for range mapping.
/// Out-of-bounds samples follow `border`. Each output element is
/// written exactly once, and nothing is written before validation
/// passes.
///
/// # Errors
///
/// Returns `TransformError::InvalidOutputDimensions` for a zero output
/// size and `TransformError::UnsupportedChannelCount` unless the source
/// has 3 or 4 channels.
pub fn warp(
    src: &RasterView<'_>,
    corners: [Point; 4],
    width: u32,
    height: u32,
    border: BorderMode,
) -> TransformResult<Tensor> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidOutputDimensions { width, height });
    }
    match src.channels() {
        3 | 4 => {}
        c => return Err(TransformError::UnsupportedChannelCount(c)),
    }

    let map = AffineMap::rect_to_quad(width, height, corners)?;
    let mut tensor = Tensor::new(width, height)?;

    for y in 0..height {
        let row = tensor.row_mut(y);
        for x in 0..width {
            let (sx, sy) = map.transform(x as f32, y as f32);
            let rgb = sample::bilinear(src, sx, sy, border);
            let i = x as usize * Tensor::CHANNELS;
            row[i..i + Tensor::CHANNELS].copy_from_slice(&rgb);
        }
    }

    Ok(tensor)
}
