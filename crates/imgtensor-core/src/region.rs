//! Normalized region descriptions
//!
//! A `NormalizedRegion` describes a region of interest relative to a
//! source image, independent of the image's pixel dimensions: center and
//! size are fractions of the image width/height, and the rotation is
//! carried in radians. Values may lie outside [0, 1]; regions reaching
//! past the image edges are resolved at sampling time, never clamped
//! here.

use crate::geom::RotatedRect;

/// A region of interest in normalized image coordinates
///
/// # Examples
///
/// ```
/// use imgtensor_core::NormalizedRegion;
///
/// // Lower-right quadrant, rotated by 0.3 radians.
/// let region = NormalizedRegion::new(0.75, 0.75, 0.5, 0.5).with_rotation(0.3);
/// assert_eq!(region.width, 0.5);
///
/// // The default region covers the whole image.
/// let full = NormalizedRegion::full();
/// assert_eq!(full, NormalizedRegion::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedRegion {
    /// Region center x as a fraction of the image width
    pub center_x: f32,
    /// Region center y as a fraction of the image height
    pub center_y: f32,
    /// Region width as a fraction of the image width
    pub width: f32,
    /// Region height as a fraction of the image height
    pub height: f32,
    /// Rotation in radians about the region center
    pub rotation: f32,
}

impl NormalizedRegion {
    /// Create an unrotated region from its normalized center and size
    pub fn new(center_x: f32, center_y: f32, width: f32, height: f32) -> Self {
        NormalizedRegion {
            center_x,
            center_y,
            width,
            height,
            rotation: 0.0,
        }
    }

    /// Set the rotation in radians
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// The whole-image region: centered, unit size, no rotation
    pub fn full() -> Self {
        NormalizedRegion::new(0.5, 0.5, 1.0, 1.0)
    }

    /// Scale the region into pixel units for a concrete image size
    ///
    /// Pure arithmetic: center and size are multiplied by the image
    /// dimensions and the rotation passes through unchanged. No
    /// validation or clamping happens here.
    pub fn to_rotated_rect(&self, image_width: u32, image_height: u32) -> RotatedRect {
        let w = image_width as f32;
        let h = image_height as f32;
        RotatedRect {
            center_x: self.center_x * w,
            center_y: self.center_y * h,
            width: self.width * w,
            height: self.height * h,
            rotation: self.rotation,
        }
    }
}

impl Default for NormalizedRegion {
    fn default() -> Self {
        NormalizedRegion::full()
    }
}
