//! Geometric primitives for region extraction
//!
//! This module provides the point and rotated-rectangle types used to
//! describe where in a source image the sampler reads from:
//! - `Point` - a 2D position in floating-point pixel coordinates
//! - `RotatedRect` - a rectangle with a rotation about its center
//!
//! # Coordinate system
//!
//! Pixel coordinates follow raster conventions: x grows to the right,
//! y grows downward, and integer coordinates address pixel origins.
//! Rotation angles are in radians; a positive angle turns the +x
//! direction toward +y.

/// A 2D point with floating-point coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

/// A rectangle with a rotation about its center, in pixel units
///
/// Width and height are the side lengths of the unrotated rectangle;
/// `rotation` is applied about the center when corners are computed.
///
/// # Examples
///
/// ```
/// use imgtensor_core::RotatedRect;
///
/// let rect = RotatedRect::new(64.0, 48.0, 32.0, 24.0);
/// let corners = rect.corners();
/// assert_eq!(corners[0].x, 48.0); // top-left
/// assert_eq!(corners[0].y, 36.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedRect {
    pub center_x: f32,
    pub center_y: f32,
    pub width: f32,
    pub height: f32,
    pub rotation: f32,
}

impl RotatedRect {
    /// Create an axis-aligned rectangle from its center and side lengths
    pub fn new(center_x: f32, center_y: f32, width: f32, height: f32) -> Self {
        RotatedRect {
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

    /// Compute the four corner points of the rotated rectangle
    ///
    /// Corners are returned in top-left, top-right, bottom-right,
    /// bottom-left order, where the names refer to the unrotated
    /// rectangle. Each corner offset `(dx, dy)` from the center is
    /// rotated as `(dx*cos - dy*sin, dx*sin + dy*cos)`.
    pub fn corners(&self) -> [Point; 4] {
        let (sin, cos) = self.rotation.sin_cos();
        let hw = 0.5 * self.width;
        let hh = 0.5 * self.height;

        let corner = |dx: f32, dy: f32| {
            Point::new(
                self.center_x + dx * cos - dy * sin,
                self.center_y + dx * sin + dy * cos,
            )
        };

        [
            corner(-hw, -hh),
            corner(hw, -hh),
            corner(hw, hh),
            corner(-hw, hh),
        ]
    }
}
