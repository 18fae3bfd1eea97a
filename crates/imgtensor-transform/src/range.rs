//! Linear value-range mapping
//!
//! Sampled pixel values leave the sampler in the byte range [0, 255],
//! carried as `f32`. A [`ValueTransform`] maps them linearly into the
//! caller's tensor range (for example [0, 1] or [-1, 1]) and can be
//! inverted to map tensor values back toward bytes for verification.
//!
//! The mapping is exactly linear: the low end of the source range lands
//! on the low end of the target range and likewise for the high end.

use imgtensor_core::Tensor;

use crate::error::{TransformError, TransformResult};

/// A linear value map `v -> v * scale + offset`
///
/// # Examples
///
/// ```
/// use imgtensor_transform::ValueTransform;
///
/// let map = ValueTransform::byte_range(0.0, 1.0).unwrap();
/// assert_eq!(map.apply(0.0), 0.0);
/// assert_eq!(map.apply(255.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueTransform {
    pub scale: f32,
    pub offset: f32,
}

impl ValueTransform {
    /// Build the map taking `[from_min, from_max]` onto `[to_min, to_max]`
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidRange` when either range is empty
    /// or reversed (`min >= max`); NaN bounds fail the same check.
    pub fn between(
        from_min: f32,
        from_max: f32,
        to_min: f32,
        to_max: f32,
    ) -> TransformResult<Self> {
        if !(from_min < from_max) {
            return Err(TransformError::InvalidRange {
                min: from_min,
                max: from_max,
            });
        }
        if !(to_min < to_max) {
            return Err(TransformError::InvalidRange {
                min: to_min,
                max: to_max,
            });
        }

        let scale = (to_max - to_min) / (from_max - from_min);
        Ok(ValueTransform {
            scale,
            offset: to_min - from_min * scale,
        })
    }

    /// Build the byte-range map `[0, 255] -> [to_min, to_max]`
    ///
    /// This is the map the extraction pipeline applies to sampled
    /// values: `scale = (to_max - to_min) / 255`, `offset = to_min`.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidRange` when `to_min >= to_max`.
    pub fn byte_range(to_min: f32, to_max: f32) -> TransformResult<Self> {
        Self::between(0.0, 255.0, to_min, to_max)
    }

    /// Apply the map to a single value
    #[inline]
    pub fn apply(&self, value: f32) -> f32 {
        value * self.scale + self.offset
    }

    /// The algebraic inverse map
    ///
    /// A transform built by [`ValueTransform::between`] always has a
    /// nonzero scale, so the inverse exists. For an inverse with exact
    /// endpoint behavior, build [`ValueTransform::between`] with the
    /// ranges swapped instead.
    pub fn inverted(&self) -> Self {
        ValueTransform {
            scale: 1.0 / self.scale,
            offset: -self.offset / self.scale,
        }
    }

    /// Apply the map to every value of a tensor
    pub fn apply_in_place(&self, tensor: &mut Tensor) {
        for value in tensor.data_mut() {
            *value = *value * self.scale + self.offset;
        }
    }
}
