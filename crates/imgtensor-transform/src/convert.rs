//! Region-to-tensor conversion
//!
//! The top-level pipeline: validate everything up front, resolve the
//! region, letterbox to the output aspect when requested, warp through
//! the affine fit, then map values into the caller's range. Nothing is
//! sampled (and no tensor exists) until validation has passed, so a
//! returned error never comes with partial results.

use imgtensor_core::{NormalizedRegion, RasterView, Tensor};

use crate::affine;
use crate::error::{TransformError, TransformResult};
use crate::range::ValueTransform;
use crate::region::{self, Letterbox};
use crate::sample::BorderMode;

/// Output description for a region extraction
///
/// # Examples
///
/// ```
/// use imgtensor_transform::{BorderMode, OutputSpec};
///
/// let spec = OutputSpec::new(256, 256)
///     .with_range(-1.0, 1.0)
///     .keep_aspect_ratio(true);
/// assert_eq!(spec.border, BorderMode::Zero);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputSpec {
    /// Output tensor width in elements
    pub tensor_width: u32,
    /// Output tensor height in elements
    pub tensor_height: u32,
    /// Grow the region to the tensor aspect ratio instead of stretching
    pub keep_aspect_ratio: bool,
    /// Low end of the output value range
    pub range_min: f32,
    /// High end of the output value range
    pub range_max: f32,
    /// How out-of-bounds source samples read
    pub border: BorderMode,
}

impl OutputSpec {
    /// Create a spec with the default range [0, 1], stretched aspect
    /// and zero border
    pub fn new(tensor_width: u32, tensor_height: u32) -> Self {
        OutputSpec {
            tensor_width,
            tensor_height,
            keep_aspect_ratio: false,
            range_min: 0.0,
            range_max: 1.0,
            border: BorderMode::Zero,
        }
    }

    /// Set the output value range
    pub fn with_range(mut self, range_min: f32, range_max: f32) -> Self {
        self.range_min = range_min;
        self.range_max = range_max;
        self
    }

    /// Set the aspect policy
    pub fn keep_aspect_ratio(mut self, keep: bool) -> Self {
        self.keep_aspect_ratio = keep;
        self
    }

    /// Set the border mode
    pub fn with_border(mut self, border: BorderMode) -> Self {
        self.border = border;
        self
    }
}

/// Extract a normalized region of a source image into a float tensor
///
/// See [`to_tensor_with_padding`] for the variant that also reports the
/// letterbox metadata.
///
/// # Errors
///
/// Returns `TransformError::InvalidOutputDimensions`,
/// `TransformError::InvalidRange`,
/// `TransformError::UnsupportedChannelCount` or
/// `TransformError::DegenerateRegion` when validation fails; all checks
/// run before any pixel is sampled.
///
/// # Examples
///
/// ```
/// use imgtensor_core::{NormalizedRegion, Raster};
/// use imgtensor_transform::{OutputSpec, to_tensor};
///
/// let raster = Raster::new_packed(64, 64, 3).unwrap();
/// let spec = OutputSpec::new(16, 16).with_range(0.0, 1.0);
/// let tensor = to_tensor(&raster.as_view(), &NormalizedRegion::full(), &spec).unwrap();
/// assert_eq!(tensor.dimensions(), (16, 16));
/// ```
pub fn to_tensor(
    src: &RasterView<'_>,
    region: &NormalizedRegion,
    spec: &OutputSpec,
) -> TransformResult<Tensor> {
    let (tensor, _) = to_tensor_with_padding(src, region, spec)?;
    Ok(tensor)
}

/// Extract a region into a tensor and report the letterbox padding
///
/// The letterbox is zero unless `keep_aspect_ratio` grew the region;
/// its fractions let callers map tensor coordinates (or model outputs)
/// back through the padding onto the original region.
///
/// # Errors
///
/// Same as [`to_tensor`].
pub fn to_tensor_with_padding(
    src: &RasterView<'_>,
    region: &NormalizedRegion,
    spec: &OutputSpec,
) -> TransformResult<(Tensor, Letterbox)> {
    if spec.tensor_width == 0 || spec.tensor_height == 0 {
        return Err(TransformError::InvalidOutputDimensions {
            width: spec.tensor_width,
            height: spec.tensor_height,
        });
    }
    let value_map = ValueTransform::byte_range(spec.range_min, spec.range_max)?;
    match src.channels() {
        3 | 4 => {}
        c => return Err(TransformError::UnsupportedChannelCount(c)),
    }

    let rect = region::resolve(region, src.width(), src.height())?;
    let (rect, letterbox) = if spec.keep_aspect_ratio {
        region::expand_to_aspect(&rect, spec.tensor_width, spec.tensor_height)?
    } else {
        (rect, Letterbox::default())
    };

    let mut tensor = affine::warp(
        src,
        rect.corners(),
        spec.tensor_width,
        spec.tensor_height,
        spec.border,
    )?;
    value_map.apply_in_place(&mut tensor);

    Ok((tensor, letterbox))
}
