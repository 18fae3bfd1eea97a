//! Region resolution and aspect-ratio letterboxing
//!
//! Normalized regions are resolved into source-pixel rectangles here,
//! and optionally grown to match the output tensor's aspect ratio:
//! - `resolve` - scale a normalized region by the image dimensions
//! - `expand_to_aspect` - center-preserving, increase-only growth of
//!   one side until the rectangle matches the output aspect
//! - `Letterbox` - the padding metadata produced by the growth
//!
//! Regions are never clamped to the image; out-of-bounds area becomes
//! border-valued output at sampling time.

use imgtensor_core::{NormalizedRegion, RotatedRect};

use crate::error::{TransformError, TransformResult};

/// Normalized letterbox padding fractions of the output extent
///
/// When a region grows to match the output aspect ratio, the grown area
/// renders as padding bands. Each field is the fraction of the output
/// width (left/right) or height (top/bottom) the band covers; all zero
/// when nothing grew. Callers undo the letterbox when projecting model
/// results back onto the source image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Letterbox {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// Resolve a normalized region against concrete image dimensions
///
/// # Errors
///
/// Returns `TransformError::DegenerateRegion` when the region width or
/// height is not strictly positive (NaN included).
pub fn resolve(
    region: &NormalizedRegion,
    image_width: u32,
    image_height: u32,
) -> TransformResult<RotatedRect> {
    if !(region.width > 0.0) || !(region.height > 0.0) {
        return Err(TransformError::DegenerateRegion {
            width: region.width,
            height: region.height,
        });
    }
    Ok(region.to_rotated_rect(image_width, image_height))
}

/// Grow a rectangle about its center until it matches the output aspect
///
/// Exactly one side grows (the rectangle never shrinks); the center and
/// the rotation are untouched, and a rectangle already at the target
/// aspect comes back unchanged. The returned [`Letterbox`] records the
/// normalized padding the growth produces in the output.
///
/// # Errors
///
/// Returns `TransformError::InvalidOutputDimensions` for zero tensor
/// dimensions and `TransformError::DegenerateRegion` for non-positive
/// rectangle sides.
pub fn expand_to_aspect(
    rect: &RotatedRect,
    tensor_width: u32,
    tensor_height: u32,
) -> TransformResult<(RotatedRect, Letterbox)> {
    if tensor_width == 0 || tensor_height == 0 {
        return Err(TransformError::InvalidOutputDimensions {
            width: tensor_width,
            height: tensor_height,
        });
    }
    if !(rect.width > 0.0) || !(rect.height > 0.0) {
        return Err(TransformError::DegenerateRegion {
            width: rect.width,
            height: rect.height,
        });
    }

    let target_aspect = tensor_height as f32 / tensor_width as f32;
    let rect_aspect = rect.height / rect.width;

    let mut out = *rect;
    let mut letterbox = Letterbox::default();

    if target_aspect > rect_aspect {
        // Output is taller than the region: grow height. The max keeps
        // the increase-only contract intact under rounding.
        out.height = (rect.width * target_aspect).max(rect.height);
        let pad = 0.5 * (1.0 - rect_aspect / target_aspect);
        letterbox.top = pad;
        letterbox.bottom = pad;
    } else if target_aspect < rect_aspect {
        // Output is wider than the region: grow width.
        out.width = (rect.height / target_aspect).max(rect.width);
        let pad = 0.5 * (1.0 - target_aspect / rect_aspect);
        letterbox.left = pad;
        letterbox.right = pad;
    }

    Ok((out, letterbox))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    #[test]
    fn test_resolve_scales_by_image() {
        let region = NormalizedRegion::new(0.65, 0.4, 0.5, 0.5).with_rotation(0.25);
        let rect = resolve(&region, 256, 256).unwrap();

        assert_eq!(rect.center_x, 166.4);
        assert_eq!(rect.center_y, 102.4);
        assert_eq!(rect.width, 128.0);
        assert_eq!(rect.height, 128.0);
        assert_eq!(rect.rotation, 0.25);
    }

    #[test]
    fn test_resolve_rejects_degenerate() {
        for (w, h) in [(0.0, 0.5), (0.5, 0.0), (-0.1, 0.5), (f32::NAN, 0.5)] {
            let region = NormalizedRegion::new(0.5, 0.5, w, h);
            assert!(
                matches!(
                    resolve(&region, 64, 64),
                    Err(TransformError::DegenerateRegion { .. })
                ),
                "{w}x{h} should be degenerate"
            );
        }
    }

    #[test]
    fn test_expand_grows_height() {
        let rect = RotatedRect::new(50.0, 50.0, 100.0, 50.0).with_rotation(0.5);
        let (out, letterbox) = expand_to_aspect(&rect, 64, 64).unwrap();

        assert_eq!(out.center_x, 50.0);
        assert_eq!(out.center_y, 50.0);
        assert_eq!(out.width, 100.0);
        assert_eq!(out.height, 100.0);
        assert_eq!(out.rotation, 0.5);

        assert_eq!(letterbox.left, 0.0);
        assert_eq!(letterbox.right, 0.0);
        assert_eq!(letterbox.top, 0.25);
        assert_eq!(letterbox.bottom, 0.25);
    }

    #[test]
    fn test_expand_grows_width() {
        let rect = RotatedRect::new(10.0, 90.0, 40.0, 120.0);
        let (out, letterbox) = expand_to_aspect(&rect, 100, 100).unwrap();

        assert_eq!(out.width, 120.0);
        assert_eq!(out.height, 120.0);
        // Pad is (1 - (1/3)) / 2 on each vertical edge.
        assert!((letterbox.left - 1.0 / 3.0).abs() < 1e-6);
        assert!((letterbox.right - 1.0 / 3.0).abs() < 1e-6);
        assert_eq!(letterbox.top, 0.0);
        assert_eq!(letterbox.bottom, 0.0);
    }

    #[test]
    fn test_expand_matching_aspect_unchanged() {
        let rect = RotatedRect::new(33.0, 44.0, 80.0, 40.0);
        let (out, letterbox) = expand_to_aspect(&rect, 128, 64).unwrap();

        assert_eq!(out, rect);
        assert_eq!(letterbox, Letterbox::default());
    }

    #[test]
    fn test_expand_validation() {
        let rect = RotatedRect::new(0.0, 0.0, 10.0, 10.0);
        assert!(matches!(
            expand_to_aspect(&rect, 0, 64),
            Err(TransformError::InvalidOutputDimensions { .. })
        ));

        let flat = RotatedRect::new(0.0, 0.0, 10.0, 0.0);
        assert!(matches!(
            expand_to_aspect(&flat, 64, 64),
            Err(TransformError::DegenerateRegion { .. })
        ));
    }

    #[test]
    fn test_expand_properties_randomized() {
        let mut rng = StdRng::seed_from_u64(0x1eaf);

        for _ in 0..200 {
            let rect = RotatedRect::new(
                rng.random_range(-50.0..150.0),
                rng.random_range(-50.0..150.0),
                rng.random_range(0.5..300.0),
                rng.random_range(0.5..300.0),
            )
            .with_rotation(rng.random_range(-3.2..3.2));
            let tw = rng.random_range(1..512);
            let th = rng.random_range(1..512);

            let (out, letterbox) = expand_to_aspect(&rect, tw, th).unwrap();

            // Center, rotation and the increase-only contract.
            assert_eq!(out.center_x, rect.center_x);
            assert_eq!(out.center_y, rect.center_y);
            assert_eq!(out.rotation, rect.rotation);
            assert!(out.width >= rect.width);
            assert!(out.height >= rect.height);
            assert!(out.width == rect.width || out.height == rect.height);

            // The result matches the target aspect.
            let target = th as f32 / tw as f32;
            let got = out.height / out.width;
            assert!(
                (got - target).abs() <= 1e-3 * target,
                "aspect {got} vs target {target}"
            );

            // Letterbox only on the grown axis, symmetric, below one half.
            assert_eq!(letterbox.left, letterbox.right);
            assert_eq!(letterbox.top, letterbox.bottom);
            assert!(letterbox.left >= 0.0 && letterbox.left < 0.5);
            assert!(letterbox.top >= 0.0 && letterbox.top < 0.5);
            assert!(letterbox.left == 0.0 || letterbox.top == 0.0);
        }
    }
}
