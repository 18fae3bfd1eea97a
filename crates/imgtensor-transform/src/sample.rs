//! Bilinear sampling over byte rasters
//!
//! The sampler reads single sub-pixel positions from a [`RasterView`]:
//! - `bilinear` - interpolate the 2x2 neighborhood around a position
//! - `drop_alpha` - reduce a pixel to its first three channels
//! - `BorderMode` - what out-of-bounds taps read
//!
//! # Coordinate convention
//!
//! Integer coordinates address pixel origins, so sampling exactly at
//! `(x, y)` with integral values returns that pixel unchanged. Values
//! are returned as `f32` in the byte range [0, 255]; nothing is rounded
//! back to `u8`.

use imgtensor_core::RasterView;

/// How samples outside the source raster are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderMode {
    /// Out-of-bounds taps read black (all channels zero)
    #[default]
    Zero,
    /// Out-of-bounds taps read the nearest edge pixel
    Replicate,
}

/// Reduce a pixel's channel slice to its first three channels
///
/// For 3-channel pixels this is the identity; for 4-channel pixels it
/// drops the fourth (alpha) channel. Channel order passes through
/// untouched.
///
/// # Panics
///
/// Panics if the slice has fewer than three channels. The extraction
/// pipeline checks the channel count before sampling.
#[inline]
pub fn drop_alpha(pixel: &[u8]) -> [u8; 3] {
    [pixel[0], pixel[1], pixel[2]]
}

/// One border-aware tap of a bilinear neighborhood
#[inline]
fn tap(src: &RasterView<'_>, x: i64, y: i64, border: BorderMode) -> [f32; 3] {
    let w = src.width() as i64;
    let h = src.height() as i64;

    let (x, y) = match border {
        BorderMode::Zero => {
            if x < 0 || y < 0 || x >= w || y >= h {
                return [0.0; 3];
            }
            (x as u32, y as u32)
        }
        BorderMode::Replicate => (x.clamp(0, w - 1) as u32, y.clamp(0, h - 1) as u32),
    };

    match src.pixel(x, y) {
        Some(px) => {
            let [r, g, b] = drop_alpha(px);
            [r as f32, g as f32, b as f32]
        }
        None => [0.0; 3],
    }
}

/// Sample a raster at a sub-pixel position with bilinear interpolation
///
/// Interpolates the four pixels at `(floor(x), floor(y))` and its
/// right/lower neighbors; taps falling outside the raster contribute
/// the border value, so positions near (or past) the edges blend toward
/// black under [`BorderMode::Zero`] and hold the edge color under
/// [`BorderMode::Replicate`].
pub fn bilinear(src: &RasterView<'_>, x: f32, y: f32, border: BorderMode) -> [f32; 3] {
    // One pixel past an edge the whole neighborhood is border taps, so
    // positions farther out sample identically to the clamped position;
    // the clamp also keeps the integer casts below in i64 range.
    let x = x.clamp(-2.0, src.width() as f32 + 1.0);
    let y = y.clamp(-2.0, src.height() as f32 + 1.0);
    let x0f = x.floor();
    let y0f = y.floor();
    let fx = x - x0f;
    let fy = y - y0f;
    let x0 = x0f as i64;
    let y0 = y0f as i64;

    let p00 = tap(src, x0, y0, border);
    let p10 = tap(src, x0 + 1, y0, border);
    let p01 = tap(src, x0, y0 + 1, border);
    let p11 = tap(src, x0 + 1, y0 + 1, border);

    let mut out = [0.0f32; 3];
    for c in 0..3 {
        let top = p00[c] * (1.0 - fx) + p10[c] * fx;
        let bottom = p01[c] * (1.0 - fx) + p11[c] * fx;
        out[c] = top * (1.0 - fy) + bottom * fy;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgtensor_core::Raster;

    fn sample_raster() -> Raster {
        let mut raster = Raster::new_packed(2, 2, 3).unwrap();
        raster.set_pixel(0, 0, &[10, 20, 30]).unwrap();
        raster.set_pixel(1, 0, &[50, 60, 70]).unwrap();
        raster.set_pixel(0, 1, &[90, 100, 110]).unwrap();
        raster.set_pixel(1, 1, &[130, 140, 150]).unwrap();
        raster
    }

    #[test]
    fn test_drop_alpha() {
        assert_eq!(drop_alpha(&[1, 2, 3]), [1, 2, 3]);
        assert_eq!(drop_alpha(&[1, 2, 3, 255]), [1, 2, 3]);
        assert_eq!(drop_alpha(&[1, 2, 3, 0]), [1, 2, 3]);
    }

    #[test]
    fn test_bilinear_integer_coordinates() {
        let raster = sample_raster();
        let view = raster.as_view();

        assert_eq!(bilinear(&view, 0.0, 0.0, BorderMode::Zero), [10.0, 20.0, 30.0]);
        assert_eq!(bilinear(&view, 1.0, 0.0, BorderMode::Zero), [50.0, 60.0, 70.0]);
        assert_eq!(bilinear(&view, 1.0, 1.0, BorderMode::Zero), [130.0, 140.0, 150.0]);
    }

    #[test]
    fn test_bilinear_midpoint() {
        let raster = sample_raster();
        let view = raster.as_view();

        assert_eq!(bilinear(&view, 0.5, 0.5, BorderMode::Zero), [70.0, 80.0, 90.0]);
    }

    #[test]
    fn test_bilinear_horizontal_fraction() {
        let raster = sample_raster();
        let view = raster.as_view();

        assert_eq!(bilinear(&view, 0.25, 0.0, BorderMode::Zero), [20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_bilinear_zero_border_blends() {
        let raster = sample_raster();
        let view = raster.as_view();

        // Half a pixel outside the left edge: half of (10, 20, 30).
        assert_eq!(bilinear(&view, -0.5, 0.0, BorderMode::Zero), [5.0, 10.0, 15.0]);
        // Fully outside reads black.
        assert_eq!(bilinear(&view, -10.5, -3.0, BorderMode::Zero), [0.0, 0.0, 0.0]);
        assert_eq!(bilinear(&view, 7.0, 1.0, BorderMode::Zero), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_bilinear_replicate_border_clamps() {
        let raster = sample_raster();
        let view = raster.as_view();

        assert_eq!(
            bilinear(&view, -0.5, 0.0, BorderMode::Replicate),
            [10.0, 20.0, 30.0]
        );
        assert_eq!(
            bilinear(&view, 5.0, 5.0, BorderMode::Replicate),
            [130.0, 140.0, 150.0]
        );
    }

    #[test]
    fn test_bilinear_extreme_positions() {
        let raster = sample_raster();
        let view = raster.as_view();

        // Positions whose floor is far beyond i64 still read the border.
        for &(x, y) in &[
            (1.0e30f32, 0.5f32),
            (-1.0e30, 0.5),
            (0.5, 3.0e18),
            (f32::INFINITY, 0.5),
            (0.5, f32::NEG_INFINITY),
        ] {
            assert_eq!(bilinear(&view, x, y, BorderMode::Zero), [0.0, 0.0, 0.0]);
        }

        // Replicate holds the nearest edge pixel however far out.
        assert_eq!(
            bilinear(&view, 1.0e30, 0.0, BorderMode::Replicate),
            [50.0, 60.0, 70.0]
        );
        assert_eq!(
            bilinear(&view, -1.0e30, 1.0, BorderMode::Replicate),
            [90.0, 100.0, 110.0]
        );
    }

    #[test]
    fn test_bilinear_ignores_fourth_channel() {
        let rgb = sample_raster();
        let mut rgba = Raster::new_packed(2, 2, 4).unwrap();
        for y in 0..2 {
            for x in 0..2 {
                let px = rgb.pixel(x, y).unwrap();
                // Alpha varies per pixel and must not leak into the result.
                let alpha = (x * 37 + y * 101) as u8;
                rgba.set_pixel(x, y, &[px[0], px[1], px[2], alpha]).unwrap();
            }
        }

        let rgb_view = rgb.as_view();
        let rgba_view = rgba.as_view();
        for &(x, y) in &[(0.0, 0.0), (0.5, 0.5), (0.25, 0.75), (-0.5, 0.0)] {
            assert_eq!(
                bilinear(&rgb_view, x, y, BorderMode::Zero),
                bilinear(&rgba_view, x, y, BorderMode::Zero)
            );
        }
    }
}
