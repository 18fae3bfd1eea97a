//! Raster container regression test
//!
//! Tests packed raster creation, pixel access, strided views over
//! borrowed buffers, and layout validation.

use imgtensor_core::{Raster, RasterView};
use imgtensor_test::RegParams;

// ==========================================================================
// Test 1: Packed creation and validation
// ==========================================================================

#[test]
fn raster_reg_creation() {
    let mut rp = RegParams::new("raster_creation");

    let raster = Raster::new_packed(640, 480, 3).expect("Raster::new_packed failed");
    rp.compare_values(640.0, raster.width() as f64, 0.0);
    rp.compare_values(480.0, raster.height() as f64, 0.0);
    rp.compare_values(3.0, raster.channels() as f64, 0.0);
    rp.compare_values((640 * 3) as f64, raster.stride() as f64, 0.0);

    let all_zero = raster.data().iter().all(|&b| b == 0);
    rp.compare_values(1.0, if all_zero { 1.0 } else { 0.0 }, 0.0);

    // From raw bytes, length must match exactly
    let ok = Raster::from_vec(2, 2, 4, vec![7; 16]);
    rp.compare_values(1.0, if ok.is_ok() { 1.0 } else { 0.0 }, 0.0);
    let short = Raster::from_vec(2, 2, 4, vec![7; 15]);
    rp.compare_values(1.0, if short.is_err() { 1.0 } else { 0.0 }, 0.0);

    // Zero dimensions and unsupported channel counts are rejected
    for (w, h, c) in [(0, 4, 3), (4, 0, 3), (4, 4, 0), (4, 4, 5)] {
        let err = Raster::new_packed(w, h, c);
        rp.compare_values(1.0, if err.is_err() { 1.0 } else { 0.0 }, 0.0);
    }

    assert!(rp.cleanup(), "raster_reg creation tests failed");
}

// ==========================================================================
// Test 2: Pixel access
// ==========================================================================

#[test]
fn raster_reg_pixel_access() {
    let mut rp = RegParams::new("raster_access");

    let mut raster = Raster::new_packed(32, 16, 3).unwrap();

    raster.set_pixel(20, 7, &[255, 128, 1]).unwrap();
    let px = raster.pixel(20, 7).unwrap();
    rp.compare_values(255.0, px[0] as f64, 0.0);
    rp.compare_values(128.0, px[1] as f64, 0.0);
    rp.compare_values(1.0, px[2] as f64, 0.0);

    // Out-of-bounds reads are None, writes are errors
    let oob_none = raster.pixel(32, 0).is_none() && raster.pixel(0, 16).is_none();
    rp.compare_values(1.0, if oob_none { 1.0 } else { 0.0 }, 0.0);
    let oob_write = raster.set_pixel(0, 16, &[0, 0, 0]);
    rp.compare_values(1.0, if oob_write.is_err() { 1.0 } else { 0.0 }, 0.0);

    // Channel-count mismatch on write is an error
    let short_write = raster.set_pixel(0, 0, &[0, 0]);
    rp.compare_values(1.0, if short_write.is_err() { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "raster_reg pixel access tests failed");
}

// ==========================================================================
// Test 3: Strided views
// ==========================================================================

#[test]
fn raster_reg_strided_view() {
    let mut rp = RegParams::new("raster_view");

    // 3x2 RGB rows padded to 12 bytes; padding must never be read.
    let mut data = vec![0xEEu8; 24];
    data[0..9].copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    data[12..21].copy_from_slice(&[11, 12, 13, 14, 15, 16, 17, 18, 19]);

    let view = RasterView::from_slice(3, 2, 3, 12, &data).expect("RasterView::from_slice failed");
    rp.compare_values(12.0, view.stride() as f64, 0.0);
    rp.compare_values(1.0, view.pixel(0, 0).unwrap()[0] as f64, 0.0);
    rp.compare_values(9.0, view.pixel(2, 0).unwrap()[2] as f64, 0.0);
    rp.compare_values(11.0, view.pixel(0, 1).unwrap()[0] as f64, 0.0);
    rp.compare_values(19.0, view.pixel(2, 1).unwrap()[2] as f64, 0.0);

    let oob_none = view.pixel(3, 0).is_none() && view.pixel(0, 2).is_none();
    rp.compare_values(1.0, if oob_none { 1.0 } else { 0.0 }, 0.0);

    // A stride below width * channels is inconsistent
    let bad_stride = RasterView::from_slice(3, 2, 3, 8, &data);
    rp.compare_values(1.0, if bad_stride.is_err() { 1.0 } else { 0.0 }, 0.0);

    // The buffer must cover stride * height bytes
    let bad_len = RasterView::from_slice(3, 2, 3, 13, &data);
    rp.compare_values(1.0, if bad_len.is_err() { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "raster_reg strided view tests failed");
}

// ==========================================================================
// Test 4: Owned raster to view round trip
// ==========================================================================

#[test]
fn raster_reg_view_round_trip() {
    let mut rp = RegParams::new("raster_roundtrip");

    let mut raster = Raster::new_packed(5, 4, 4).unwrap();
    for y in 0..4u32 {
        for x in 0..5u32 {
            let v = (y * 5 + x) as u8;
            raster.set_pixel(x, y, &[v, v + 100, v + 200, 255 - v]).unwrap();
        }
    }

    let view = raster.as_view();
    rp.compare_values(5.0, view.width() as f64, 0.0);
    rp.compare_values(4.0, view.height() as f64, 0.0);
    rp.compare_values(4.0, view.channels() as f64, 0.0);
    rp.compare_values(20.0, view.stride() as f64, 0.0);

    let mut pixels_match = true;
    for y in 0..4u32 {
        for x in 0..5u32 {
            pixels_match &= view.pixel(x, y) == raster.pixel(x, y);
        }
    }
    rp.compare_values(1.0, if pixels_match { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "raster_reg view round trip tests failed");
}
