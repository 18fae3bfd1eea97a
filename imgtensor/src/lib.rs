//! imgtensor - Image region to tensor extraction
//!
//! This crate extracts an oriented region of an image and converts it
//! into a dense `f32` tensor suitable for model input preparation:
//!
//! - Normalized region selection with rotation and aspect-ratio padding
//! - Affine resampling with bilinear filtering and zero borders
//! - Four-to-three channel reduction for RGBA sources
//! - Linear value mapping from bytes into a caller-chosen float range
//!
//! # Example
//!
//! ```
//! use imgtensor::{NormalizedRegion, Raster};
//! use imgtensor::transform::{OutputSpec, to_tensor};
//!
//! // Extract the full image into a 4x4 tensor in [0, 1].
//! let raster = Raster::new_packed(8, 8, 3).unwrap();
//! let spec = OutputSpec::new(4, 4);
//! let tensor = to_tensor(&raster.as_view(), &NormalizedRegion::full(), &spec).unwrap();
//! assert_eq!(tensor.dimensions(), (4, 4));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use imgtensor_core::*;

// Re-export the transform crate as a module to avoid name conflicts
pub use imgtensor_transform as transform;
