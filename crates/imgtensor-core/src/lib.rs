//! imgtensor Core - Data structures for region-to-tensor extraction
//!
//! This crate provides the fundamental data structures used throughout
//! the imgtensor engine:
//!
//! - [`Raster`] / [`RasterView`] - Interleaved 8-bit image containers
//!   (owned / borrowed) with explicit row stride
//! - [`Tensor`] - The dense `height x width x 3` float32 output grid
//! - [`NormalizedRegion`] - A region of interest in image-relative
//!   coordinates
//! - [`RotatedRect`] / [`Point`] - Pixel-space geometry for sampling
//!
//! The crate is pure data: no IO, no sampling. The transform crate
//! builds the extraction pipeline on top of these types.

pub mod error;
pub mod geom;
pub mod raster;
pub mod region;
pub mod tensor;

pub use error::{Error, Result};
pub use geom::{Point, RotatedRect};
pub use raster::{MAX_CHANNELS, Raster, RasterView};
pub use region::NormalizedRegion;
pub use tensor::Tensor;
