//! imgtensor-transform - Region extraction into model-input tensors
//!
//! This crate turns a normalized, possibly rotated region of a source
//! image into a fixed-size float tensor:
//!
//! - Region resolution and aspect-ratio letterboxing
//! - Affine fitting of the output grid onto the region corners
//! - Bilinear sampling with zero or replicated borders
//! - Channel reduction for four-channel sources
//! - Linear mapping of byte values into the caller's range
//!
//! The single entry point for the whole pipeline is [`to_tensor`] (or
//! [`to_tensor_with_padding`] when the letterbox metadata is needed);
//! the individual stages are public for direct use and verification.

pub mod affine;
pub mod convert;
mod error;
pub mod range;
pub mod region;
pub mod sample;

pub use affine::{AffineMap, warp};
pub use convert::{OutputSpec, to_tensor, to_tensor_with_padding};
pub use error::{TransformError, TransformResult};
pub use range::ValueTransform;
pub use region::{Letterbox, expand_to_aspect, resolve};
pub use sample::{BorderMode, bilinear, drop_alpha};
