//! Error types for imgtensor-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image or tensor dimensions
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Channel count outside the supported container range
    #[error("invalid channel count: {0}")]
    InvalidChannelCount(u32),

    /// Row stride smaller than one packed row
    #[error("invalid row stride: {stride} bytes, need at least {min}")]
    InvalidStride { stride: usize, min: usize },

    /// Pixel buffer shorter than the dimensions require
    #[error("pixel buffer too small: {actual} bytes, need at least {required}")]
    BufferTooSmall { required: usize, actual: usize },

    /// Data length does not match the dimensions exactly
    #[error("data length mismatch: expected {expected}, got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
