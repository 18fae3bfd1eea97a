//! Error types for imgtensor-transform

use thiserror::Error;

/// Errors that can occur while extracting a region into a tensor
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] imgtensor_core::Error),

    /// Value range with min not strictly below max
    #[error("invalid value range: [{min}, {max}]")]
    InvalidRange { min: f32, max: f32 },

    /// Region with a non-positive width or height
    #[error("degenerate region: {width}x{height}")]
    DegenerateRegion { width: f32, height: f32 },

    /// Source channel count the sampler cannot consume
    #[error("unsupported channel count: {0}")]
    UnsupportedChannelCount(u32),

    /// Output tensor dimensions must be positive
    #[error("invalid output dimensions: {width}x{height}")]
    InvalidOutputDimensions { width: u32, height: u32 },

    /// Singular affine map (non-invertible)
    #[error("singular affine map")]
    SingularMap,
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
