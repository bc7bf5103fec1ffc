//! Error types for voxelsprite-rs.

use thiserror::Error;

/// The main error type for voxelsprite-rs operations.
#[derive(Error, Debug)]
pub enum VoxelError {
    /// Voxel edge length must be finite and strictly positive.
    #[error("invalid voxel size {0}: must be finite and > 0")]
    InvalidVoxelSize(f32),

    /// A configuration value is out of range.
    #[error("invalid option '{name}': {reason}")]
    InvalidOption {
        /// Name of the offending option.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for voxelsprite-rs operations.
pub type Result<T> = std::result::Result<T, VoxelError>;

/// Checks that a voxel edge length is usable.
pub fn validate_voxel_size(size: f32) -> Result<f32> {
    if size.is_finite() && size > 0.0 {
        Ok(size)
    } else {
        Err(VoxelError::InvalidVoxelSize(size))
    }
}
