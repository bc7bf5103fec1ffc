//! Rendering error types.

use thiserror::Error;

/// Errors that can occur while exporting rendered frames.
///
/// Drawing itself never fails; degenerate triangles are dropped instead.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Failed to write the output file.
    #[error("failed to save image: {0}")]
    IoError(#[from] std::io::Error),

    /// The image encoder rejected the frame.
    #[error("image encoding error: {0}")]
    ImageError(#[from] image::ImageError),

    /// The output extension is not PNG or JPEG.
    #[error("unsupported image format: {0:?}")]
    UnsupportedFormat(String),

    /// Width or height is zero.
    #[error("invalid framebuffer size {width}x{height}")]
    InvalidSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}

/// A specialized Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
