//! Error types for distfield.

use thiserror::Error;

/// Result alias for distfield operations.
pub type DistFieldResult<T> = std::result::Result<T, DistFieldError>;

/// Errors returned by constructors that validate caller-supplied buffers.
///
/// The transform itself has no runtime failure paths; invalid inputs are
/// rejected when the collaborating objects are built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DistFieldError {
    /// A zero width or height was supplied.
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },
    /// The row stride is smaller than the image width.
    #[error("stride {stride} is smaller than width {width}")]
    InvalidStride {
        /// Image width in pixels.
        width: usize,
        /// Offending stride in elements.
        stride: usize,
    },
    /// A backing buffer is shorter than the layout requires.
    #[error("buffer too small: needed {needed} elements, got {got}")]
    BufferTooSmall {
        /// Minimum number of elements required.
        needed: usize,
        /// Number of elements supplied.
        got: usize,
    },
}
