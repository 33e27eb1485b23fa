//! Error types for grayrank-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// grayrank-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid frame dimensions
    #[error("invalid frame dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid channel count
    #[error("invalid channel count: {0}")]
    InvalidChannels(u32),

    /// Row stride smaller than the row payload
    #[error("invalid stride: {stride} < {min} bytes per row")]
    InvalidStride { stride: usize, min: usize },

    /// Buffer length does not match stride * height
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Pixel coordinates out of bounds
    #[error("coordinates out of bounds: ({x}, {y}) in {width}x{height}")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type alias for grayrank-core operations
pub type Result<T> = std::result::Result<T, Error>;
