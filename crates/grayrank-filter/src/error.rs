//! Error types for grayrank-filter
//!
//! Every precondition failure is a typed error the caller decides how to
//! handle; library code never prints or exits on bad input.

use thiserror::Error;

/// Errors that can occur during rank filtering
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] grayrank_core::Error),

    /// Frame has more than one channel
    #[error("called with {actual} channels, but only supports 1 channel")]
    InvalidChannelCount { actual: u32 },

    /// Neighborhood radius outside the accepted range
    #[error("invalid radius: {0} (must be >= 1)")]
    InvalidRadius(u32),

    /// Fractional rank outside [0.0, 1.0]
    #[error("invalid rank: {0} (must be in [0.0, 1.0])")]
    InvalidRank(f32),

    /// Zero-length sample window passed to rank extraction
    ///
    /// This is a contract violation by the caller, not a recoverable
    /// runtime condition: windows gathered by the filter driver always
    /// hold (2R+1)^2 samples.
    #[error("empty sample window")]
    EmptyWindow,

    /// Rank index past the end of the window
    #[error("rank out of bounds: {rank} >= {len}")]
    RankOutOfBounds { rank: usize, len: usize },
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
