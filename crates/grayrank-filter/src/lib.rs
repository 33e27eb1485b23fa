//! grayrank-filter - Order-statistic filtering
//!
//! This crate provides rank (order-statistic) filtering over single-channel
//! 8-bit frames:
//!
//! - Window selection: in-place quicksort and rank extraction
//!   (lower quartile, median, upper quartile, arbitrary rank)
//! - Frame filtering: median blur, quartile blurs, min/max filters, and a
//!   generic fractional-rank filter

mod error;
pub mod rank;
pub mod select;

pub use error::{FilterError, FilterResult};

// Re-export commonly used functions
pub use rank::{
    DEFAULT_RADIUS, lower_quartile_blur, max_filter, median_blur, min_filter, rank_filter,
    upper_quartile_blur,
};
pub use select::{lower_quartile, median, rank_value, sort_window, upper_quartile};
