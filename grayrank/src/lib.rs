//! grayrank - Order-statistic filtering for 8-bit grayscale frames
//!
//! # Overview
//!
//! grayrank provides rank (order-statistic) filtering of single-channel
//! 8-bit raster frames:
//!
//! - A [`Frame`] container with explicit row stride
//! - Median blur and quartile/min/max variants over square neighborhoods
//! - A generic fractional-rank filter and standalone window selection
//!
//! # Example
//!
//! ```
//! use grayrank::{Frame, filter};
//!
//! // Filter a uniform 64x48 frame; a constant frame is a fixed point.
//! let mut frame = Frame::new(64, 48).unwrap();
//! frame.fill(128);
//! let blurred = filter::median_blur(&frame, 5).unwrap();
//! assert_eq!(blurred, frame);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use grayrank_core::*;

// Re-export the filter crate as a module
pub use grayrank_filter as filter;
