//! grayrank-core - Raster frame container
//!
//! This crate provides the fundamental data structure shared by the
//! grayrank filtering crates:
//!
//! - [`Frame`] - an 8-bit raster with explicit row stride and an
//!   interleaved channel count
//!
//! Frames are plain owned buffers: one byte per sample, rows starting at
//! multiples of the stride, with any padding bytes past the row payload
//! left untouched by all operations.

pub mod error;
pub mod frame;

pub use error::{Error, Result};
pub use frame::Frame;
