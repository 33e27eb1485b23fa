//! Frame - 8-bit raster container
//!
//! A `Frame` stores one byte per sample, interleaved by channel, with rows
//! laid out at a fixed byte stride. The stride may exceed the row payload
//! (`width * channels`) when the producer pads rows for alignment; padding
//! bytes are never interpreted as pixel data.
//!
//! # Ownership model
//!
//! Frames are single-owner values. Filters take `&Frame` input and return a
//! freshly allocated output frame; in-place mutation goes through the
//! bounds-checked setters or the row/buffer views.

mod access;

use crate::error::{Error, Result};

/// An 8-bit raster frame with explicit row stride.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    channels: u32,
    stride: usize,
    data: Vec<u8>,
}

impl Frame {
    /// Create a zero-filled single-channel frame with stride = width.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_channels(width, height, 1)
    }

    /// Create a zero-filled frame with an interleaved channel count and no
    /// row padding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is zero,
    /// or [`Error::InvalidChannels`] if `channels` is zero.
    pub fn with_channels(width: u32, height: u32, channels: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if channels == 0 {
            return Err(Error::InvalidChannels(channels));
        }

        let stride = width as usize * channels as usize;
        Ok(Self {
            width,
            height,
            channels,
            stride,
            data: vec![0; stride * height as usize],
        })
    }

    /// Wrap an existing buffer, taking ownership.
    ///
    /// `stride` is in bytes and must cover the row payload
    /// (`width * channels`); `data` must hold exactly `stride * height`
    /// bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`], [`Error::InvalidChannels`],
    /// [`Error::InvalidStride`], or [`Error::BufferSizeMismatch`] when the
    /// geometry and buffer disagree.
    pub fn from_raw(
        width: u32,
        height: u32,
        channels: u32,
        stride: usize,
        data: Vec<u8>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if channels == 0 {
            return Err(Error::InvalidChannels(channels));
        }

        let min_stride = width as usize * channels as usize;
        if stride < min_stride {
            return Err(Error::InvalidStride {
                stride,
                min: min_stride,
            });
        }

        let expected = stride * height as usize;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            stride,
            data,
        })
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Interleaved samples per pixel.
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Row stride in bytes.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Length of the row payload in bytes (`width * channels`).
    pub fn row_len(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    /// Set every payload byte to `val`. Row padding is left untouched.
    pub fn fill(&mut self, val: u8) {
        for y in 0..self.height {
            self.row_mut(y).fill(val);
        }
    }

    /// Full backing buffer, including row padding.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable full backing buffer, including row padding.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the frame and return the backing buffer.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
