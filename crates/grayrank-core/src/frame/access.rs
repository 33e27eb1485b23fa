//! Sample access functions
//!
//! Row views and individual sample access for [`Frame`]. Row views cover
//! the payload prefix of each stride row, so callers iterating rows never
//! see padding bytes.

use super::Frame;
use crate::error::{Error, Result};

impl Frame {
    /// Payload bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height(), "row {} out of bounds", y);
        let start = y as usize * self.stride();
        &self.data()[start..start + self.row_len()]
    }

    /// Mutable payload bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(y < self.height(), "row {} out of bounds", y);
        let start = y as usize * self.stride();
        let len = self.row_len();
        &mut self.data_mut()[start..start + len]
    }

    /// Get the sample at (x, y) in a single-channel frame.
    ///
    /// Returns `None` if the coordinates are out of bounds. For
    /// multi-channel frames this reads channel 0; use [`Frame::get_sample`]
    /// to address other channels.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        self.get_sample(x, y, 0)
    }

    /// Get one channel's sample at (x, y).
    ///
    /// Returns `None` if the coordinates or channel are out of bounds.
    pub fn get_sample(&self, x: u32, y: u32, channel: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() || channel >= self.channels() {
            return None;
        }
        let idx = (x as usize * self.channels() as usize) + channel as usize;
        Some(self.row(y)[idx])
    }

    /// Set the sample at (x, y) in a single-channel frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are out of
    /// bounds.
    pub fn set(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        self.set_sample(x, y, 0, val)
    }

    /// Set one channel's sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are out of
    /// bounds, or [`Error::InvalidChannels`] for a bad channel index.
    pub fn set_sample(&mut self, x: u32, y: u32, channel: u32, val: u8) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        if channel >= self.channels() {
            return Err(Error::InvalidChannels(channel));
        }
        let idx = (x as usize * self.channels() as usize) + channel as usize;
        self.row_mut(y)[idx] = val;
        Ok(())
    }

    /// Get the sample at (x, y) without bounds checking the coordinates
    /// against an `Option`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u8 {
        self.row(y)[x as usize * self.channels() as usize]
    }
}
