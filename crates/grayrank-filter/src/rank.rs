//! Rank filtering operations
//!
//! Sweeps a square window of side `2 * radius + 1` over every interior
//! pixel of a single-channel frame and replaces the pixel with an order
//! statistic of its neighborhood. Border pixels within `radius` of an edge
//! pass through unchanged.
//!
//! The driver always writes into a separate output frame; the input is
//! read-only for the whole sweep, so no window ever observes an
//! already-filtered neighbor. One scratch window is allocated per
//! invocation and refilled per pixel.

use crate::error::{FilterError, FilterResult};
use crate::select;
use grayrank_core::Frame;

/// Default neighborhood radius.
pub const DEFAULT_RADIUS: u32 = 5;

/// Apply a rank filter with a fractional rank.
///
/// # Arguments
///
/// * `frame` - Input single-channel frame
/// * `radius` - Neighborhood radius; window side is `2 * radius + 1`
/// * `rank` - Rank value in [0.0, 1.0] (0.0=min, 0.5=median, 1.0=max);
///   the extracted index is `floor(rank * (N - 1))` for window length N
///
/// # Errors
///
/// Returns [`FilterError::InvalidChannelCount`] for a multi-channel frame,
/// [`FilterError::InvalidRadius`] for radius 0, and
/// [`FilterError::InvalidRank`] when `rank` is outside [0.0, 1.0].
pub fn rank_filter(frame: &Frame, radius: u32, rank: f32) -> FilterResult<Frame> {
    if !(0.0..=1.0).contains(&rank) {
        return Err(FilterError::InvalidRank(rank));
    }
    run(frame, radius, |n| (rank as f64 * (n - 1) as f64) as usize)
}

/// Apply a median blur (rank index `(N-1)/2`).
pub fn median_blur(frame: &Frame, radius: u32) -> FilterResult<Frame> {
    run(frame, radius, |n| (n - 1) / 2)
}

/// Apply a lower-quartile blur (rank index `(N-1)/4`).
pub fn lower_quartile_blur(frame: &Frame, radius: u32) -> FilterResult<Frame> {
    run(frame, radius, |n| (n - 1) / 4)
}

/// Apply an upper-quartile blur (rank index `3*(N-1)/4`).
pub fn upper_quartile_blur(frame: &Frame, radius: u32) -> FilterResult<Frame> {
    run(frame, radius, |n| 3 * (n - 1) / 4)
}

/// Apply a minimum filter (rank index 0).
pub fn min_filter(frame: &Frame, radius: u32) -> FilterResult<Frame> {
    run(frame, radius, |_| 0)
}

/// Apply a maximum filter (rank index `N-1`).
pub fn max_filter(frame: &Frame, radius: u32) -> FilterResult<Frame> {
    run(frame, radius, |n| n - 1)
}

/// Shared window-sweep driver.
///
/// `index_for` maps the window length to the rank index to extract; every
/// public entry point resolves to this with a concrete index formula.
fn run(frame: &Frame, radius: u32, index_for: impl Fn(usize) -> usize) -> FilterResult<Frame> {
    if frame.channels() != 1 {
        return Err(FilterError::InvalidChannelCount {
            actual: frame.channels(),
        });
    }
    if radius == 0 {
        return Err(FilterError::InvalidRadius(radius));
    }

    // Borders pass through, so start from a copy of the input.
    let mut out = frame.clone();

    let w = frame.width() as usize;
    let h = frame.height() as usize;
    let r = radius as usize;
    let side = 2 * r + 1;

    // No interior pixels: the whole frame is border.
    if w < side || h < side {
        return Ok(out);
    }

    let n = side * side;
    let rank = index_for(n);
    let mut window = vec![0u8; n];

    for y in r..h - r {
        for x in r..w - r {
            for wy in 0..side {
                let src = frame.row((y + wy - r) as u32);
                window[wy * side..(wy + 1) * side].copy_from_slice(&src[x - r..x - r + side]);
            }
            let val = select::rank_value(&mut window, rank)?;
            out.set(x as u32, y as u32, val)?;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_blur_removes_impulse() {
        let mut frame = Frame::new(5, 5).unwrap();
        frame.fill(10);
        frame.set(2, 2, 255).unwrap();

        let out = median_blur(&frame, 1).unwrap();
        // one outlier among nine samples never reaches the median
        assert_eq!(out.get(2, 2), Some(10));
    }

    #[test]
    fn test_max_filter_spreads_impulse() {
        let mut frame = Frame::new(5, 5).unwrap();
        frame.fill(10);
        frame.set(2, 2, 255).unwrap();

        let out = max_filter(&frame, 1).unwrap();
        for (x, y) in [(1, 1), (2, 1), (3, 1), (1, 2), (2, 2), (3, 2), (1, 3)] {
            assert_eq!(out.get(x, y), Some(255), "at ({}, {})", x, y);
        }
    }

    #[test]
    fn test_border_passes_through() {
        let mut frame = Frame::new(7, 7).unwrap();
        for y in 0..7 {
            for x in 0..7 {
                frame.set(x, y, (10 * y + x) as u8).unwrap();
            }
        }

        let out = median_blur(&frame, 2).unwrap();
        for y in 0..7u32 {
            for x in 0..7u32 {
                let in_interior = (2..5).contains(&x) && (2..5).contains(&y);
                if !in_interior {
                    assert_eq!(out.get(x, y), frame.get(x, y), "border at ({}, {})", x, y);
                }
            }
        }
    }

    #[test]
    fn test_frame_smaller_than_window_unchanged() {
        let mut frame = Frame::new(4, 4).unwrap();
        frame.fill(99);
        let out = median_blur(&frame, DEFAULT_RADIUS).unwrap();
        assert_eq!(out, frame);
    }

    #[test]
    fn test_multichannel_rejected() {
        let frame = Frame::with_channels(16, 16, 3).unwrap();
        assert!(matches!(
            median_blur(&frame, 1),
            Err(FilterError::InvalidChannelCount { actual: 3 })
        ));
    }

    #[test]
    fn test_zero_radius_rejected() {
        let frame = Frame::new(16, 16).unwrap();
        assert!(matches!(
            median_blur(&frame, 0),
            Err(FilterError::InvalidRadius(0))
        ));
    }

    #[test]
    fn test_rank_outside_unit_interval_rejected() {
        let frame = Frame::new(16, 16).unwrap();
        assert!(matches!(
            rank_filter(&frame, 1, -0.1),
            Err(FilterError::InvalidRank(_))
        ));
        assert!(matches!(
            rank_filter(&frame, 1, 1.1),
            Err(FilterError::InvalidRank(_))
        ));
    }

    #[test]
    fn test_sweep_reads_input_not_output() {
        // A left-to-right step edge: in-place filtering would drag
        // already-filtered values into later windows and shift the edge.
        let mut frame = Frame::new(9, 5).unwrap();
        for y in 0..5 {
            for x in 0..9 {
                frame.set(x, y, if x < 4 { 0 } else { 200 }).unwrap();
            }
        }
        let out = min_filter(&frame, 1).unwrap();
        // window at x=5 spans columns 4..=6, all 200 in the input frame
        assert_eq!(out.get(5, 2), Some(200));
        // window at x=4 touches column 3 and must see the unfiltered 0
        assert_eq!(out.get(4, 2), Some(0));
    }
}
