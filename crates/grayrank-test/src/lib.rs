//! grayrank-test - Regression test support
//!
//! Provides [`RegParams`], a small state tracker for regression tests:
//! each comparison bumps an index and records failures, and `cleanup()`
//! reports overall success at the end of the test. Tests assert on the
//! `cleanup()` result so a single run reports every mismatch rather than
//! stopping at the first.

mod params;

pub use params::RegParams;
