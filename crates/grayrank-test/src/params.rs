//! Regression test parameters and comparison operations

use grayrank_core::Frame;

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, a comparison
/// index (incremented before each comparison), and the accumulated
/// failures.
pub struct RegParams {
    /// Name of the test (e.g., "rank")
    pub test_name: String,
    /// Current comparison index
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters.
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "rank")
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values.
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Record a boolean check.
    pub fn check(&mut self, ok: bool, what: &str) -> bool {
        self.index += 1;
        if !ok {
            let msg = format!(
                "Failure in {}_reg: check for index {}: {}",
                self.test_name, self.index, what
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
        }
        ok
    }

    /// Compare two frames for exact equality.
    ///
    /// Geometry (width, height, channels) and every payload sample must
    /// match; row padding is not compared.
    ///
    /// # Returns
    ///
    /// `true` if frames are identical, `false` otherwise.
    pub fn compare_frames(&mut self, frame1: &Frame, frame2: &Frame) -> bool {
        self.index += 1;

        if frame1.width() != frame2.width()
            || frame1.height() != frame2.height()
            || frame1.channels() != frame2.channels()
        {
            let msg = format!(
                "Failure in {}_reg: frame comparison for index {} - geometry mismatch",
                self.test_name, self.index
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            return false;
        }

        for y in 0..frame1.height() {
            if frame1.row(y) != frame2.row(y) {
                let msg = format!(
                    "Failure in {}_reg: frame comparison for index {} - row {} differs",
                    self.test_name, self.index, y
                );
                eprintln!("{}", msg);
                self.failures.push(msg);
                self.success = false;
                return false;
            }
        }

        true
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if every comparison succeeded.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
