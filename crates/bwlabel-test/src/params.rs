//! Regression test parameters and operations

use bwlabel_core::LabelGrid;

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, and success status. Every comparison
/// bumps the index so failures can be located in the test body.
pub struct RegParams {
    /// Name of the test (e.g., "conncomp")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "conncomp")
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

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
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
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two label grids for exact equality
    ///
    /// # Returns
    ///
    /// `true` if the grids are identical, `false` otherwise. The first
    /// differing cell is reported.
    pub fn compare_label_grids(&mut self, expected: &LabelGrid, actual: &LabelGrid) -> bool {
        self.index += 1;

        if expected.rows() != actual.rows() || expected.cols() != actual.cols() {
            let msg = format!(
                "Failure in {}_reg: grid comparison for index {} - dimension mismatch \
                 {}x{} vs {}x{}",
                self.test_name,
                self.index,
                expected.rows(),
                expected.cols(),
                actual.rows(),
                actual.cols()
            );
            self.fail(msg);
            return false;
        }

        for row in 0..expected.rows() {
            for col in 0..expected.cols() {
                let e = expected.get(row, col);
                let a = actual.get(row, col);
                if e != a {
                    let msg = format!(
                        "Failure in {}_reg: grid comparison for index {} - label mismatch \
                         at ({}, {}): expected {:?}, got {:?}",
                        self.test_name, self.index, row, col, e, a
                    );
                    self.fail(msg);
                    return false;
                }
            }
        }

        true
    }

    /// Record a boolean check
    ///
    /// # Arguments
    ///
    /// * `condition` - Whether the check passed
    /// * `what` - Short description used in the failure message
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if !condition {
            let msg = format!(
                "Failure in {}_reg: check for index {} - {}",
                self.test_name, self.index, what
            );
            self.fail(msg);
        }
        condition
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
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

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
