// crate modules
use crate::check::{Check, Failure};
use crate::report::{Report, SEPARATOR};
use crate::tolerance::Tolerance;

// phasebench modules
use phasebench_format::f;

// external crates
use log::{debug, trace};

/// Collects the outcome of a series of labelled comparisons
///
/// Every comparison adds a [Check] and prints a one line status to stdout.
/// Failures are kept, up to `max_errors` per check, for the final report.
///
/// The current [Tolerance] applies to every comparison until it is swapped
/// with [Validator::set_tolerance()]. Failures remember the tolerance they
/// were judged against.
///
/// There is no way to clear failures. Use a new validator for each
/// benchmark run.
///
/// ```rust
/// # use phasebench_validate::{Tolerance, Validator};
/// let mut test = Validator::new(3).with_tolerance(Tolerance::relative(0.02));
/// test.quiet();
///
/// test.compare_scalar("Number of events", 100.0, 99.0);
/// assert!(test.is_clean());
///
/// test.set_tolerance(Tolerance::relative(0.005));
/// test.compare_scalar("Number of events", 100.0, 99.0);
/// assert_eq!(test.failure_count(), 1);
/// ```
#[derive(Debug)]
pub struct Validator {
    /// Maximum number of failure records kept per check
    max_errors: usize,
    /// Tolerance applied to new comparisons
    tolerance: Tolerance,
    /// Every check made so far, in order
    checks: Vec<Check>,
    /// Do not print status lines
    quiet: bool,
}

impl Validator {
    /// New validator keeping at most `max_errors` failure records per check
    ///
    /// The initial tolerance is exact equality.
    pub fn new(max_errors: usize) -> Self {
        Self {
            max_errors,
            tolerance: Tolerance::exact(),
            checks: Vec::new(),
            quiet: false,
        }
    }

    /// Builder for the initial tolerance
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Swap the tolerance for all following comparisons
    pub fn set_tolerance(&mut self, tolerance: Tolerance) {
        debug!(
            "Tolerance set to atol={:?}, rtol={:?}",
            tolerance.atol, tolerance.rtol
        );
        self.tolerance = tolerance;
    }

    /// Tolerance currently applied
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Maximum number of failure records kept per check
    pub fn max_errors(&self) -> usize {
        self.max_errors
    }

    /// Do not print status lines
    pub fn quiet(&mut self) {
        self.quiet = true;
    }

    /// Print a start banner for benchmark `id`
    pub fn print_init(&self, id: &str) {
        if self.quiet {
            return;
        }
        println!("{SEPARATOR}");
        println!("Starting benchmark {id} analysis ...");
        println!("{SEPARATOR}");
    }

    /// Compare a single value to its reference
    ///
    /// Fails if `test` is not close to `reference` under the current
    /// tolerance, in which case one [Failure::Mismatch] is recorded. This
    /// record is kept even when `max_errors` is zero.
    pub fn compare_scalar(&mut self, label: &str, test: f64, reference: f64) -> &Check {
        let tolerance = self.tolerance;
        let mut check = Check::new(label);

        // a single value, so the error line is always kept
        if !tolerance.is_close(test, reference) {
            check.push(Failure::Mismatch {
                value: test,
                reference,
                tolerance,
            });
        }

        self.finish(check)
    }

    /// Check that every element of `test` has a counterpart in `reference`
    ///
    /// Each element is compared against the whole of `reference` and passes
    /// as soon as any reference value is close to it. Reference values are not
    /// consumed, so one reference value may match any number of test values.
    ///
    /// With `bidirectional` set, this becomes two independent checks labelled
    /// `<label> (test in ref)` and `<label> (ref in test)`, the second one with
    /// the sequences swapped.
    ///
    /// Returns the checks that were added.
    ///
    /// ```rust
    /// # use phasebench_validate::{Tolerance, Validator};
    /// let mut test = Validator::new(3).with_tolerance(Tolerance::absolute(0.1));
    /// test.quiet();
    ///
    /// // every test value is near 1.0, but 5.0 is never matched
    /// let checks = test.compare_vector("x", &[1.0, 1.05, 0.98], &[1.0, 5.0], true);
    ///
    /// assert_eq!(checks[0].label(), "x (test in ref)");
    /// assert!(checks[0].passed());
    /// assert_eq!(checks[1].label(), "x (ref in test)");
    /// assert_eq!(checks[1].failures(), 1);
    /// ```
    pub fn compare_vector(
        &mut self,
        label: &str,
        test: &[f64],
        reference: &[f64],
        bidirectional: bool,
    ) -> &[Check] {
        let start = self.checks.len();

        if bidirectional {
            self.membership(&f!("{label} (test in ref)"), test, reference);
            self.membership(&f!("{label} (ref in test)"), reference, test);
        } else {
            self.membership(label, test, reference);
        }

        &self.checks[start..]
    }

    /// Every check made so far, in order
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// True until any comparison fails
    pub fn is_clean(&self) -> bool {
        self.checks.iter().all(Check::passed)
    }

    /// Total number of failed comparisons over all checks
    pub fn failure_count(&self) -> usize {
        self.checks.iter().map(Check::failures).sum()
    }

    /// Summary of all checks, rendered on display
    ///
    /// Building a report never changes the validator, so it can be produced
    /// any number of times.
    pub fn report(&self) -> Report<'_> {
        Report::new(self.tolerance, &self.checks)
    }

    /// Print the report to stdout
    pub fn print_report(&self) {
        print!("{}", self.report());
    }

    /// One directional membership check of `test` in `reference`
    fn membership(&mut self, label: &str, test: &[f64], reference: &[f64]) {
        let tolerance = self.tolerance;
        let mut check = Check::new(label);

        for (index, &value) in test.iter().enumerate() {
            // relative part scales with the tested value, not the reference
            let found = reference.iter().any(|&r| tolerance.is_close(r, value));
            if !found {
                trace!("{label}: value {value} at index {index} not found");
                check.record(
                    Failure::Absent {
                        value,
                        index,
                        tolerance,
                    },
                    self.max_errors,
                );
            }
        }

        self.finish(check);
    }

    /// Print the status line and keep the check
    fn finish(&mut self, check: Check) -> &Check {
        if !self.quiet {
            println!("{}", check.status());
        }
        debug!("{} ({} failures)", check.status(), check.failures());

        self.checks.push(check);
        // just pushed, so there is always a last check
        &self.checks[self.checks.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_exact_and_clean() {
        let test = Validator::new(3);
        assert_eq!(test.tolerance(), Tolerance::exact());
        assert_eq!(test.max_errors(), 3);
        assert!(test.is_clean());
        assert!(test.checks().is_empty());
    }

    #[test]
    fn checks_are_kept_in_order() {
        let mut test = Validator::new(1);
        test.quiet();
        test.compare_scalar("a", 1.0, 1.0);
        test.compare_vector("b", &[1.0], &[2.0], true);

        let labels: Vec<_> = test.checks().iter().map(Check::label).collect();
        assert_eq!(labels, ["a", "b (test in ref)", "b (ref in test)"]);
        assert_eq!(test.failure_count(), 2);
    }
}
