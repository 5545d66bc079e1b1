// crate modules
use crate::check::Check;
use crate::error::Result;
use crate::tolerance::Tolerance;

// external crates
use serde::Serialize;

/// Banner line used around reports and start messages
pub const SEPARATOR: &str = "\n###############################################################\n";

/// Read-only summary of every check made by a
/// [Validator](crate::Validator)
///
/// The text form lists every kept failure record in the order the checks
/// were made:
///
/// ```text
///
/// ###############################################################
///
/// Error(s) occurred :
///
///     Origin of t (test in ref) :
///       value  1.2000E+01 is not present in the reference, with atol=1.00E-02 and rtol=1.00E-12 (index = 4).
///     ...
///
///
/// ###############################################################
///
/// ```
///
/// For a clean run it states the tolerance in force at the end instead.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    /// Tolerance at the time the report was made
    tolerance: Tolerance,
    /// Total number of failures over all checks
    failures: usize,
    /// Every check, in order
    checks: &'a [Check],
}

impl<'a> Report<'a> {
    pub(crate) fn new(tolerance: Tolerance, checks: &'a [Check]) -> Self {
        Self {
            tolerance,
            failures: checks.iter().map(Check::failures).sum(),
            checks,
        }
    }

    /// True if no check failed
    pub fn is_clean(&self) -> bool {
        self.failures == 0
    }

    /// Total number of failures over all checks
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Machine readable form of the report
    ///
    /// ```rust
    /// # use phasebench_validate::Validator;
    /// let mut test = Validator::new(3);
    /// test.quiet();
    /// test.compare_scalar("n", 1.0, 2.0);
    ///
    /// let json = test.report().to_json().unwrap();
    /// assert!(json.contains("\"kind\": \"mismatch\""));
    /// ```
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{SEPARATOR}")?;

        if self.is_clean() {
            writeln!(
                f,
                "No error occurred (atol={:?}, rtol={:?}).",
                self.tolerance.atol, self.tolerance.rtol
            )?;
        } else {
            writeln!(f, "Error(s) occurred :\n")?;
            for check in self.checks {
                write!(f, "{check}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{SEPARATOR}")
    }
}
