// crate modules
use crate::tolerance::Tolerance;

// phasebench modules
use phasebench_format::{f, NumFormat};

// external crates
use serde::Serialize;

/// A single failed comparison
///
/// Failures only store what went wrong. The label lives on the [Check] they
/// belong to, and text is only produced when rendering a report.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Failure {
    /// Scalar value not close to its reference
    Mismatch {
        value: f64,
        reference: f64,
        tolerance: Tolerance,
    },
    /// Element of a tested sequence with no close counterpart in the reference
    Absent {
        value: f64,
        index: usize,
        tolerance: Tolerance,
    },
}

impl Failure {
    /// The tested value
    pub fn value(&self) -> f64 {
        match self {
            Self::Mismatch { value, .. } | Self::Absent { value, .. } => *value,
        }
    }

    /// Reference value for scalar mismatches, `None` when absent
    pub fn reference(&self) -> Option<f64> {
        match self {
            Self::Mismatch { reference, .. } => Some(*reference),
            Self::Absent { .. } => None,
        }
    }

    /// Position in the tested sequence, `None` for scalars
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Mismatch { .. } => None,
            Self::Absent { index, .. } => Some(*index),
        }
    }

    /// Tolerance in force when the comparison was made
    pub fn tolerance(&self) -> Tolerance {
        match self {
            Self::Mismatch { tolerance, .. } | Self::Absent { tolerance, .. } => *tolerance,
        }
    }

    /// Two line error text tagged with `label`
    ///
    /// ```rust
    /// # use phasebench_validate::{Failure, Tolerance};
    /// let failure = Failure::Mismatch {
    ///     value: 100.0,
    ///     reference: 99.0,
    ///     tolerance: Tolerance::relative(0.005),
    /// };
    ///
    /// assert_eq!(
    ///     failure.render("n"),
    ///     "\tn :\n\t  value  1.0000E+02 is not equal to reference  9.9000E+01, \
    ///      with atol=0.0000E+00 and rtol=5.0000E-03.\n"
    /// );
    /// ```
    pub fn render(&self, label: &str) -> String {
        match self {
            Self::Mismatch {
                value,
                reference,
                tolerance,
            } => f!(
                "\t{label} :\n\t  value {} is not equal to reference {}, with atol={} and rtol={}.\n",
                value.sci_aligned(4),
                reference.sci_aligned(4),
                tolerance.atol.sci_upper(4),
                tolerance.rtol.sci_upper(4),
            ),
            Self::Absent {
                value,
                index,
                tolerance,
            } => f!(
                "\t{label} :\n\t  value {} is not present in the reference, with atol={} and rtol={} (index = {index}).\n",
                value.sci_aligned(4),
                tolerance.atol.sci_upper(2),
                tolerance.rtol.sci_upper(2),
            ),
        }
    }
}

/// Outcome of one labelled comparison
///
/// Keeps the full number of failures, but only the first few failure records
/// up to the display cap of the validator. Anything beyond the cap is counted
/// and marks the check as truncated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Check {
    /// Label as shown in the status line and report
    label: String,
    /// Number of failures, never capped
    failures: usize,
    /// Failure records up to the display cap
    records: Vec<Failure>,
    /// Set once a failure was counted but not recorded
    truncated: bool,
}

impl Check {
    /// New passing check
    pub(crate) fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            failures: 0,
            records: Vec::new(),
            truncated: false,
        }
    }

    /// Count a failure, keeping the record only while under `cap`
    pub(crate) fn record(&mut self, failure: Failure, cap: usize) {
        self.failures += 1;
        if self.records.len() < cap {
            self.records.push(failure);
        } else {
            self.truncated = true;
        }
    }

    /// Count a failure and always keep its record
    pub(crate) fn push(&mut self, failure: Failure) {
        self.failures += 1;
        self.records.push(failure);
    }

    /// Label of the check
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Total number of failed comparisons
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Failure records kept for display
    pub fn records(&self) -> &[Failure] {
        &self.records
    }

    /// True if more failures happened than were recorded
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// True if nothing failed
    pub fn passed(&self) -> bool {
        self.failures == 0
    }

    /// One line pass/fail summary
    ///
    /// e.g. `px (test in ref) ... OK !` or `Origin of t ... ERROR ...`
    pub fn status(&self) -> String {
        match self.passed() {
            true => f!("{} ... OK !", self.label),
            false => f!("{} ... ERROR ...", self.label),
        }
    }
}

/// Error text for every kept record, with `...` for truncated checks
impl std::fmt::Display for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for record in &self.records {
            write!(f, "{}", record.render(&self.label))?;
        }
        if self.truncated {
            writeln!(f, "\t...")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn absent(index: usize) -> Failure {
        Failure::Absent {
            value: index as f64,
            index,
            tolerance: Tolerance::new(1e-2, 1e-12),
        }
    }

    #[test]
    fn records_are_capped() {
        let mut check = Check::new("py");
        for i in 0..5 {
            check.record(absent(i), 2);
        }

        assert_eq!(check.failures(), 5);
        assert_eq!(check.records().len(), 2);
        assert!(check.is_truncated());
        assert!(!check.passed());
    }

    #[test]
    fn zero_cap_keeps_nothing() {
        let mut check = Check::new("py");
        check.record(absent(0), 0);
        assert_eq!(check.failures(), 1);
        assert!(check.records().is_empty());
        assert_eq!(check.to_string(), "\t...\n");
    }

    #[test]
    fn pushed_records_ignore_cap() {
        let mut check = Check::new("n");
        check.push(absent(0));
        assert_eq!(check.records().len(), 1);
        assert!(!check.is_truncated());
    }

    #[test]
    fn absent_rendering() {
        assert_eq!(
            absent(3).render("Origin of y"),
            "\tOrigin of y :\n\t  value  3.0000E+00 is not present in the reference, \
             with atol=1.00E-02 and rtol=1.00E-12 (index = 3).\n"
        );
    }

    #[test]
    fn status_lines() {
        let mut check = Check::new("Number of events");
        assert_eq!(check.status(), "Number of events ... OK !");

        check.record(absent(0), 3);
        assert_eq!(check.status(), "Number of events ... ERROR ...");
    }

    #[test]
    fn accessors() {
        let failure = Failure::Mismatch {
            value: 1.0,
            reference: 2.0,
            tolerance: Tolerance::exact(),
        };
        assert_eq!(failure.value(), 1.0);
        assert_eq!(failure.reference(), Some(2.0));
        assert_eq!(failure.index(), None);

        assert_eq!(absent(4).reference(), None);
        assert_eq!(absent(4).index(), Some(4));
        assert_eq!(absent(4).tolerance(), Tolerance::new(1e-2, 1e-12));
    }
}
