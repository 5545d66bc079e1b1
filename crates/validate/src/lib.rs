//! Tolerance based comparisons with bounded, human readable error reports
//!
//! The [Validator] runs labelled comparisons and keeps a [Check] for each.
//! Comparisons never fail loudly. Mismatches are stored as [Failure] records
//! and it is up to the caller to decide what a failed check means.
//!
//! Two kinds of comparison are available:
//!
//! | Method                          | Passes if                                 |
//! | ------------------------------- | ----------------------------------------- |
//! | [Validator::compare_scalar()]   | the value is close to the reference       |
//! | [Validator::compare_vector()]   | every value is close to *some* reference  |
//!
//! See [Tolerance] for the exact definition of "close".
//!
//! ```rust
//! # use phasebench_validate::{Tolerance, Validator};
//! let mut test = Validator::new(3).with_tolerance(Tolerance::relative(1e-12));
//! test.print_init("0");
//!
//! test.compare_scalar("Number of events", 1000.0, 1000.0);
//! test.compare_vector("px", &[1.0, 2.0], &[2.0, 1.0], true);
//!
//! test.print_report();
//! assert!(test.is_clean());
//! ```

// Split into subfiles for development, but anything important is re-exported
mod check;
mod error;
mod report;
mod tolerance;
mod validator;

// Inline anything important for a nice public API
#[doc(inline)]
pub use check::{Check, Failure};

#[doc(inline)]
pub use report::{Report, SEPARATOR};

#[doc(inline)]
pub use tolerance::Tolerance;

#[doc(inline)]
pub use validator::Validator;

#[doc(inline)]
pub use error::{Error, Result};
