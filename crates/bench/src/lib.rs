//! Packaged benchmark analyses for gp3m2 phase-space output
//!
//! Each benchmark loads nothing by itself. It takes the simulated and
//! reference [PhaseSpace](phasebench_phasespace::PhaseSpace) data, runs its
//! comparisons through a [Validator](phasebench_validate::Validator) and hands
//! the validator back for reporting.
//!
//! | Benchmark                   | Checks                                          |
//! | --------------------------- | ----------------------------------------------- |
//! | [ElectronSourceBenchmark]   | counts, weights, momenta, position, origin      |
//! | [StatisticsBenchmark]       | counts and total weight                         |
//!
//! ```rust, no_run
//! # use phasebench_bench::{Benchmark, StatisticsBenchmark};
//! # use phasebench_phasespace::{read_multithreaded_csv, read_text_columns, Shape, Species};
//! let sim = read_multithreaded_csv("test_nt_electron_t*.csv", 4, Shape::WithTime, Species::Electron).unwrap();
//! let reference = read_text_columns("input.dat", Shape::WithTime, Species::Electron).unwrap();
//!
//! let test = StatisticsBenchmark::new().run(&sim, &reference).unwrap();
//! test.print_report();
//! ```
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod benchmark;
mod electron;
mod error;
mod statistics;

// Inline anything important for a nice public API
#[doc(inline)]
pub use benchmark::Benchmark;

#[doc(inline)]
pub use electron::ElectronSourceBenchmark;

#[doc(inline)]
pub use statistics::StatisticsBenchmark;

#[doc(inline)]
pub use error::{Error, Result};
