//! Result and Error types for the benchmark module

/// Type alias for `Result<T, bench::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `phasebench-bench`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure while loading or querying phase-space data
    #[error("failed to load phase-space data")]
    PhaseSpace(#[from] phasebench_phasespace::Error),

    /// Failure while producing a validation report
    #[error("failed to produce validation report")]
    Validate(#[from] phasebench_validate::Error),

    /// Weight normalisation needs at least one event
    #[error("number of events must be at least 1")]
    InvalidEventCount,

    /// Logger could not be initialised
    #[error("failed to initialise logging")]
    Logger(#[from] log::SetLoggerError),

    /// Comparisons failed and the run was asked to be strict
    #[error("{0} comparison(s) failed")]
    FailedChecks(usize),
}
