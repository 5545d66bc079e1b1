//! Result and Error types for the phase-space module

use crate::Field;

/// Type alias for `Result<T, phasespace::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `phasebench-phasespace`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure while reading CSV records
    #[error("failed CSV operation")]
    Csv(#[from] csv::Error),

    /// A value in a data file could not be read as a float
    #[error("failed to parse \"{token}\" as a number ({path}, line {line})")]
    ParseError {
        path: String,
        line: u64,
        token: String,
    },

    /// Every data line must hold exactly one full record
    #[error("unexpected number of fields ({path}, line {line}, expected {expected}, found {found})")]
    UnexpectedFieldCount {
        path: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Records pushed directly must match the stride of the data shape
    #[error("unexpected record length (expected {expected}, found {found})")]
    UnexpectedRecordLength { expected: usize, found: usize },

    /// Particle label is not one of the supported species
    #[error("failed to infer species from \"{0}\"")]
    UnknownSpecies(String),

    /// Field name is not one of the phase-space columns
    #[error("failed to infer field from \"{0}\"")]
    UnknownField(String),

    /// The field was not loaded, e.g. time for data read without it
    #[error("field {0} is not available in this phase space")]
    MissingField(Field),

    /// At least one thread file is needed
    #[error("number of threads must be at least 1")]
    InvalidThreadCount,
}
