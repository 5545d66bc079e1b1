//! Result and Error types for the validation module

/// Type alias for `Result<T, validate::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `phasebench-validate`
///
/// Failed comparisons are never errors, they are recorded as
/// [Failure](crate::Failure)s on the validator.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),
}
