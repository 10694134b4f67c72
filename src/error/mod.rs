//! Error handling for the triage engine.

use thiserror::Error;

/// Specialized error type for intake and store operations.
///
/// The triage core itself (BMI classifier, scorer, waitlist orderer) never
/// returns these: degraded input is absorbed as a zero-point contribution.
/// Errors are raised at the intake boundary, before scoring runs.
#[derive(Debug, Error)]
pub enum TriageError {
    /// A CPF, SUS or CEP failed digit/length/check-digit validation
    #[error("invalid {kind}: {value:?}")]
    InvalidIdentifier {
        /// Which identifier failed ("CPF", "SUS", "CEP")
        kind: &'static str,
        /// The offending raw value
        value: String,
    },
    /// A measurement violated the caller-side validation window
    #[error("{field} out of range: {value}")]
    OutOfRange {
        /// Name of the rejected field
        field: &'static str,
        /// The rejected value
        value: f64,
    },
    /// A field required at first registration was empty
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    /// No patient registered under the given CPF
    #[error("patient not found: {0}")]
    PatientNotFound(String),
    /// A patient with the given CPF is already registered
    #[error("patient already registered: {0}")]
    DuplicatePatient(String),
    /// Failure inside a store implementation
    #[error("store error: {0}")]
    Store(String),
}

/// Result type for triage engine operations
pub type Result<T> = std::result::Result<T, TriageError>;
