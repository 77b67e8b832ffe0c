//! The error taxonomy shared by all components. Every error is fatal at the level of the
//! whole analysis; there is no local recovery.

use thiserror::Error;

/// All the ways a model-checking run can fail.
///
/// Each variant carries the offending sub-expression, state, or field to aid debugging.
/// The first four variants describe invalid user inputs; [ModelCheckError::InvalidKey]
/// and [ModelCheckError::InternalInvariant] indicate a bug in the checker itself (a
/// violated precondition), never bad user data.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ModelCheckError {
    /// The input document is absent, not valid JSON, or misses a required field.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The network description violates a structural constraint (bad maximum activity,
    /// unknown regulator or target, invalid thresholds or contexts).
    #[error("malformed network: {0}")]
    MalformedNetwork(String),

    /// The formula cannot be parsed, mixes the strata incorrectly, references an
    /// undeclared variable, or the initial-state specification is out of bounds.
    #[error("malformed formula: {0}")]
    MalformedFormula(String),

    /// A comparison operator other than `>=` or `<=` appeared in an atomic proposition.
    #[error("invalid atomic operator: {0}")]
    InvalidOperator(String),

    /// A priority queue received a key that is not a finite real number.
    #[error("invalid priority key: {0}")]
    InvalidKey(f64),

    /// A precondition of the evaluation engine was violated (e.g., a child label read
    /// before it was computed).
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
}
