// File: crates/graph-core/src/error.rs
// Summary: Error taxonomy for series construction; messages are displayed to the user verbatim.

use thiserror::Error;

/// Everything that can stop a series from being built. All variants are
/// recoverable and user-facing; the rendering layer only ever sees the
/// `Display` string, the variants exist so tests can assert the path taken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Literal text contained no parseable number.
    #[error("enter valid comma-separated numbers")]
    EmptyData,
    /// Equation field was blank after trimming.
    #[error("missing expression")]
    MissingExpression,
    /// Expression failed the validation evaluation.
    #[error("invalid equation format")]
    InvalidExpression,
    /// Expression validated but produced zero finite samples over the domain.
    #[error("no valid points generated")]
    NoValidPoints,
    /// A zero or negative step would make the sampling sweep non-terminating.
    #[error("step must be a positive number")]
    InvalidStep,
    /// Fallback for evaluator failures outside the modeled paths; the
    /// underlying message passes through unchanged.
    #[error("{0}")]
    Unexpected(String),
}
