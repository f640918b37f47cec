//! Trace generation error types
//!
//! Generators are total over valid input. The only failure is a violated
//! precondition, detected before any snapshot is recorded, so an error never
//! comes with a partial trace.

use crate::sorts::Algorithm;
use thiserror::Error;

/// Errors that can occur while generating a trace
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    /// The input violates a precondition of the chosen algorithm
    #[error("{algorithm} cannot sort this input: {reason}")]
    InvalidInput {
        algorithm: Algorithm,
        reason: InvalidInputReason,
    },
}

impl TraceError {
    pub fn invalid_input(algorithm: Algorithm, reason: InvalidInputReason) -> Self {
        TraceError::InvalidInput { algorithm, reason }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            TraceError::InvalidInput { algorithm, .. } => *algorithm,
        }
    }
}

/// Which precondition an input failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputReason {
    #[error("the input is empty")]
    Empty,

    #[error("value {value} is negative")]
    NegativeValue { value: i64 },

    #[error("value {value} exceeds the maximum of {max}")]
    ValueTooLarge { value: i64, max: i64 },
}
