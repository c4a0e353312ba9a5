// ⚠️ Error taxonomy
// Invalid arguments are errors, "not found" is just None

use thiserror::Error;

/// Errors raised when a caller hands the library invalid input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// An absent record was offered to a store
    #[error("cannot insert an absent {kind} record")]
    MissingRecord { kind: &'static str },

    /// A ratio was built with a zero denominator
    #[error("denominator cannot be zero (numerator {numerator})")]
    ZeroDenominator { numerator: i32 },
}

pub type Result<T> = std::result::Result<T, RecordError>;
