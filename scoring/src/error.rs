use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoringError>;

/// Errors produced while encoding raw score input.
///
/// These are recoverable, caller-facing failures: a malformed string never
/// aborts a batch operation, it simply comes back as an `Err` for that entry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Empty score input")]
    EmptyInput,

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid rounds+reps format: {0}")]
    InvalidRoundsReps(String),

    #[error("Reps cannot exceed 99999")]
    RepsOutOfRange,

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Enter 'pass' or 'fail'")]
    InvalidPassFail,

    #[error("CAP is only valid for timed workouts")]
    CapNotAllowed,

    #[error("Score value exceeds the sortable range")]
    ValueOutOfRange,
}
