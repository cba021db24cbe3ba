use crate::error::{Result, ScoringError};
use crate::models::{EncodedValue, MAX_ENCODED_VALUE, WorkoutScheme};

/// Parse a non-negative integer count. The encoding is the identity.
pub fn encode_count(input: &str) -> Result<EncodedValue> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ScoringError::EmptyInput);
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ScoringError::InvalidNumber(s.to_string()));
    }
    s.parse::<u64>()
        .ok()
        .filter(|v| *v <= MAX_ENCODED_VALUE)
        .ok_or(ScoringError::ValueOutOfRange)
}

/// Render a count, appending the scheme's suffix only when asked.
pub fn format_count(value: EncodedValue, scheme: WorkoutScheme, unit_suffix: bool) -> String {
    let mut out = value.to_string();
    if unit_suffix {
        out.push_str(match scheme {
            WorkoutScheme::Reps => " reps",
            WorkoutScheme::Calories => " cal",
            WorkoutScheme::Points => " pts",
            _ => "",
        });
    }
    out
}
