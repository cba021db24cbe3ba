use crate::error::{Result, ScoringError};
use crate::models::EncodedValue;

/// Accepts `pass`/`p`/`1`/`yes` and `fail`/`f`/`0`/`no`, case-insensitive.
pub fn encode_pass_fail(input: &str) -> Result<EncodedValue> {
    match input.trim().to_lowercase().as_str() {
        "pass" | "p" | "1" | "yes" => Ok(1),
        "fail" | "f" | "0" | "no" => Ok(0),
        _ => Err(ScoringError::InvalidPassFail),
    }
}

pub fn format_pass_fail(value: EncodedValue) -> String {
    if value == 0 {
        "Fail".to_string()
    } else {
        "Pass".to_string()
    }
}
