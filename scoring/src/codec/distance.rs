use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{Result, ScoringError};
use crate::models::{EncodedValue, MAX_ENCODED_VALUE};
use crate::units::DistanceUnit;

/// Parse a non-negative decimal distance in the given unit and encode it
/// as whole millimeters (truncating).
pub fn encode_distance(input: &str, unit: DistanceUnit) -> Result<EncodedValue> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ScoringError::EmptyInput);
    }
    let distance =
        Decimal::from_str(s).map_err(|_| ScoringError::InvalidNumber(s.to_string()))?;
    if distance.is_sign_negative() {
        return Err(ScoringError::InvalidNumber(s.to_string()));
    }

    let mm = (distance * unit.mm_per_unit()).trunc();
    mm.to_u64()
        .filter(|v| *v <= MAX_ENCODED_VALUE)
        .ok_or(ScoringError::ValueOutOfRange)
}

/// Convert millimeters back to the display unit, trailing zeros trimmed,
/// optionally suffixed (`1000m`, `100ft`).
pub fn format_distance(mm: EncodedValue, unit: DistanceUnit, unit_suffix: bool) -> String {
    let converted = (Decimal::from(mm) / unit.mm_per_unit()).round_dp(unit.display_decimals());
    let mut out = converted.normalize().to_string();
    if unit_suffix {
        out.push_str(unit.suffix());
    }
    out
}
