use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{Result, ScoringError};
use crate::models::{EncodedValue, MAX_ENCODED_VALUE};
use crate::units::WeightUnit;

/// Parse a non-negative decimal weight in the given unit and encode it as
/// whole grams (truncating sub-gram remainders).
pub fn encode_load(input: &str, unit: WeightUnit) -> Result<EncodedValue> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ScoringError::EmptyInput);
    }
    let weight =
        Decimal::from_str(s).map_err(|_| ScoringError::InvalidNumber(s.to_string()))?;
    if weight.is_sign_negative() {
        return Err(ScoringError::InvalidNumber(s.to_string()));
    }

    let grams = (weight * unit.grams_per_unit()).trunc();
    grams
        .to_u64()
        .filter(|g| *g <= MAX_ENCODED_VALUE)
        .ok_or(ScoringError::ValueOutOfRange)
}

/// Convert grams back to the display unit: whole pounds, or kilograms to
/// one decimal, trailing zeros trimmed.
pub fn format_load(grams: EncodedValue, unit: WeightUnit, unit_suffix: bool) -> String {
    let converted =
        (Decimal::from(grams) / unit.grams_per_unit()).round_dp(unit.display_decimals());
    let mut out = converted.normalize().to_string();
    if unit_suffix {
        out.push_str(unit.suffix());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_pounds_to_grams() {
        assert_eq!(encode_load("225", WeightUnit::Lbs).unwrap(), 102_058);
        assert_eq!(encode_load("185", WeightUnit::Lbs).unwrap(), 83_914);
    }

    #[test]
    fn test_encode_kilograms_to_grams() {
        assert_eq!(encode_load("100", WeightUnit::Kg).unwrap(), 100_000);
        assert_eq!(encode_load("102.5", WeightUnit::Kg).unwrap(), 102_500);
    }

    #[test]
    fn test_rejects_invalid_weights() {
        assert!(encode_load("", WeightUnit::Lbs).is_err());
        assert!(encode_load("-225", WeightUnit::Lbs).is_err());
        assert!(encode_load("heavy", WeightUnit::Lbs).is_err());
    }

    #[test]
    fn test_format_pounds_rounds_to_whole() {
        assert_eq!(format_load(102_058, WeightUnit::Lbs, false), "225");
        assert_eq!(format_load(83_914, WeightUnit::Lbs, false), "185");
    }

    #[test]
    fn test_format_kilograms_one_decimal() {
        assert_eq!(format_load(102_500, WeightUnit::Kg, false), "102.5");
        // Trailing zero trimmed
        assert_eq!(format_load(100_000, WeightUnit::Kg, false), "100");
    }

    #[test]
    fn test_format_with_suffix() {
        assert_eq!(format_load(102_058, WeightUnit::Lbs, true), "225 lbs");
        assert_eq!(format_load(102_500, WeightUnit::Kg, true), "102.5 kg");
    }

    #[test]
    fn test_round_trip_display_equivalence() {
        for raw in ["225", "135", "0"] {
            let grams = encode_load(raw, WeightUnit::Lbs).unwrap();
            assert_eq!(format_load(grams, WeightUnit::Lbs, false), raw);
        }
    }
}
