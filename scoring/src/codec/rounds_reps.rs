use crate::error::{Result, ScoringError};
use crate::models::{EncodedValue, MAX_ENCODED_VALUE};
use crate::units::REPS_PER_ROUND;

/// Parse `R+S`, `R.S` or a bare round count into `R * 100000 + S`.
pub fn encode_rounds_reps(input: &str) -> Result<EncodedValue> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ScoringError::EmptyInput);
    }

    let (rounds_part, reps_part) = match s.split_once('+') {
        Some((r, reps)) => (r, Some(reps)),
        None => match s.split_once('.') {
            Some((r, reps)) => (r, Some(reps)),
            None => (s, None),
        },
    };

    let rounds = parse_part(rounds_part, s)?;
    let reps = match reps_part {
        Some(part) => parse_part(part, s)?,
        None => 0,
    };
    if reps >= REPS_PER_ROUND {
        return Err(ScoringError::RepsOutOfRange);
    }

    rounds
        .checked_mul(REPS_PER_ROUND)
        .and_then(|v| v.checked_add(reps))
        .filter(|v| *v <= MAX_ENCODED_VALUE)
        .ok_or(ScoringError::ValueOutOfRange)
}

/// Render as `R+S`; in compact mode whole rounds drop the `+0`.
pub fn format_rounds_reps(value: EncodedValue, compact: bool) -> String {
    let rounds = value / REPS_PER_ROUND;
    let reps = value % REPS_PER_ROUND;
    if compact && reps == 0 {
        rounds.to_string()
    } else {
        format!("{rounds}+{reps}")
    }
}

fn parse_part(part: &str, full: &str) -> Result<u64> {
    let part = part.trim();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ScoringError::InvalidRoundsReps(format!(
            "'{full}' is not a valid rounds+reps score"
        )));
    }
    part.parse()
        .map_err(|_| ScoringError::InvalidRoundsReps(format!("'{full}' is out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_plus_separator() {
        assert_eq!(encode_rounds_reps("5+12").unwrap(), 500_012);
        assert_eq!(encode_rounds_reps("3 + 21").unwrap(), 300_021);
    }

    #[test]
    fn test_encode_dot_separator() {
        assert_eq!(encode_rounds_reps("5.12").unwrap(), 500_012);
    }

    #[test]
    fn test_encode_bare_rounds() {
        assert_eq!(encode_rounds_reps("7").unwrap(), 700_000);
    }

    #[test]
    fn test_reps_upper_bound() {
        assert_eq!(encode_rounds_reps("1+99999").unwrap(), 199_999);
        assert_eq!(
            encode_rounds_reps("1+100000"),
            Err(ScoringError::RepsOutOfRange)
        );
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(encode_rounds_reps("").is_err());
        assert!(encode_rounds_reps("+5").is_err());
        assert!(encode_rounds_reps("5+").is_err());
        assert!(encode_rounds_reps("-3+2").is_err());
        assert!(encode_rounds_reps("five").is_err());
    }

    #[test]
    fn test_format_verbose_and_compact() {
        assert_eq!(format_rounds_reps(500_012, false), "5+12");
        assert_eq!(format_rounds_reps(500_000, false), "5+0");
        assert_eq!(format_rounds_reps(500_000, true), "5");
        assert_eq!(format_rounds_reps(500_012, true), "5+12");
    }

    #[test]
    fn test_round_trip() {
        let encoded = encode_rounds_reps("5+12").unwrap();
        assert_eq!(format_rounds_reps(encoded, false), "5+12");
    }
}
