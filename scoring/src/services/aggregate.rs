//! Multi-round score encoding: each round's raw entry is encoded through
//! the codec, then folded into one value by the workout's score type.

use serde::Serialize;
use utoipa::ToSchema;

use crate::codec::{self, EncodeOptions};
use crate::error::{Result, ScoringError};
use crate::models::{EncodedValue, MAX_ENCODED_VALUE, ScoreType, WorkoutScheme};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AggregatedScore {
    /// The single value the event is ranked on.
    pub aggregated: EncodedValue,
    /// Per-round encoded values, in entry order, for the caller to persist.
    pub rounds: Vec<EncodedValue>,
}

/// Encode each round and fold with the given score type (or the scheme's
/// default: fastest round for time, first attempt for pass/fail, best
/// round otherwise).
pub fn encode_rounds<S: AsRef<str>>(
    raw_rounds: &[S],
    scheme: WorkoutScheme,
    score_type: Option<ScoreType>,
    options: &EncodeOptions,
) -> Result<AggregatedScore> {
    if raw_rounds.is_empty() {
        return Err(ScoringError::EmptyInput);
    }

    let rounds = raw_rounds
        .iter()
        .map(|raw| codec::encode(raw.as_ref(), scheme, options))
        .collect::<Result<Vec<_>>>()?;

    let score_type = score_type.unwrap_or(scheme.default_score_type());
    let aggregated = match score_type {
        ScoreType::Min => rounds.iter().min().copied().unwrap_or(0),
        ScoreType::Max => rounds.iter().max().copied().unwrap_or(0),
        ScoreType::First => rounds[0],
        ScoreType::Last => rounds[rounds.len() - 1],
        ScoreType::Sum => checked_sum(&rounds)?,
        ScoreType::Average => checked_sum(&rounds)? / rounds.len() as u64,
    };

    Ok(AggregatedScore { aggregated, rounds })
}

fn checked_sum(rounds: &[EncodedValue]) -> Result<EncodedValue> {
    rounds
        .iter()
        .try_fold(0u64, |acc, v| acc.checked_add(*v))
        .filter(|sum| *sum <= MAX_ENCODED_VALUE)
        .ok_or(ScoringError::ValueOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_defaults_to_fastest_round() {
        let result = encode_rounds(
            &["2:00", "1:30", "2:30"],
            WorkoutScheme::Time,
            None,
            &EncodeOptions::default(),
        )
        .unwrap();
        assert_eq!(result.aggregated, 90_000);
        assert_eq!(result.rounds, vec![120_000, 90_000, 150_000]);
    }

    #[test]
    fn test_load_defaults_to_heaviest_round() {
        let result = encode_rounds(
            &["135", "185", "225", "275", "225"],
            WorkoutScheme::Load,
            None,
            &EncodeOptions::default(),
        )
        .unwrap();
        assert_eq!(result.aggregated, 124_737); // 275 lbs in grams
    }

    #[test]
    fn test_explicit_score_types() {
        let options = EncodeOptions::default();
        let sum = encode_rounds(&["2:00", "1:30"], WorkoutScheme::Time, Some(ScoreType::Sum), &options)
            .unwrap();
        assert_eq!(sum.aggregated, 210_000);

        let avg = encode_rounds(
            &["10", "15", "12"],
            WorkoutScheme::Reps,
            Some(ScoreType::Average),
            &options,
        )
        .unwrap();
        assert_eq!(avg.aggregated, 12);

        let first = encode_rounds(
            &["135", "225"],
            WorkoutScheme::Load,
            Some(ScoreType::First),
            &options,
        )
        .unwrap();
        assert_eq!(first.aggregated, 61_234); // 135 lbs

        let last = encode_rounds(
            &["135", "225"],
            WorkoutScheme::Load,
            Some(ScoreType::Last),
            &options,
        )
        .unwrap();
        assert_eq!(last.aggregated, 102_058);
    }

    #[test]
    fn test_pass_fail_defaults_to_first_attempt() {
        let result = encode_rounds(
            &["pass", "fail", "pass"],
            WorkoutScheme::PassFail,
            None,
            &EncodeOptions::default(),
        )
        .unwrap();
        assert_eq!(result.aggregated, 1);
    }

    #[test]
    fn test_empty_rounds_error() {
        let result = encode_rounds::<&str>(&[], WorkoutScheme::Time, None, &EncodeOptions::default());
        assert_eq!(result, Err(ScoringError::EmptyInput));
    }

    #[test]
    fn test_bad_round_propagates_error() {
        let result = encode_rounds(
            &["2:00", "junk"],
            WorkoutScheme::Time,
            None,
            &EncodeOptions::default(),
        );
        assert!(result.is_err());
    }
}
