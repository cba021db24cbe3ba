//! Tolerant input layer for scoreboard entry. Accepts what a judge would
//! actually type — digit-only times, bare round counts, status words —
//! normalizes it through the codec, and echoes back the canonical form
//! that will be stored.

use tracing::warn;

use crate::codec::{self, DecodeOptions, EncodeOptions, TimePrecision, time};
use crate::error::{Result, ScoringError};
use crate::models::{EncodedValue, ScoreStatus, TiebreakScheme, WorkoutScheme};
use crate::units::{DistanceUnit, WeightUnit};

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Reject ambiguous input instead of warning (e.g. a bare number for a
    /// rounds+reps score).
    pub strict: bool,
    pub weight_unit: WeightUnit,
    pub distance_unit: Option<DistanceUnit>,
    pub time_precision: TimePrecision,
    /// Time cap in milliseconds for `time-with-cap` workouts; a parsed
    /// time equal to the cap is reclassified as CAP.
    pub time_cap_ms: Option<EncodedValue>,
    /// Tiebreak configured for the workout, if any; drives `needs_tiebreak`.
    pub tiebreak_scheme: Option<TiebreakScheme>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub is_valid: bool,
    pub encoded: Option<EncodedValue>,
    /// Canonical echo of what will be stored, for display back to the judge.
    pub formatted: String,
    pub status: Option<ScoreStatus>,
    pub needs_tiebreak: bool,
    pub error: Option<ScoringError>,
    pub warnings: Vec<String>,
}

impl ParseOutcome {
    fn empty() -> Self {
        Self {
            is_valid: false,
            encoded: None,
            formatted: String::new(),
            status: None,
            needs_tiebreak: false,
            error: None,
            warnings: Vec::new(),
        }
    }

    fn invalid(raw: &str, error: ScoringError) -> Self {
        Self {
            is_valid: false,
            encoded: None,
            formatted: raw.to_string(),
            status: None,
            needs_tiebreak: false,
            error: Some(error),
            warnings: Vec::new(),
        }
    }

    fn valid(encoded: Option<EncodedValue>, formatted: String, status: ScoreStatus) -> Self {
        Self {
            is_valid: true,
            encoded,
            formatted,
            status: Some(status),
            needs_tiebreak: false,
            error: None,
            warnings: Vec::new(),
        }
    }
}

/// Parse raw scoreboard input for a scheme. Pure function of its inputs.
pub fn parse(input: &str, scheme: WorkoutScheme, options: &ParseOptions) -> ParseOutcome {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ParseOutcome::empty();
    }

    let lowered = trimmed.to_lowercase();
    let mut outcome = if let Some(status) = parse_status_token(&lowered, scheme, options) {
        status
    } else {
        match scheme {
            WorkoutScheme::Time | WorkoutScheme::TimeWithCap | WorkoutScheme::Emom => {
                parse_time_input(trimmed, options)
            }
            WorkoutScheme::RoundsReps => parse_rounds_reps_input(&lowered, options),
            _ => parse_via_codec(trimmed, scheme, options),
        }
    };

    if outcome.is_valid {
        outcome.needs_tiebreak = options.tiebreak_scheme.is_some()
            && (matches!(
                scheme,
                WorkoutScheme::RoundsReps | WorkoutScheme::Reps | WorkoutScheme::Emom
            ) || outcome.status == Some(ScoreStatus::Cap));
    }
    outcome
}

/// Parse a tiebreak entry: `time` tiebreaks go through the tolerant time
/// parser, `reps` tiebreaks through the count codec.
pub fn parse_tiebreak(
    input: &str,
    scheme: TiebreakScheme,
    options: &ParseOptions,
) -> ParseOutcome {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ParseOutcome::empty();
    }

    match scheme {
        TiebreakScheme::Time => match parse_time_value(trimmed, options.time_precision) {
            Err(error) => ParseOutcome::invalid(trimmed, error),
            Ok(ms) => ParseOutcome::valid(
                Some(ms),
                time::format_time(ms, options.time_precision),
                ScoreStatus::Scored,
            ),
        },
        TiebreakScheme::Reps => match codec::count::encode_count(trimmed) {
            Err(error) => ParseOutcome::invalid(trimmed, error),
            Ok(reps) => ParseOutcome::valid(
                Some(reps),
                codec::count::format_count(reps, WorkoutScheme::Reps, true),
                ScoreStatus::Scored,
            ),
        },
    }
}

/// Flag a score more than two standard deviations away from its field's
/// mean. Fields smaller than three scores never flag.
pub fn is_outlier(score_value: f64, field_scores: &[f64]) -> bool {
    if field_scores.len() < 3 {
        return false;
    }
    let n = field_scores.len() as f64;
    let mean = field_scores.iter().sum::<f64>() / n;
    let variance = field_scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
    (score_value - mean).abs() > 2.0 * variance.sqrt()
}

fn parse_status_token(
    lowered: &str,
    scheme: WorkoutScheme,
    options: &ParseOptions,
) -> Option<ParseOutcome> {
    let outcome = match lowered {
        "dns" | "did not start" => {
            ParseOutcome::valid(None, "DNS".to_string(), ScoreStatus::Dns)
        }
        "dnf" | "did not finish" => {
            ParseOutcome::valid(None, "DNF".to_string(), ScoreStatus::Dnf)
        }
        "dq" | "disqualified" => ParseOutcome::valid(None, "DQ".to_string(), ScoreStatus::Dq),
        "wd" | "withdrawn" => {
            ParseOutcome::valid(None, "WD".to_string(), ScoreStatus::Withdrawn)
        }
        "cap" | "c" => {
            if !scheme.is_time_family() {
                return Some(ParseOutcome::invalid(lowered, ScoringError::CapNotAllowed));
            }
            let formatted = match options.time_cap_ms {
                Some(cap) => format!("CAP ({})", time::format_time(cap, options.time_precision)),
                None => "CAP".to_string(),
            };
            ParseOutcome::valid(options.time_cap_ms, formatted, ScoreStatus::Cap)
        }
        _ => return None,
    };
    Some(outcome)
}

fn parse_time_value(raw: &str, precision: TimePrecision) -> Result<EncodedValue> {
    if raw.contains(':') {
        time::encode_time(raw, precision)
    } else {
        reinterpret_digit_run(raw, precision)
    }
}

/// Positional reinterpretation of a separator-free digit run: scoreboards
/// favor rapid digit-only entry, so `1234` means 12:34 and `12345` means
/// 1:23:45. A decimal suffix is milliseconds in every branch.
fn reinterpret_digit_run(raw: &str, precision: TimePrecision) -> Result<EncodedValue> {
    let (digits, frac) = match raw.split_once('.') {
        Some((d, f)) => (d, Some(f)),
        None => (raw, None),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ScoringError::InvalidTime(format!(
            "'{raw}' is not a valid time"
        )));
    }

    let mut canonical = match digits.len() {
        1 | 2 => digits.to_string(),
        3 => format!("{}:{}", &digits[..1], &digits[1..]),
        4 => format!("{}:{}", &digits[..2], &digits[2..]),
        n => format!(
            "{}:{}:{}",
            &digits[..n - 4],
            &digits[n - 4..n - 2],
            &digits[n - 2..]
        ),
    };
    if let Some(frac) = frac {
        canonical.push('.');
        canonical.push_str(frac);
    }
    time::encode_time(&canonical, precision)
}

fn parse_time_input(raw: &str, options: &ParseOptions) -> ParseOutcome {
    let ms = match parse_time_value(raw, options.time_precision) {
        Ok(ms) => ms,
        Err(error) => return ParseOutcome::invalid(raw, error),
    };

    if let Some(cap) = options.time_cap_ms {
        if ms == cap {
            let formatted = format!("CAP ({})", time::format_time(cap, options.time_precision));
            return ParseOutcome::valid(Some(ms), formatted, ScoreStatus::Cap);
        }
        if ms > cap {
            let mut outcome = ParseOutcome::valid(
                Some(ms),
                time::format_time(ms, options.time_precision),
                ScoreStatus::Scored,
            );
            outcome.warnings.push(format!(
                "Time exceeds cap of {}",
                time::format_time(cap, options.time_precision)
            ));
            return outcome;
        }
    }

    ParseOutcome::valid(
        Some(ms),
        time::format_time(ms, options.time_precision),
        ScoreStatus::Scored,
    )
}

fn parse_rounds_reps_input(lowered: &str, options: &ParseOptions) -> ParseOutcome {
    let explicit = lowered.contains('+') || lowered.contains('.');
    if !explicit && options.strict {
        return ParseOutcome::invalid(
            lowered,
            ScoringError::InvalidRoundsReps(
                "bare number is ambiguous, enter rounds+reps".to_string(),
            ),
        );
    }

    match codec::rounds_reps::encode_rounds_reps(lowered) {
        Err(error) => ParseOutcome::invalid(lowered, error),
        Ok(value) => {
            let mut outcome = ParseOutcome::valid(
                Some(value),
                codec::rounds_reps::format_rounds_reps(value, true),
                ScoreStatus::Scored,
            );
            if !explicit {
                warn!(input = %lowered, "bare rounds+reps score accepted as complete rounds");
                outcome
                    .warnings
                    .push("Interpreted as complete rounds".to_string());
            }
            outcome
        }
    }
}

fn parse_via_codec(raw: &str, scheme: WorkoutScheme, options: &ParseOptions) -> ParseOutcome {
    let encode_options = EncodeOptions {
        weight_unit: options.weight_unit,
        distance_unit: options.distance_unit,
        time_precision: options.time_precision,
    };
    match codec::encode(raw, scheme, &encode_options) {
        Err(error) => ParseOutcome::invalid(raw, error),
        Ok(value) => {
            let decode_options = DecodeOptions {
                weight_unit: options.weight_unit,
                distance_unit: options.distance_unit,
                time_precision: options.time_precision,
                compact: true,
                unit_suffix: true,
            };
            ParseOutcome::valid(
                Some(value),
                codec::decode(value, scheme, &decode_options),
                ScoreStatus::Scored,
            )
        }
    }
}
