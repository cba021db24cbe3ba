use super::TimePrecision;
use crate::error::{Result, ScoringError};
use crate::models::EncodedValue;
use crate::units::{MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};

/// Parse `H:MM:SS[.fff]`, `MM:SS[.fff]` or bare seconds into milliseconds.
///
/// Minutes may overflow 59 only when no hour component is present, so
/// `120:30` is a valid two-hour time while `1:75:00` is rejected.
pub fn encode_time(input: &str, precision: TimePrecision) -> Result<EncodedValue> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ScoringError::EmptyInput);
    }
    if s.starts_with('-') {
        return Err(ScoringError::InvalidTime(
            "negative times are not allowed".to_string(),
        ));
    }

    let parts: Vec<&str> = s.split(':').collect();
    let (hours, minutes, seconds, millis) = match parts.as_slice() {
        [secs] => {
            let (whole, frac) = split_seconds(secs)?;
            (0, 0, whole, frac)
        }
        [mins, secs] => {
            let minutes = parse_component(mins)?;
            let (whole, frac) = split_seconds(secs)?;
            if whole >= 60 {
                return Err(ScoringError::InvalidTime(format!(
                    "seconds component must be below 60 in '{s}'"
                )));
            }
            (0, minutes, whole, frac)
        }
        [hrs, mins, secs] => {
            let hours = parse_component(hrs)?;
            let minutes = parse_component(mins)?;
            let (whole, frac) = split_seconds(secs)?;
            if minutes >= 60 || whole >= 60 {
                return Err(ScoringError::InvalidTime(format!(
                    "minute and second components must be below 60 in '{s}'"
                )));
            }
            (hours, minutes, whole, frac)
        }
        _ => {
            return Err(ScoringError::InvalidTime(format!(
                "'{s}' has too many ':' separators"
            )));
        }
    };

    let millis = match precision {
        TimePrecision::Seconds => 0,
        TimePrecision::Auto | TimePrecision::Millis => millis,
    };

    hours
        .checked_mul(MS_PER_HOUR)
        .and_then(|ms| minutes.checked_mul(MS_PER_MINUTE).and_then(|m| ms.checked_add(m)))
        .and_then(|ms| seconds.checked_mul(MS_PER_SECOND).and_then(|s| ms.checked_add(s)))
        .and_then(|ms| ms.checked_add(millis))
        .filter(|ms| *ms <= crate::models::MAX_ENCODED_VALUE)
        .ok_or(ScoringError::ValueOutOfRange)
}

/// Render milliseconds as `M:SS` (`H:MM:SS` once an hour is reached),
/// with fractional seconds per the requested precision.
pub fn format_time(ms: EncodedValue, precision: TimePrecision) -> String {
    let total_seconds = ms / MS_PER_SECOND;
    let millis = ms % MS_PER_SECOND;
    let hours = total_seconds / 3600;
    let seconds = total_seconds % 60;

    let mut out = if hours > 0 {
        let minutes = (total_seconds % 3600) / 60;
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{}:{seconds:02}", total_seconds / 60)
    };

    match precision {
        TimePrecision::Seconds => {}
        TimePrecision::Millis => out.push_str(&format!(".{millis:03}")),
        TimePrecision::Auto => {
            if millis > 0 {
                let frac = format!("{millis:03}");
                out.push('.');
                out.push_str(frac.trim_end_matches('0'));
            }
        }
    }
    out
}

fn parse_component(part: &str) -> Result<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ScoringError::InvalidTime(format!(
            "'{part}' is not a valid time component"
        )));
    }
    part.parse()
        .map_err(|_| ScoringError::InvalidTime(format!("'{part}' is out of range")))
}

/// Split a seconds component into whole seconds and milliseconds; the
/// fraction is read as up to three digits, right-padded with zeros.
fn split_seconds(part: &str) -> Result<(u64, u64)> {
    let (whole, frac) = match part.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (part, None),
    };
    let whole = parse_component(whole)?;
    let millis = match frac {
        None => 0,
        Some(f) => {
            if f.is_empty() || !f.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ScoringError::InvalidTime(format!(
                    "'{part}' has an invalid fractional part"
                )));
            }
            let mut digits = f.to_string();
            digits.truncate(3);
            while digits.len() < 3 {
                digits.push('0');
            }
            digits.parse().unwrap_or(0)
        }
    };
    Ok((whole, millis))
}
