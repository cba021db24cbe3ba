//! Per-scheme score codec: raw string in, canonical integer out, and back
//! to a display string. Adding a scheme means extending [`WorkoutScheme`]
//! and the two matches below — the compiler finds every dispatch site.

pub mod count;
pub mod distance;
pub mod load;
pub mod pass_fail;
pub mod rounds_reps;
pub mod time;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::Result;
use crate::models::{EncodedValue, WorkoutScheme};
use crate::units::{DistanceUnit, WeightUnit};

/// How fractional seconds are treated when parsing and rendering times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TimePrecision {
    /// Keep milliseconds on encode; show them only when non-zero.
    #[default]
    Auto,
    /// Truncate to whole seconds on encode; never show milliseconds.
    Seconds,
    /// Keep milliseconds on encode; always show three digits.
    #[serde(rename = "ms")]
    Millis,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    pub weight_unit: WeightUnit,
    /// Unit the raw distance input is expressed in; defaults to the
    /// scheme's native unit (`m` for meters events, `ft` for feet events).
    pub distance_unit: Option<DistanceUnit>,
    pub time_precision: TimePrecision,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub weight_unit: WeightUnit,
    pub distance_unit: Option<DistanceUnit>,
    pub time_precision: TimePrecision,
    /// Compact rendering, e.g. `5` instead of `5+0` for whole rounds.
    pub compact: bool,
    /// Append the scheme's unit suffix (` lbs`, ` reps`, `m`, …).
    pub unit_suffix: bool,
}

fn native_distance_unit(scheme: WorkoutScheme) -> DistanceUnit {
    match scheme {
        WorkoutScheme::Feet => DistanceUnit::Feet,
        _ => DistanceUnit::Meters,
    }
}

/// Encode a raw score string into the scheme's canonical integer.
/// Malformed input comes back as an `Err` value; nothing panics.
pub fn encode(input: &str, scheme: WorkoutScheme, options: &EncodeOptions) -> Result<EncodedValue> {
    match scheme {
        WorkoutScheme::Time | WorkoutScheme::TimeWithCap | WorkoutScheme::Emom => {
            time::encode_time(input, options.time_precision)
        }
        WorkoutScheme::RoundsReps => rounds_reps::encode_rounds_reps(input),
        WorkoutScheme::Load => load::encode_load(input, options.weight_unit),
        WorkoutScheme::Meters | WorkoutScheme::Feet => distance::encode_distance(
            input,
            options.distance_unit.unwrap_or(native_distance_unit(scheme)),
        ),
        WorkoutScheme::Reps | WorkoutScheme::Calories | WorkoutScheme::Points => {
            count::encode_count(input)
        }
        WorkoutScheme::PassFail => pass_fail::encode_pass_fail(input),
    }
}

/// Render an encoded value back into a display string.
pub fn decode(value: EncodedValue, scheme: WorkoutScheme, options: &DecodeOptions) -> String {
    match scheme {
        WorkoutScheme::Time | WorkoutScheme::TimeWithCap | WorkoutScheme::Emom => {
            time::format_time(value, options.time_precision)
        }
        WorkoutScheme::RoundsReps => rounds_reps::format_rounds_reps(value, options.compact),
        WorkoutScheme::Load => {
            load::format_load(value, options.weight_unit, options.unit_suffix)
        }
        WorkoutScheme::Meters | WorkoutScheme::Feet => distance::format_distance(
            value,
            options.distance_unit.unwrap_or(native_distance_unit(scheme)),
            options.unit_suffix,
        ),
        WorkoutScheme::Reps | WorkoutScheme::Calories | WorkoutScheme::Points => {
            count::format_count(value, scheme, options.unit_suffix)
        }
        WorkoutScheme::PassFail => pass_fail::format_pass_fail(value),
    }
}
