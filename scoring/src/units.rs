use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MS_PER_SECOND: u64 = 1_000;
pub const MS_PER_MINUTE: u64 = 60_000;
pub const MS_PER_HOUR: u64 = 3_600_000;

/// Radix used to pack rounds+reps scores into a single integer:
/// `rounds * REPS_PER_ROUND + reps`, so reps must stay below it.
pub const REPS_PER_ROUND: u64 = 100_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Lbs,
    Kg,
}

impl WeightUnit {
    pub fn grams_per_unit(self) -> Decimal {
        match self {
            Self::Lbs => Decimal::new(45_359_237, 5),
            Self::Kg => Decimal::new(1_000, 0),
        }
    }

    /// Display precision when converting grams back for this unit.
    pub fn display_decimals(self) -> u32 {
        match self {
            Self::Lbs => 0,
            Self::Kg => 1,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Lbs => " lbs",
            Self::Kg => " kg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DistanceUnit {
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "km")]
    Kilometers,
    #[serde(rename = "ft")]
    Feet,
    #[serde(rename = "mi")]
    Miles,
}

impl DistanceUnit {
    pub fn mm_per_unit(self) -> Decimal {
        match self {
            Self::Meters => Decimal::new(1_000, 0),
            Self::Kilometers => Decimal::new(1_000_000, 0),
            Self::Feet => Decimal::new(3_048, 1),
            Self::Miles => Decimal::new(1_609_344, 0),
        }
    }

    pub fn display_decimals(self) -> u32 {
        match self {
            Self::Meters | Self::Feet => 1,
            Self::Kilometers | Self::Miles => 2,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Kilometers => "km",
            Self::Feet => "ft",
            Self::Miles => "mi",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::ToPrimitive;

    #[test]
    fn test_time_constants() {
        assert_eq!(MS_PER_MINUTE, 60 * MS_PER_SECOND);
        assert_eq!(MS_PER_HOUR, 60 * MS_PER_MINUTE);
    }

    #[test]
    fn test_grams_per_pound() {
        let grams = WeightUnit::Lbs.grams_per_unit();
        assert_eq!(grams.to_f64().unwrap(), 453.59237);
    }

    #[test]
    fn test_mm_per_foot() {
        let mm = DistanceUnit::Feet.mm_per_unit();
        assert_eq!(mm.to_f64().unwrap(), 304.8);
    }

    #[test]
    fn test_unit_serde_names() {
        assert_eq!(serde_json::to_string(&WeightUnit::Lbs).unwrap(), "\"lbs\"");
        assert_eq!(serde_json::to_string(&WeightUnit::Kg).unwrap(), "\"kg\"");
        assert_eq!(serde_json::to_string(&DistanceUnit::Feet).unwrap(), "\"ft\"");
        assert_eq!(
            serde_json::to_string(&DistanceUnit::Kilometers).unwrap(),
            "\"km\""
        );
    }
}
