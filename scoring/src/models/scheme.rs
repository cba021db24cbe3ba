use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The measurement family a workout's score belongs to.
///
/// The scheme decides how raw input is encoded, how encoded values are
/// rendered back, and which direction sorts "better" first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum WorkoutScheme {
    Time,
    TimeWithCap,
    Emom,
    RoundsReps,
    Load,
    Reps,
    Calories,
    Points,
    Meters,
    Feet,
    PassFail,
}

impl WorkoutScheme {
    pub fn is_time_family(self) -> bool {
        matches!(self, Self::Time | Self::TimeWithCap | Self::Emom)
    }

    /// Static sort direction table: faster times rank first, everything
    /// else rewards bigger numbers.
    pub fn default_direction(self) -> SortDirection {
        if self.is_time_family() {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    /// Effective direction once an optional score type override is applied.
    /// `min` forces ascending and `max` descending; every other score type
    /// defers to the scheme default.
    pub fn sort_direction(self, score_type: Option<ScoreType>) -> SortDirection {
        match score_type {
            Some(ScoreType::Min) => SortDirection::Ascending,
            Some(ScoreType::Max) => SortDirection::Descending,
            _ => self.default_direction(),
        }
    }

    /// How multiple rounds of this scheme fold into one score when the
    /// caller does not specify a score type.
    pub fn default_score_type(self) -> ScoreType {
        match self {
            Self::Time | Self::TimeWithCap => ScoreType::Min,
            Self::PassFail => ScoreType::First,
            _ => ScoreType::Max,
        }
    }
}

/// How per-round values aggregate into a single score. `Min`/`Max` double
/// as sort-direction overrides, see [`WorkoutScheme::sort_direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScoreType {
    Min,
    Max,
    Sum,
    Average,
    First,
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Secondary measurement used only to break primary-score ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TiebreakScheme {
    Time,
    Reps,
}

impl TiebreakScheme {
    pub fn direction(self) -> SortDirection {
        match self {
            Self::Time => SortDirection::Ascending,
            Self::Reps => SortDirection::Descending,
        }
    }

    pub fn as_workout_scheme(self) -> WorkoutScheme {
        match self {
            Self::Time => WorkoutScheme::Time,
            Self::Reps => WorkoutScheme::Reps,
        }
    }
}
