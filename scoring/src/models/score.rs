use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::scheme::{ScoreType, SortDirection, TiebreakScheme, WorkoutScheme};
use crate::models::sort_key::SortKey;
use crate::models::status::ScoreStatus;

/// Canonical integer representation of a score in scheme base units:
/// milliseconds, grams, millimeters, packed rounds+reps, or a raw count.
pub type EncodedValue = u64;

/// Secondary measurement attached to a score for breaking ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Tiebreak {
    pub scheme: TiebreakScheme,
    pub value: EncodedValue,
}

/// One competitor's result for one event.
///
/// `value` is `None` only for non-`scored` statuses (or an unscored entry);
/// `secondary_value` is meaningful only at `cap` status, where it records
/// the work completed when the time ran out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Score {
    pub scheme: WorkoutScheme,
    #[serde(default)]
    pub score_type: Option<ScoreType>,
    pub value: Option<EncodedValue>,
    pub status: ScoreStatus,
    #[serde(default)]
    pub secondary_value: Option<EncodedValue>,
    #[serde(default)]
    pub tiebreak: Option<Tiebreak>,
}

impl Score {
    pub fn direction(&self) -> SortDirection {
        self.scheme.sort_direction(self.score_type)
    }

    /// The single-column sortable form of this score.
    pub fn sort_key(&self) -> SortKey {
        SortKey::pack(self.value, self.status, self.direction())
    }
}
