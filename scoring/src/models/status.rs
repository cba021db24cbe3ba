use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Completion status of a score. The declaration order is the ranking
/// order: a lower ordinal always ranks ahead of a higher one, regardless
/// of the score values involved.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ScoreStatus {
    Scored,
    Cap,
    Dq,
    Dnf,
    Dns,
    Withdrawn,
}

impl ScoreStatus {
    /// Fixed ordinal used as the high-bit tier of a sort key.
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Scored => 0,
            Self::Cap => 1,
            Self::Dq => 2,
            Self::Dnf => 3,
            Self::Dns => 4,
            Self::Withdrawn => 5,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Scored),
            1 => Some(Self::Cap),
            2 => Some(Self::Dq),
            3 => Some(Self::Dnf),
            4 => Some(Self::Dns),
            5 => Some(Self::Withdrawn),
            _ => None,
        }
    }

    /// Whether the athlete actually produced a result on the floor.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Scored | Self::Cap)
    }
}
