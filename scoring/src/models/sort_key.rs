use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::scheme::SortDirection;
use crate::models::status::ScoreStatus;

/// Number of low bits holding the direction-normalized value; the status
/// ordinal lives above them.
const VALUE_BITS: u32 = 60;
const VALUE_MASK: u64 = (1 << VALUE_BITS) - 1;

/// All-ones low word reserved for "no value recorded". Sorts after every
/// real value within its status tier in both directions.
pub const NULL_VALUE_SENTINEL: u64 = VALUE_MASK;

/// Largest encodable score value. One below the sentinel so that a
/// descending-direction zero cannot collide with "no value".
pub const MAX_ENCODED_VALUE: u64 = NULL_VALUE_SENTINEL - 1;

/// A single 64-bit integer that sorts ascending into correct competitive
/// order regardless of scheme: status tier in the high bits, the
/// direction-normalized value in the low 60.
///
/// Callers store this in one indexed column and order by it directly; no
/// scheme-aware comparison logic is needed at query time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct SortKey(u64);

/// Result of [`SortKey::unpack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnpackedKey {
    pub status: ScoreStatus,
    pub value: Option<u64>,
}

impl SortKey {
    /// Pack a (value, status, direction) triple into one ascending-sortable
    /// integer.
    ///
    /// # Panics
    ///
    /// A value above [`MAX_ENCODED_VALUE`] is a contract violation by the
    /// caller (an encoder bug, not bad user input) and panics.
    pub fn pack(value: Option<u64>, status: ScoreStatus, direction: SortDirection) -> Self {
        let normalized = match value {
            None => NULL_VALUE_SENTINEL,
            Some(v) => {
                assert!(
                    v <= MAX_ENCODED_VALUE,
                    "encoded value {v} exceeds the 60-bit sort-key field"
                );
                match direction {
                    SortDirection::Ascending => v,
                    SortDirection::Descending => MAX_ENCODED_VALUE - v,
                }
            }
        };
        Self(((status.ordinal() as u64) << VALUE_BITS) | normalized)
    }

    /// Recover the status and original value from a key. The direction must
    /// match the one used to pack.
    pub fn unpack(self, direction: SortDirection) -> UnpackedKey {
        let ordinal = (self.0 >> VALUE_BITS) as u8;
        let status = ScoreStatus::from_ordinal(ordinal)
            .unwrap_or_else(|| panic!("sort key carries unknown status ordinal {ordinal}"));
        let normalized = self.0 & VALUE_MASK;
        let value = if normalized == NULL_VALUE_SENTINEL {
            None
        } else {
            Some(match direction {
                SortDirection::Ascending => normalized,
                SortDirection::Descending => MAX_ENCODED_VALUE - normalized,
            })
        };
        UnpackedKey { status, value }
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }

    pub fn from_u64(raw: u64) -> Self {
        Self(raw)
    }
}

// Decimal-string form for callers whose storage cannot hold a full 64-bit
// integer without precision loss.
impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SortKey {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}
