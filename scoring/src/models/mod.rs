pub mod scheme;
pub mod score;
pub mod sort_key;
pub mod status;

pub use scheme::{ScoreType, SortDirection, TiebreakScheme, WorkoutScheme};
pub use score::{EncodedValue, Score, Tiebreak};
pub use sort_key::{MAX_ENCODED_VALUE, NULL_VALUE_SENTINEL, SortKey, UnpackedKey};
pub use status::ScoreStatus;
