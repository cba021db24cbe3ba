pub mod aggregate;
pub mod comparator;
pub mod overall;
pub mod ranking;

pub use aggregate::{AggregatedScore, encode_rounds};
pub use comparator::{compare, is_tied};
pub use overall::{OverallEntry, OverallStanding, assign_overall_ranks};
pub use ranking::{
    DEFAULT_POINTS_STEP, PointsCurve, RankedEntry, WINNER_TAKES_MORE_TABLE, assign_ranks,
    points_for_rank, scale_points,
};
