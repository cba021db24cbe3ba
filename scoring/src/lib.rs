//! Competition scoring core: encodes heterogeneous score types (times,
//! rounds+reps, loads, distances, counts, pass/fail) into totally ordered
//! integers, and turns sorted score sequences into tie-aware ranks and
//! points.
//!
//! Everything here is pure and synchronous. Callers hand in raw score
//! strings and previously stored encoded values; they get back encoded
//! integers for storage, display strings, sort keys for index-ordered
//! leaderboard queries, and per-event / overall rankings.

pub mod codec;
pub mod error;
pub mod models;
pub mod parser;
pub mod services;
pub mod units;

pub use codec::{DecodeOptions, EncodeOptions, TimePrecision, decode, encode};
pub use error::{Result, ScoringError};
pub use models::{
    EncodedValue, MAX_ENCODED_VALUE, Score, ScoreStatus, ScoreType, SortDirection, SortKey,
    Tiebreak, TiebreakScheme, WorkoutScheme,
};
pub use parser::{ParseOptions, ParseOutcome, is_outlier, parse, parse_tiebreak};
pub use services::{
    AggregatedScore, OverallEntry, OverallStanding, PointsCurve, RankedEntry, assign_overall_ranks,
    assign_ranks, compare, encode_rounds, is_tied, points_for_rank, scale_points,
};
pub use units::{DistanceUnit, WeightUnit};
