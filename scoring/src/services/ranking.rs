//! Tie-aware rank assignment and points curves.
//!
//! Ranking is standard competition ("1224") ranking: tied entries share a
//! rank and the next distinct entry's rank is its 1-indexed position in
//! the sorted sequence, skipping the ranks the tie group consumed.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::models::{EncodedValue, Score, ScoreStatus, SortKey};
use crate::services::comparator::{compare, is_tied};

/// Front-loaded points table rewarding top finishers; ranks past the end
/// score a single point.
pub const WINNER_TAKES_MORE_TABLE: [u32; 28] = [
    100, 85, 75, 67, 60, 54, 49, 45, 41, 38, 35, 32, 30, 28, 26, 24, 22, 20, 18, 16, 14, 12, 10,
    8, 6, 4, 2, 1,
];

pub const DEFAULT_POINTS_STEP: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PointsCurve {
    /// Fixed deduction per place from 100.
    FixedStep,
    /// Lookup in [`WINNER_TAKES_MORE_TABLE`].
    WinnerTakesMore,
    /// Linear spread from 100 down to 0 across the whole field.
    EvenSpread,
}

/// One competitor's ranked result for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RankedEntry {
    pub sort_key: SortKey,
    pub secondary_value: Option<EncodedValue>,
    pub tiebreak_value: Option<EncodedValue>,
    pub status: ScoreStatus,
    pub rank: u32,
    pub points: u32,
}

/// Points for a rank under a curve. Never negative; tied competitors get
/// identical points because this is a pure function of the shared rank.
pub fn points_for_rank(curve: PointsCurve, rank: u32, athlete_count: u32, step: u32) -> u32 {
    debug_assert!(rank >= 1, "ranks are 1-indexed");
    match curve {
        PointsCurve::FixedStep => {
            (100i64 - (rank as i64 - 1) * step as i64).max(0) as u32
        }
        PointsCurve::WinnerTakesMore => WINNER_TAKES_MORE_TABLE
            .get(rank as usize - 1)
            .copied()
            .unwrap_or(1),
        PointsCurve::EvenSpread => {
            if athlete_count <= 1 {
                100
            } else {
                let spread =
                    100.0 - (rank as f64 - 1.0) * 100.0 / (athlete_count as f64 - 1.0);
                spread.round().max(0.0) as u32
            }
        }
    }
}

/// Apply a per-event percentage multiplier (basis 100) to a points total,
/// rounding half up.
pub fn scale_points(points: u32, multiplier_percent: u32) -> u32 {
    ((points as u64 * multiplier_percent as u64 + 50) / 100) as u32
}

/// Assign ranks and points over a comparator-sorted slice of scores.
///
/// The input must already be sorted by [`compare`]; feeding an unsorted
/// slice is a caller bug and trips a debug assertion.
pub fn assign_ranks(
    sorted_scores: &[Score],
    athlete_count: u32,
    curve: PointsCurve,
    step: Option<u32>,
) -> Vec<RankedEntry> {
    debug_assert!(
        sorted_scores
            .windows(2)
            .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater),
        "assign_ranks requires comparator-sorted input"
    );
    debug!(entries = sorted_scores.len(), ?curve, "assigning event ranks");

    let step = step.unwrap_or(DEFAULT_POINTS_STEP);
    let mut entries = Vec::with_capacity(sorted_scores.len());
    let mut current_rank = 1u32;

    for (index, score) in sorted_scores.iter().enumerate() {
        if index > 0 && !is_tied(&sorted_scores[index - 1], score) {
            current_rank = index as u32 + 1;
        }
        entries.push(RankedEntry {
            sort_key: score.sort_key(),
            secondary_value: score.secondary_value,
            tiebreak_value: score.tiebreak.map(|t| t.value),
            status: score.status,
            rank: current_rank,
            points: points_for_rank(curve, current_rank, athlete_count, step),
        });
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Tiebreak, TiebreakScheme, WorkoutScheme};

    fn time_score(ms: u64) -> Score {
        Score {
            scheme: WorkoutScheme::Time,
            score_type: None,
            value: Some(ms),
            status: ScoreStatus::Scored,
            secondary_value: None,
            tiebreak: None,
        }
    }

    #[test]
    fn test_two_way_tie_skips_second_rank() {
        let scores = vec![time_score(510_000), time_score(510_000), time_score(600_000)];
        let ranked = assign_ranks(&scores, 3, PointsCurve::FixedStep, Some(5));
        let ranks: Vec<u32> = ranked.iter().map(|e| e.rank).collect();
        let points: Vec<u32> = ranked.iter().map(|e| e.points).collect();
        assert_eq!(ranks, vec![1, 1, 3]);
        assert_eq!(points, vec![100, 100, 90]);
    }

    #[test]
    fn test_three_way_tie() {
        let scores = vec![
            time_score(510_000),
            time_score(510_000),
            time_score(510_000),
            time_score(600_000),
        ];
        let ranked = assign_ranks(&scores, 4, PointsCurve::FixedStep, None);
        let ranks: Vec<u32> = ranked.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 1, 1, 4]);
    }

    #[test]
    fn test_capped_entries_with_distinct_secondary_are_not_tied() {
        let capped = |secondary: u64| Score {
            scheme: WorkoutScheme::TimeWithCap,
            score_type: None,
            value: Some(720_000),
            status: ScoreStatus::Cap,
            secondary_value: Some(secondary),
            tiebreak: None,
        };
        let scores = vec![capped(150), capped(140)];
        let ranked = assign_ranks(&scores, 2, PointsCurve::FixedStep, None);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].rank, 2);
    }

    #[test]
    fn test_tiebreak_values_separate_equal_primaries() {
        let with_tiebreak = |tb: u64| Score {
            scheme: WorkoutScheme::Time,
            score_type: None,
            value: Some(510_000),
            status: ScoreStatus::Scored,
            secondary_value: None,
            tiebreak: Some(Tiebreak {
                scheme: TiebreakScheme::Time,
                value: tb,
            }),
        };
        let scores = vec![with_tiebreak(510_000), with_tiebreak(540_000)];
        let ranked = assign_ranks(&scores, 2, PointsCurve::FixedStep, None);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].rank, 2);
    }

    #[test]
    fn test_unscored_entries_rank_last_and_tie() {
        let mut dnf = time_score(0);
        dnf.value = None;
        dnf.status = ScoreStatus::Dnf;
        let scores = vec![time_score(510_000), dnf.clone(), dnf];
        let ranked = assign_ranks(&scores, 3, PointsCurve::FixedStep, None);
        let ranks: Vec<u32> = ranked.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 2]);
    }

    #[test]
    fn test_fixed_step_floor_at_zero() {
        assert_eq!(points_for_rank(PointsCurve::FixedStep, 21, 10, 5), 0);
        assert_eq!(points_for_rank(PointsCurve::FixedStep, 22, 10, 5), 0);
        assert_eq!(points_for_rank(PointsCurve::FixedStep, 1, 10, 5), 100);
        assert_eq!(points_for_rank(PointsCurve::FixedStep, 2, 10, 10), 90);
    }

    #[test]
    fn test_winner_takes_more_table_and_tail() {
        assert_eq!(points_for_rank(PointsCurve::WinnerTakesMore, 1, 30, 5), 100);
        assert_eq!(points_for_rank(PointsCurve::WinnerTakesMore, 2, 30, 5), 85);
        assert_eq!(points_for_rank(PointsCurve::WinnerTakesMore, 28, 30, 5), 1);
        assert_eq!(points_for_rank(PointsCurve::WinnerTakesMore, 29, 30, 5), 1);
        assert_eq!(points_for_rank(PointsCurve::WinnerTakesMore, 100, 200, 5), 1);
    }

    #[test]
    fn test_even_spread_endpoints() {
        assert_eq!(points_for_rank(PointsCurve::EvenSpread, 1, 1, 5), 100);
        assert_eq!(points_for_rank(PointsCurve::EvenSpread, 1, 11, 5), 100);
        assert_eq!(points_for_rank(PointsCurve::EvenSpread, 11, 11, 5), 0);
        assert_eq!(points_for_rank(PointsCurve::EvenSpread, 6, 11, 5), 50);
    }

    #[test]
    fn test_scale_points_rounds_half_up() {
        assert_eq!(scale_points(100, 100), 100);
        assert_eq!(scale_points(85, 150), 128); // 127.5 rounds up
        assert_eq!(scale_points(90, 50), 45);
        assert_eq!(scale_points(0, 200), 0);
    }

    #[test]
    fn test_empty_field() {
        let ranked = assign_ranks(&[], 0, PointsCurve::FixedStep, None);
        assert!(ranked.is_empty());
    }
}
