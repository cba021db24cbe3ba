//! Multi-event aggregation: total points with countback tiebreakers.

use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

/// Per-competitor input: summed event points plus the event ranks the
/// countback tiebreakers are computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OverallEntry {
    pub competitor_id: String,
    pub total_points: u32,
    pub per_event_ranks: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OverallStanding {
    pub competitor_id: String,
    pub total_points: u32,
    pub first_places: u32,
    pub second_places: u32,
    pub overall_rank: u32,
}

/// Rank the overall standings: total points descending, ties broken by
/// count of event wins, then count of event runner-up finishes. Entries
/// equal on all three keys share a rank, 1224-style.
pub fn assign_overall_ranks(entries: &[OverallEntry]) -> Vec<OverallStanding> {
    debug!(competitors = entries.len(), "assigning overall ranks");

    let mut standings: Vec<OverallStanding> = entries
        .iter()
        .map(|entry| OverallStanding {
            competitor_id: entry.competitor_id.clone(),
            total_points: entry.total_points,
            first_places: entry.per_event_ranks.iter().filter(|r| **r == 1).count() as u32,
            second_places: entry.per_event_ranks.iter().filter(|r| **r == 2).count() as u32,
            overall_rank: 0,
        })
        .collect();

    standings.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then(b.first_places.cmp(&a.first_places))
            .then(b.second_places.cmp(&a.second_places))
    });

    let mut current_rank = 1u32;
    let mut previous: Option<(u32, u32, u32)> = None;
    for (index, standing) in standings.iter_mut().enumerate() {
        let key = (
            standing.total_points,
            standing.first_places,
            standing.second_places,
        );
        if previous.is_some_and(|p| p != key) {
            current_rank = index as u32 + 1;
        }
        standing.overall_rank = current_rank;
        previous = Some(key);
    }
    standings
}
