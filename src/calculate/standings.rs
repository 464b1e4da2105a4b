//! League table ranking.

use std::cmp::Ordering;

use serde::Serialize;

use crate::models::PointsTableEntry;

/// Number of top rows that qualify for the playoffs.
pub const QUALIFYING_SPOTS: usize = 4;

/// A points-table row with its position in the ranked table.
#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry<'a> {
    /// 1-based table position
    pub position: usize,

    /// Whether this row sits in the qualifying zone
    pub qualifying: bool,

    pub entry: &'a PointsTableEntry,
}

/// Ordering used by the table: points first, then net run rate, both descending.
pub fn compare_entries(a: &PointsTableEntry, b: &PointsTableEntry) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.net_run_rate.total_cmp(&a.net_run_rate))
}

/// Rank entries with the default qualifying zone.
pub fn rank_standings(entries: &[PointsTableEntry]) -> Vec<RankedEntry<'_>> {
    rank_standings_with(entries, QUALIFYING_SPOTS)
}

/// Rank entries, tagging the first `qualifying_spots` rows.
///
/// The sort is stable: rows level on both points and net run rate keep
/// their input order. Rows are not checked against the team list.
pub fn rank_standings_with(
    entries: &[PointsTableEntry],
    qualifying_spots: usize,
) -> Vec<RankedEntry<'_>> {
    let mut sorted: Vec<&PointsTableEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| compare_entries(a, b));

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, entry)| RankedEntry {
            position: i + 1,
            qualifying: i < qualifying_spots,
            entry,
        })
        .collect()
}
