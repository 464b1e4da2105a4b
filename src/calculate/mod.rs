//! League computations.
//!
//! Pure functions over the store's collections:
//! - League table ranking and the qualifying zone
//! - Per-match scoreboards (score lines, chase flag, batting/bowling rows)
//! - Player leaderboards and role breakdowns
//! - Fixture and directory selection for the browse pages
//! - Data-quality reporting
//!
//! Nothing here mutates or caches; callers recompute on every request.

pub mod directory;
pub mod fixtures;
pub mod integrity;
pub mod leaderboards;
pub mod scoreboard;
pub mod standings;

pub use directory::{filter_players, roster, search_teams, PlayerFilter};
pub use fixtures::{by_status, featured_match, recent_results, search_matches, RECENT_RESULTS};
pub use integrity::{find_issues, DataIssue};
pub use leaderboards::{
    role_distribution, stat_leaders, top_by, top_performer_for_role, LeaderRow, RoleCount, Stat,
};
pub use scoreboard::{
    BattingRow, BowlingRow, InningsView, MatchScoreboard, ScoreLine, UNKNOWN_PLAYER,
};
pub use standings::{rank_standings, rank_standings_with, RankedEntry, QUALIFYING_SPOTS};

use crate::models::PointsTableEntry;

/// Win percentage for a table row; no-results don't count as games decided.
pub fn win_percentage(entry: &PointsTableEntry) -> f64 {
    let decided = entry.played.saturating_sub(entry.no_result);
    if decided == 0 {
        0.0
    } else {
        f64::from(entry.won) / f64::from(decided)
    }
}
