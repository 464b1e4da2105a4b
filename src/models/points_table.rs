//! League table rows.

use serde::{Deserialize, Serialize};

use super::{TeamId, ValidationError};

/// Points awarded for a win.
pub const POINTS_PER_WIN: u32 = 2;

/// Points awarded for a tie or a no-result.
pub const POINTS_PER_SHARE: u32 = 1;

/// One team's row in the points table. `points` and `net_run_rate` are
/// supplied with the data, not recomputed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsTableEntry {
    pub team_id: TeamId,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub tied: u32,
    pub no_result: u32,
    pub points: u32,
    pub net_run_rate: f64,
}

impl PointsTableEntry {
    /// A row for a team that has not played yet.
    pub fn new(team_id: impl Into<TeamId>) -> Self {
        Self {
            team_id: team_id.into(),
            played: 0,
            won: 0,
            lost: 0,
            tied: 0,
            no_result: 0,
            points: 0,
            net_run_rate: 0.0,
        }
    }

    /// Builder method to set the result counts.
    pub fn with_record(mut self, won: u32, lost: u32, tied: u32, no_result: u32) -> Self {
        self.won = won;
        self.lost = lost;
        self.tied = tied;
        self.no_result = no_result;
        self.played = self.played.max(
            won.saturating_add(lost)
                .saturating_add(tied)
                .saturating_add(no_result),
        );
        self
    }

    pub fn with_played(mut self, played: u32) -> Self {
        self.played = played;
        self
    }

    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    pub fn with_net_run_rate(mut self, nrr: f64) -> Self {
        self.net_run_rate = nrr;
        self
    }

    /// Points implied by the result counts.
    ///
    /// Widened so that any combination of `u32` counts fits.
    pub fn expected_points(&self) -> u64 {
        u64::from(self.won) * u64::from(POINTS_PER_WIN)
            + (u64::from(self.tied) + u64::from(self.no_result)) * u64::from(POINTS_PER_SHARE)
    }

    /// Whether the stored points agree with the result counts.
    pub fn points_consistent(&self) -> bool {
        u64::from(self.points) == self.expected_points()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        super::validation::require(self.team_id.as_str(), "teamId")?;
        let recorded = [self.won, self.lost, self.tied, self.no_result]
            .into_iter()
            .map(u64::from)
            .sum::<u64>();
        if recorded > u64::from(self.played) {
            return Err(ValidationError::ResultsExceedPlayed {
                team: self.team_id.to_string(),
                recorded,
                played: self.played,
            });
        }
        Ok(())
    }
}
