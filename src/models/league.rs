//! A point-in-time copy of every league collection.

use serde::{Deserialize, Serialize};

use super::{Match, MatchId, Player, PlayerId, PointsTableEntry, Team, TeamId};

/// All league data, as handed to the computations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSnapshot {
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub matches: Vec<Match>,
    pub points_table: Vec<PointsTableEntry>,
}

impl LeagueSnapshot {
    pub fn team(&self, id: &TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| &t.id == id)
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn fixture(&self, id: &MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| &m.id == id)
    }

    /// Team display name, falling back to the raw id for unknown teams.
    pub fn team_name<'a>(&'a self, id: &'a TeamId) -> &'a str {
        self.team(id).map(|t| t.name.as_str()).unwrap_or(id.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
            && self.players.is_empty()
            && self.matches.is_empty()
            && self.points_table.is_empty()
    }
}
