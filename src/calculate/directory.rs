//! Team and player lookups for the browse pages.

use crate::models::{Player, PlayerRole, Team, TeamId};

/// Player list filters. Unset fields match everything; set ones must all match.
#[derive(Debug, Clone, Default)]
pub struct PlayerFilter {
    /// Case-insensitive substring of the player's name
    pub search: Option<String>,
    pub team: Option<TeamId>,
    pub role: Option<PlayerRole>,
}

impl PlayerFilter {
    pub fn matches(&self, player: &Player) -> bool {
        let name_ok = match self.search.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => player.name.to_lowercase().contains(&q.to_lowercase()),
            _ => true,
        };
        let team_ok = self
            .team
            .as_ref()
            .map_or(true, |t| t.is_empty() || &player.team_id == t);
        let role_ok = self.role.map_or(true, |r| player.role == r);

        name_ok && team_ok && role_ok
    }
}

/// Players passing `filter`, in stored order.
pub fn filter_players<'a>(players: &'a [Player], filter: &PlayerFilter) -> Vec<&'a Player> {
    players.iter().filter(|p| filter.matches(p)).collect()
}

/// The team's squad: every player whose `team_id` is `team`.
pub fn roster<'a>(players: &'a [Player], team: &TeamId) -> Vec<&'a Player> {
    players.iter().filter(|p| &p.team_id == team).collect()
}

/// Case-insensitive search over team name and short code.
pub fn search_teams<'a>(teams: &'a [Team], query: &str) -> Vec<&'a Team> {
    let query = query.trim().to_lowercase();
    teams
        .iter()
        .filter(|t| {
            query.is_empty()
                || t.name.to_lowercase().contains(&query)
                || t.short_name.to_lowercase().contains(&query)
        })
        .collect()
}
