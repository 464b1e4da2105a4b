//! Player leaderboards and role breakdowns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Player, PlayerRole, PlayerStats};

/// Number of leaders shown on the home page.
pub const HOME_LEADERS: usize = 3;

/// Number of leaders shown on the stats page.
pub const STATS_LEADERS: usize = 10;

/// A numeric career stat to rank players by. Higher is better for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Runs,
    Wickets,
    Matches,
    HighestScore,
    Average,
    StrikeRate,
    Fifties,
    Hundreds,
}

impl Stat {
    pub fn value(&self, stats: &PlayerStats) -> f64 {
        match self {
            Stat::Runs => f64::from(stats.runs),
            Stat::Wickets => f64::from(stats.wickets),
            Stat::Matches => f64::from(stats.matches),
            Stat::HighestScore => f64::from(stats.highest_score),
            Stat::Average => stats.average,
            Stat::StrikeRate => stats.strike_rate,
            Stat::Fifties => f64::from(stats.fifties),
            Stat::Hundreds => f64::from(stats.hundreds),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Runs => "runs",
            Stat::Wickets => "wickets",
            Stat::Matches => "matches",
            Stat::HighestScore => "highest_score",
            Stat::Average => "average",
            Stat::StrikeRate => "strike_rate",
            Stat::Fifties => "fifties",
            Stat::Hundreds => "hundreds",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "runs" => Ok(Stat::Runs),
            "wickets" => Ok(Stat::Wickets),
            "matches" => Ok(Stat::Matches),
            "highest_score" | "hs" => Ok(Stat::HighestScore),
            "average" | "avg" => Ok(Stat::Average),
            "strike_rate" | "sr" => Ok(Stat::StrikeRate),
            "fifties" | "50s" => Ok(Stat::Fifties),
            "hundreds" | "100s" => Ok(Stat::Hundreds),
            _ => Err(format!("unknown stat: {}", s)),
        }
    }
}

/// A leaderboard row.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderRow<'a> {
    pub rank: usize,
    pub value: f64,
    pub player: &'a Player,
}

/// Player count for one role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleCount {
    pub role: PlayerRole,
    pub count: usize,

    /// Fraction of all players (0.0 when there are none)
    pub share: f64,
}

/// Top `n` players by `stat`, descending; ties keep input order.
pub fn top_by(players: &[Player], stat: Stat, n: usize) -> Vec<&Player> {
    let mut sorted: Vec<&Player> = players.iter().collect();
    sorted.sort_by(|a, b| stat.value(&b.stats).total_cmp(&stat.value(&a.stats)));
    sorted.truncate(n);
    sorted
}

/// Like `top_by`, but only players with a positive value, as ranked rows.
pub fn stat_leaders(players: &[Player], stat: Stat, n: usize) -> Vec<LeaderRow<'_>> {
    top_by(players, stat, players.len())
        .into_iter()
        .filter(|p| stat.value(&p.stats) > 0.0)
        .take(n)
        .enumerate()
        .map(|(i, player)| LeaderRow {
            rank: i + 1,
            value: stat.value(&player.stats),
            player,
        })
        .collect()
}

/// Player count per role, every role present, in declaration order.
pub fn role_distribution(players: &[Player]) -> Vec<RoleCount> {
    let total = players.len();
    PlayerRole::ALL
        .iter()
        .map(|&role| {
            let count = players.iter().filter(|p| p.role == role).count();
            let share = if total > 0 {
                count as f64 / total as f64
            } else {
                0.0
            };
            RoleCount { role, count, share }
        })
        .collect()
}

/// Score used to pick the best player of a role.
pub fn role_score(role: PlayerRole, stats: &PlayerStats) -> u32 {
    match role {
        PlayerRole::Batsman => stats.runs,
        PlayerRole::Bowler => stats.wickets,
        PlayerRole::AllRounder | PlayerRole::WicketKeeper => {
            stats.runs.saturating_add(stats.wickets)
        }
    }
}

/// Best player of `role`, first one wins on a tie. `None` if nobody has the role.
pub fn top_performer_for_role(players: &[Player], role: PlayerRole) -> Option<&Player> {
    players
        .iter()
        .filter(|p| p.role == role)
        .fold(None, |best: Option<&Player>, p| match best {
            Some(b) if role_score(role, &b.stats) >= role_score(role, &p.stats) => Some(b),
            _ => Some(p),
        })
}
