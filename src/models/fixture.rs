//! Match (fixture) model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::validation::require;
use super::{EntityId, MatchId, Scorecard, TeamId, ValidationError};

/// Match status without its payload, for filtering and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    Upcoming,
    Live,
    Completed,
}

impl MatchStatus {
    pub const ALL: [MatchStatus; 3] = [
        MatchStatus::Upcoming,
        MatchStatus::Live,
        MatchStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "Upcoming",
            MatchStatus::Live => "Live",
            MatchStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upcoming" | "scheduled" => Ok(MatchStatus::Upcoming),
            "live" => Ok(MatchStatus::Live),
            "completed" | "finished" => Ok(MatchStatus::Completed),
            _ => Err(format!("unknown match status: {}", s)),
        }
    }
}

/// Lifecycle state of a match. A scorecard exists only once play has started,
/// and a result only once the match is over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum MatchState {
    Upcoming,
    Live {
        scorecard: Scorecard,
    },
    Completed {
        scorecard: Scorecard,
        result: String,
    },
}

/// A scheduled or played match between two teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(default)]
    pub id: MatchId,
    pub team1: TeamId,
    pub team2: TeamId,

    /// Scheduled start, local time
    pub date: NaiveDateTime,

    pub venue: String,

    #[serde(flatten)]
    pub state: MatchState,
}

impl Match {
    /// Create a match that has not started yet.
    pub fn upcoming(
        id: impl Into<MatchId>,
        team1: impl Into<TeamId>,
        team2: impl Into<TeamId>,
        date: NaiveDateTime,
        venue: &str,
    ) -> Self {
        Self {
            id: id.into(),
            team1: team1.into(),
            team2: team2.into(),
            date,
            venue: venue.to_string(),
            state: MatchState::Upcoming,
        }
    }

    /// Move to `Live` with the given scorecard. Replaces any earlier scorecard.
    pub fn into_live(mut self, scorecard: Scorecard) -> Self {
        self.state = MatchState::Live { scorecard };
        self
    }

    /// Move to `Completed`, keeping the scorecard. Fails if play never started.
    pub fn into_completed(mut self, result: &str) -> Result<Self, ValidationError> {
        let scorecard = match self.state {
            MatchState::Upcoming => return Err(ValidationError::MissingField("scorecard")),
            MatchState::Live { scorecard } | MatchState::Completed { scorecard, .. } => scorecard,
        };
        self.state = MatchState::Completed {
            scorecard,
            result: result.to_string(),
        };
        Ok(self)
    }

    pub fn status(&self) -> MatchStatus {
        match self.state {
            MatchState::Upcoming => MatchStatus::Upcoming,
            MatchState::Live { .. } => MatchStatus::Live,
            MatchState::Completed { .. } => MatchStatus::Completed,
        }
    }

    pub fn scorecard(&self) -> Option<&Scorecard> {
        match &self.state {
            MatchState::Upcoming => None,
            MatchState::Live { scorecard } | MatchState::Completed { scorecard, .. } => {
                Some(scorecard)
            }
        }
    }

    pub fn result(&self) -> Option<&str> {
        match &self.state {
            MatchState::Completed { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn involves(&self, team: &TeamId) -> bool {
        &self.team1 == team || &self.team2 == team
    }

    /// The other team, or `None` if `team` is not playing this match.
    pub fn opponent_of(&self, team: &TeamId) -> Option<&TeamId> {
        if &self.team1 == team {
            Some(&self.team2)
        } else if &self.team2 == team {
            Some(&self.team1)
        } else {
            None
        }
    }

    /// Id to use for a new match submitted without one.
    pub fn generated_id(&self) -> MatchId {
        EntityId::generate(&[
            "match",
            self.team1.as_str(),
            self.team2.as_str(),
            &self.date.to_string(),
        ])
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require(self.team1.as_str(), "team1")?;
        require(self.team2.as_str(), "team2")?;
        require(&self.venue, "venue")?;
        if self.team1 == self.team2 {
            return Err(ValidationError::SameTeams(self.team1.to_string()));
        }
        if let Some(scorecard) = self.scorecard() {
            scorecard.validate(&self.team1, &self.team2)?;
        }
        Ok(())
    }
}
