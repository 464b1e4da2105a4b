//! Data-quality checks.
//!
//! The computations tolerate dangling references and stored aggregates that
//! disagree with each other. This module lists those problems so they can be
//! logged or reported; it never rejects data.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::models::{LeagueSnapshot, MatchId, PlayerId, TeamId};

/// A problem found in the league data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataIssue {
    DuplicateId {
        entity: &'static str,
        id: String,
    },
    PlayerWithoutTeam {
        player: PlayerId,
        team: TeamId,
    },
    MatchWithUnknownTeam {
        fixture: MatchId,
        team: TeamId,
    },
    ForeignBattingTeam {
        fixture: MatchId,
        innings: u8,
        team: TeamId,
    },
    UnknownScorer {
        fixture: MatchId,
        innings: u8,
        player: PlayerId,
    },
    StandingsWithUnknownTeam {
        team: TeamId,
    },
    InconsistentPoints {
        team: TeamId,
        stored: u32,
        expected: u64,
    },
}

impl fmt::Display for DataIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataIssue::DuplicateId { entity, id } => write!(f, "duplicate {} id {}", entity, id),
            DataIssue::PlayerWithoutTeam { player, team } => {
                write!(f, "player {} belongs to unknown team {}", player, team)
            }
            DataIssue::MatchWithUnknownTeam { fixture, team } => {
                write!(f, "match {} references unknown team {}", fixture, team)
            }
            DataIssue::ForeignBattingTeam {
                fixture,
                innings,
                team,
            } => write!(
                f,
                "match {} innings {}: {} is not playing this match",
                fixture, innings, team
            ),
            DataIssue::UnknownScorer {
                fixture,
                innings,
                player,
            } => write!(
                f,
                "match {} innings {}: unknown player {}",
                fixture, innings, player
            ),
            DataIssue::StandingsWithUnknownTeam { team } => {
                write!(f, "points table row for unknown team {}", team)
            }
            DataIssue::InconsistentPoints {
                team,
                stored,
                expected,
            } => write!(
                f,
                "{} has {} points but its results give {}",
                team, stored, expected
            ),
        }
    }
}

fn duplicates<'a>(
    entity: &'static str,
    ids: impl Iterator<Item = &'a str>,
    issues: &mut Vec<DataIssue>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            issues.push(DataIssue::DuplicateId {
                entity,
                id: id.to_string(),
            });
        }
    }
}

/// Every data-quality problem in `snapshot`, grouped by collection.
pub fn find_issues(snapshot: &LeagueSnapshot) -> Vec<DataIssue> {
    let mut issues = Vec::new();

    duplicates("team", snapshot.teams.iter().map(|t| t.id.as_str()), &mut issues);
    duplicates("player", snapshot.players.iter().map(|p| p.id.as_str()), &mut issues);
    duplicates("match", snapshot.matches.iter().map(|m| m.id.as_str()), &mut issues);
    duplicates(
        "points table",
        snapshot.points_table.iter().map(|e| e.team_id.as_str()),
        &mut issues,
    );

    for player in &snapshot.players {
        if snapshot.team(&player.team_id).is_none() {
            issues.push(DataIssue::PlayerWithoutTeam {
                player: player.id.clone(),
                team: player.team_id.clone(),
            });
        }
    }

    for fixture in &snapshot.matches {
        for team in [&fixture.team1, &fixture.team2] {
            if snapshot.team(team).is_none() {
                issues.push(DataIssue::MatchWithUnknownTeam {
                    fixture: fixture.id.clone(),
                    team: team.clone(),
                });
            }
        }

        let Some(scorecard) = fixture.scorecard() else {
            continue;
        };
        for innings in scorecard.innings() {
            if !fixture.involves(&innings.batting_team) {
                issues.push(DataIssue::ForeignBattingTeam {
                    fixture: fixture.id.clone(),
                    innings: innings.number,
                    team: innings.batting_team.clone(),
                });
            }
            let scorers = innings
                .batting_scores
                .iter()
                .map(|s| &s.player_id)
                .chain(innings.bowling_figures.iter().map(|b| &b.player_id));
            for player in scorers {
                if snapshot.player(player).is_none() {
                    issues.push(DataIssue::UnknownScorer {
                        fixture: fixture.id.clone(),
                        innings: innings.number,
                        player: player.clone(),
                    });
                }
            }
        }
    }

    for entry in &snapshot.points_table {
        if snapshot.team(&entry.team_id).is_none() {
            issues.push(DataIssue::StandingsWithUnknownTeam {
                team: entry.team_id.clone(),
            });
        }
        if !entry.points_consistent() {
            issues.push(DataIssue::InconsistentPoints {
                team: entry.team_id.clone(),
                stored: entry.points,
                expected: entry.expected_points(),
            });
        }
    }

    issues
}
