//! Match scoreboard derivations.
//!
//! Everything here reads a single match plus the player list and degrades
//! to a sentinel on missing or inconsistent data instead of failing.

use serde::Serialize;
use tracing::warn;

use crate::models::{
    BattingScore, BowlingFigure, Innings, Match, MatchStatus, Overs, Player, PlayerId, TeamId,
};

/// Display name used when a scoring row points at a player we don't know.
pub const UNKNOWN_PLAYER: &str = "Unknown Player";

/// A team's current score in a match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreLine {
    /// No innings recorded for the team (match not started, or still to bat)
    YetToBat,
    Scored { runs: u32, wickets: u32, overs: Overs },
}

impl ScoreLine {
    pub fn from_innings(innings: &Innings) -> Self {
        ScoreLine::Scored {
            runs: innings.runs,
            wickets: innings.wickets,
            overs: innings.overs,
        }
    }

    pub fn is_scored(&self) -> bool {
        matches!(self, ScoreLine::Scored { .. })
    }
}

impl std::fmt::Display for ScoreLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreLine::YetToBat => write!(f, "Yet to bat"),
            ScoreLine::Scored {
                runs,
                wickets,
                overs,
            } => write!(f, "{}/{} ({})", runs, wickets, overs),
        }
    }
}

/// A batting table row with the batter's resolved name.
#[derive(Debug, Clone, Serialize)]
pub struct BattingRow<'a> {
    pub player_id: &'a PlayerId,
    pub player_name: &'a str,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub strike_rate: f64,
    pub dismissal: &'a str,
    pub not_out: bool,
}

/// A bowling table row with the bowler's resolved name.
#[derive(Debug, Clone, Serialize)]
pub struct BowlingRow<'a> {
    pub player_id: &'a PlayerId,
    pub player_name: &'a str,
    pub overs: Overs,
    pub maidens: u32,
    pub runs: u32,
    pub wickets: u32,
    pub economy: f64,
}

/// Everything a scorecard tab shows for one innings.
#[derive(Debug, Clone, Serialize)]
pub struct InningsView<'a> {
    pub number: u8,
    pub batting_team: &'a TeamId,

    /// `None` when the batting team is not one of the match's teams
    pub bowling_team: Option<&'a TeamId>,

    pub score: ScoreLine,
    pub is_chasing: bool,
    pub batting: Vec<BattingRow<'a>>,
    pub bowling: Vec<BowlingRow<'a>>,
}

/// Read-only view over one match and the global player list.
#[derive(Debug, Clone, Copy)]
pub struct MatchScoreboard<'a> {
    fixture: &'a Match,
    players: &'a [Player],
}

impl<'a> MatchScoreboard<'a> {
    pub fn new(fixture: &'a Match, players: &'a [Player]) -> Self {
        Self { fixture, players }
    }

    pub fn fixture(&self) -> &'a Match {
        self.fixture
    }

    /// The innings batted by `team`, if any has been recorded.
    pub fn innings_for(&self, team: &TeamId) -> Option<&'a Innings> {
        self.fixture.scorecard()?.innings_for(team)
    }

    /// The team's score, or `YetToBat` when nothing is recorded for it.
    pub fn score_line_for(&self, team: &TeamId) -> ScoreLine {
        self.innings_for(team)
            .map(ScoreLine::from_innings)
            .unwrap_or(ScoreLine::YetToBat)
    }

    /// Whether `innings` is the chase in a match still in progress.
    pub fn is_chasing_innings(&self, innings: &Innings) -> bool {
        self.fixture.status() == MatchStatus::Live && innings.number == 2
    }

    /// Name of the player, or `UNKNOWN_PLAYER` if the id is dangling.
    pub fn resolve_player_name(&self, player_id: &PlayerId) -> &'a str {
        self.players
            .iter()
            .find(|p| &p.id == player_id)
            .map(|p| p.name.as_str())
            .unwrap_or(UNKNOWN_PLAYER)
    }

    /// The fielding side for `innings`.
    ///
    /// `None` if the match has no scorecard or the innings' batting team is
    /// not playing this match.
    pub fn bowling_team_for(&self, innings: &Innings) -> Option<&'a TeamId> {
        self.fixture.scorecard()?;
        let bowling = self.fixture.opponent_of(&innings.batting_team);
        if bowling.is_none() {
            warn!(
                "Match {}: innings {} batting team {} is not playing",
                self.fixture.id, innings.number, innings.batting_team
            );
        }
        bowling
    }

    /// Batting rows in recorded order.
    pub fn batting_rows(&self, innings: &'a Innings) -> Vec<BattingRow<'a>> {
        innings
            .batting_scores
            .iter()
            .map(|s| self.batting_row(s))
            .collect()
    }

    /// Bowling rows in stored order.
    pub fn bowling_rows(&self, innings: &'a Innings) -> Vec<BowlingRow<'a>> {
        innings
            .bowling_figures
            .iter()
            .map(|f| self.bowling_row(f))
            .collect()
    }

    /// One view per recorded innings, in batting order.
    pub fn innings_views(&self) -> Vec<InningsView<'a>> {
        let Some(scorecard) = self.fixture.scorecard() else {
            return Vec::new();
        };

        scorecard
            .innings()
            .iter()
            .map(|innings| InningsView {
                number: innings.number,
                batting_team: &innings.batting_team,
                bowling_team: self.bowling_team_for(innings),
                score: ScoreLine::from_innings(innings),
                is_chasing: self.is_chasing_innings(innings),
                batting: self.batting_rows(innings),
                bowling: self.bowling_rows(innings),
            })
            .collect()
    }

    fn batting_row(&self, score: &'a BattingScore) -> BattingRow<'a> {
        BattingRow {
            player_id: &score.player_id,
            player_name: self.resolve_player_name(&score.player_id),
            runs: score.runs,
            balls: score.balls,
            fours: score.fours,
            sixes: score.sixes,
            strike_rate: score.strike_rate,
            dismissal: &score.dismissal,
            not_out: score.is_not_out(),
        }
    }

    fn bowling_row(&self, figure: &'a BowlingFigure) -> BowlingRow<'a> {
        BowlingRow {
            player_id: &figure.player_id,
            player_name: self.resolve_player_name(&figure.player_id),
            overs: figure.overs,
            maidens: figure.maidens,
            runs: figure.runs,
            wickets: figure.wickets,
            economy: figure.economy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlayerRole, Scorecard};
    use chrono::NaiveDate;

    fn overs(value: f64) -> Overs {
        Overs::try_from(value).unwrap()
    }

    fn players() -> Vec<Player> {
        vec![
            Player::new("p1", "MS Dhoni", "csk", PlayerRole::WicketKeeper),
            Player::new("p2", "Virat Kohli", "rcb", PlayerRole::Batsman),
            Player::new("p5", "Ravindra Jadeja", "csk", PlayerRole::AllRounder),
        ]
    }

    fn batting(player: &str, runs: u32, dismissal: &str) -> BattingScore {
        BattingScore {
            player_id: player.into(),
            runs,
            balls: 20,
            fours: 2,
            sixes: 1,
            strike_rate: runs as f64 * 5.0,
            dismissal: dismissal.to_string(),
        }
    }

    fn bowling(player: &str, wickets: u32) -> BowlingFigure {
        BowlingFigure {
            player_id: player.into(),
            overs: overs(4.0),
            maidens: 0,
            runs: 28,
            wickets,
            economy: 7.0,
        }
    }

    fn two_innings() -> Scorecard {
        Scorecard::new()
            .with_innings(
                Innings::new("rcb", 156, 9, overs(20.0))
                    .with_batting(batting("p2", 65, "c Dhoni b Jadeja"))
                    .with_batting(batting("p404", 12, "b Jadeja"))
                    .with_bowling(bowling("p5", 3)),
            )
            .with_innings(
                Innings::new("csk", 120, 4, overs(15.2))
                    .with_batting(batting("p1", 32, "not out")),
            )
    }

    fn date() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 3)
            .unwrap()
            .and_hms_opt(19, 30, 0)
            .unwrap()
    }

    fn upcoming() -> Match {
        Match::upcoming("m1", "csk", "rcb", date(), "Chepauk")
    }

    fn live() -> Match {
        upcoming().into_live(two_innings())
    }

    fn completed() -> Match {
        live().into_completed("Chennai Super Kings won by 6 wickets").unwrap()
    }

    #[test]
    fn test_upcoming_match_has_no_score_for_either_team() {
        let m = upcoming();
        let players = players();
        let board = MatchScoreboard::new(&m, &players);
        assert_eq!(board.score_line_for(&"csk".into()), ScoreLine::YetToBat);
        assert_eq!(board.score_line_for(&"rcb".into()), ScoreLine::YetToBat);
        assert!(board.innings_views().is_empty());
    }

    #[test]
    fn test_score_line_for_batting_teams() {
        let m = live();
        let players = players();
        let board = MatchScoreboard::new(&m, &players);

        let rcb = board.score_line_for(&"rcb".into());
        assert_eq!(
            rcb,
            ScoreLine::Scored {
                runs: 156,
                wickets: 9,
                overs: overs(20.0)
            }
        );
        assert_eq!(rcb.to_string(), "156/9 (20)");
        assert_eq!(board.score_line_for(&"csk".into()).to_string(), "120/4 (15.2)");
        // A team not in the match simply has no score.
        assert_eq!(board.score_line_for(&"mi".into()), ScoreLine::YetToBat);
    }

    #[test]
    fn test_first_innings_only_leaves_chasing_side_yet_to_bat() {
        let scorecard = Scorecard::new().with_innings(Innings::new("rcb", 80, 2, overs(9.3)));
        let m = upcoming().into_live(scorecard);
        let players = players();
        let board = MatchScoreboard::new(&m, &players);
        assert!(board.score_line_for(&"rcb".into()).is_scored());
        assert_eq!(board.score_line_for(&"csk".into()), ScoreLine::YetToBat);
    }

    #[test]
    fn test_chasing_flag_only_for_second_innings_of_live_match() {
        let m = live();
        let players = players();
        let board = MatchScoreboard::new(&m, &players);
        let innings = m.scorecard().unwrap().innings();
        assert!(!board.is_chasing_innings(&innings[0]));
        assert!(board.is_chasing_innings(&innings[1]));
    }

    #[test]
    fn test_no_chasing_flag_once_completed() {
        let m = completed();
        let players = players();
        let board = MatchScoreboard::new(&m, &players);
        let innings = m.scorecard().unwrap().innings();
        assert!(innings.iter().all(|i| !board.is_chasing_innings(i)));
    }

    #[test]
    fn test_no_chasing_flag_for_upcoming() {
        let m = upcoming();
        let players = players();
        let board = MatchScoreboard::new(&m, &players);
        let stray = Innings::new("csk", 0, 0, overs(0.0));
        let mut second = stray.clone();
        second.number = 2;
        assert!(!board.is_chasing_innings(&stray));
        assert!(!board.is_chasing_innings(&second));
    }

    #[test]
    fn test_resolve_player_name() {
        let m = live();
        let players = players();
        let board = MatchScoreboard::new(&m, &players);
        assert_eq!(board.resolve_player_name(&"p2".into()), "Virat Kohli");
        assert_eq!(board.resolve_player_name(&"nobody".into()), UNKNOWN_PLAYER);
    }

    #[test]
    fn test_dangling_batter_keeps_row_with_unknown_name() {
        let m = live();
        let players = players();
        let board = MatchScoreboard::new(&m, &players);
        let first = &m.scorecard().unwrap().innings()[0];

        let rows = board.batting_rows(first);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].player_name, "Virat Kohli");
        assert_eq!(rows[1].player_name, UNKNOWN_PLAYER);
        assert_eq!(rows[1].runs, 12);
        assert_eq!(rows[1].player_id, "p404");
    }

    #[test]
    fn test_bowling_rows_and_not_out() {
        let m = live();
        let players = players();
        let board = MatchScoreboard::new(&m, &players);
        let innings = m.scorecard().unwrap().innings();

        let bowling = board.bowling_rows(&innings[0]);
        assert_eq!(bowling.len(), 1);
        assert_eq!(bowling[0].player_name, "Ravindra Jadeja");
        assert_eq!(bowling[0].wickets, 3);

        let batting = board.batting_rows(&innings[1]);
        assert!(batting[0].not_out);
    }

    #[test]
    fn test_bowling_team_for() {
        let m = live();
        let players = players();
        let board = MatchScoreboard::new(&m, &players);
        let innings = m.scorecard().unwrap().innings();
        assert_eq!(board.bowling_team_for(&innings[0]), Some(&"csk".into()));
        assert_eq!(board.bowling_team_for(&innings[1]), Some(&"rcb".into()));
    }

    #[test]
    fn test_bowling_team_for_malformed_innings() {
        let m = live();
        let players = players();
        let board = MatchScoreboard::new(&m, &players);
        let stray = Innings::new("kkr", 10, 0, overs(1.0));
        assert_eq!(board.bowling_team_for(&stray), None);
    }

    #[test]
    fn test_bowling_team_for_without_scorecard() {
        let m = upcoming();
        let players = players();
        let board = MatchScoreboard::new(&m, &players);
        let innings = Innings::new("csk", 10, 0, overs(1.0));
        assert_eq!(board.bowling_team_for(&innings), None);
    }

    #[test]
    fn test_innings_views() {
        let m = live();
        let players = players();
        let board = MatchScoreboard::new(&m, &players);
        let views = board.innings_views();

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].number, 1);
        assert_eq!(views[0].batting_team, "rcb");
        assert_eq!(views[0].bowling_team, Some(&"csk".into()));
        assert!(!views[0].is_chasing);
        assert!(views[1].is_chasing);
        assert_eq!(views[1].batting[0].player_name, "MS Dhoni");
    }

    #[test]
    fn test_innings_view_serializes_overs_as_decimal() {
        let m = live();
        let players = players();
        let board = MatchScoreboard::new(&m, &players);
        let json = serde_json::to_value(board.innings_views()).unwrap();
        assert_eq!(json[1]["score"]["kind"], "scored");
        assert_eq!(json[1]["score"]["overs"], 15.2);
        assert_eq!(json[0]["bowling"][0]["overs"], 4.0);
    }
}
