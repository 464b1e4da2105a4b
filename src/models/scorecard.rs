//! Scorecard, innings and per-player scoring rows.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{PlayerId, TeamId, ValidationError};

/// Overs bowled, in cricket notation: `18.4` is 18 overs and 4 balls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Overs {
    completed: u32,
    balls: u8,
}

impl Overs {
    pub const BALLS_PER_OVER: u32 = 6;

    /// Longest innings accepted; well beyond a five-day test.
    pub const MAX_COMPLETED: u32 = 1_000;

    pub fn new(completed: u32, balls: u8) -> Result<Self, ValidationError> {
        if u32::from(balls) >= Self::BALLS_PER_OVER || completed > Self::MAX_COMPLETED {
            return Err(ValidationError::InvalidOvers(
                completed as f64 + f64::from(balls) / 10.0,
            ));
        }
        Ok(Self { completed, balls })
    }

    pub fn completed(&self) -> u32 {
        self.completed
    }

    pub fn balls(&self) -> u8 {
        self.balls
    }

    pub fn total_balls(&self) -> u64 {
        u64::from(self.completed) * u64::from(Self::BALLS_PER_OVER) + u64::from(self.balls)
    }
}

impl TryFrom<f64> for Overs {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::InvalidOvers(value));
        }
        let completed = value.trunc();
        let balls = ((value - completed) * 10.0).round();
        if balls >= f64::from(Self::BALLS_PER_OVER) || completed > f64::from(Self::MAX_COMPLETED) {
            return Err(ValidationError::InvalidOvers(value));
        }
        Ok(Self {
            completed: completed as u32,
            balls: balls as u8,
        })
    }
}

impl From<Overs> for f64 {
    fn from(overs: Overs) -> Self {
        let tenths = u64::from(overs.completed) * 10 + u64::from(overs.balls);
        tenths as f64 / 10.0
    }
}

impl fmt::Display for Overs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.balls == 0 {
            write!(f, "{}", self.completed)
        } else {
            write!(f, "{}.{}", self.completed, self.balls)
        }
    }
}

/// One batter's line in an innings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingScore {
    pub player_id: PlayerId,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub strike_rate: f64,

    /// How the batter got out, or "not out"
    pub dismissal: String,
}

impl BattingScore {
    pub const NOT_OUT: &'static str = "not out";

    pub fn is_not_out(&self) -> bool {
        self.dismissal.trim().eq_ignore_ascii_case(Self::NOT_OUT)
    }
}

/// One bowler's figures in an innings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlingFigure {
    pub player_id: PlayerId,
    pub overs: Overs,
    pub maidens: u32,
    pub runs: u32,
    pub wickets: u32,
    pub economy: f64,
}

/// One team's batting turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Innings {
    /// 1 for the first innings, 2 for the chase. Zero means "not yet
    /// numbered" and is filled in from position when the scorecard is built.
    #[serde(default)]
    pub number: u8,

    pub batting_team: TeamId,
    pub runs: u32,
    pub wickets: u32,
    pub overs: Overs,

    #[serde(default)]
    pub batting_scores: Vec<BattingScore>,

    #[serde(default)]
    pub bowling_figures: Vec<BowlingFigure>,
}

impl Innings {
    pub fn new(batting_team: impl Into<TeamId>, runs: u32, wickets: u32, overs: Overs) -> Self {
        Self {
            number: 0,
            batting_team: batting_team.into(),
            runs,
            wickets,
            overs,
            batting_scores: Vec::new(),
            bowling_figures: Vec::new(),
        }
    }

    pub fn with_batting(mut self, score: BattingScore) -> Self {
        self.batting_scores.push(score);
        self
    }

    pub fn with_bowling(mut self, figure: BowlingFigure) -> Self {
        self.bowling_figures.push(figure);
        self
    }

    pub fn is_all_out(&self) -> bool {
        self.wickets >= 10
    }
}

/// Innings in batting order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawScorecard")]
pub struct Scorecard {
    innings: Vec<Innings>,
}

#[derive(Deserialize)]
struct RawScorecard {
    #[serde(default)]
    innings: Vec<Innings>,
}

impl From<RawScorecard> for Scorecard {
    fn from(raw: RawScorecard) -> Self {
        let mut scorecard = Scorecard::new();
        for innings in raw.innings {
            scorecard.push_innings(innings);
        }
        scorecard
    }
}

impl Scorecard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an innings. An unnumbered innings is numbered by its position.
    pub fn push_innings(&mut self, mut innings: Innings) {
        if innings.number == 0 {
            innings.number = u8::try_from(self.innings.len() + 1).unwrap_or(u8::MAX);
        }
        self.innings.push(innings);
    }

    pub fn with_innings(mut self, innings: Innings) -> Self {
        self.push_innings(innings);
        self
    }

    pub fn innings(&self) -> &[Innings] {
        &self.innings
    }

    pub fn is_empty(&self) -> bool {
        self.innings.is_empty()
    }

    /// First innings batted by `team`.
    pub fn innings_for(&self, team: &TeamId) -> Option<&Innings> {
        self.innings.iter().find(|i| &i.batting_team == team)
    }

    /// Check every innings against the two teams playing the match.
    ///
    /// Innings numbers must be distinct and run from 1 to the innings count,
    /// so exactly one innings can be the chase.
    pub fn validate(&self, team1: &TeamId, team2: &TeamId) -> Result<(), ValidationError> {
        let count = self.innings.len();
        let mut seen = vec![false; count];
        for innings in &self.innings {
            let number = usize::from(innings.number);
            if number == 0 || number > count {
                return Err(ValidationError::InningsOutOfRange {
                    number: innings.number,
                    count,
                });
            }
            if std::mem::replace(&mut seen[number - 1], true) {
                return Err(ValidationError::DuplicateInnings(innings.number));
            }
            if &innings.batting_team != team1 && &innings.batting_team != team2 {
                return Err(ValidationError::ForeignBattingTeam {
                    number: innings.number,
                    team: innings.batting_team.to_string(),
                });
            }
            if innings.wickets > 10 {
                return Err(ValidationError::TooManyWickets {
                    number: innings.number,
                    wickets: innings.wickets,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overs(value: f64) -> Overs {
        Overs::try_from(value).unwrap()
    }

    #[test]
    fn test_overs_decimal_notation() {
        let o = overs(18.4);
        assert_eq!(o.completed(), 18);
        assert_eq!(o.balls(), 4);
        assert_eq!(o.total_balls(), 112);
        assert_eq!(o.to_string(), "18.4");
        assert_eq!(overs(20.0).to_string(), "20");
    }

    #[test]
    fn test_overs_rejects_six_balls() {
        assert!(Overs::try_from(14.6).is_err());
        assert!(Overs::try_from(-1.0).is_err());
        assert!(Overs::try_from(f64::NAN).is_err());
        assert!(Overs::new(3, 6).is_err());
    }

    #[test]
    fn test_overs_rejects_absurd_totals() {
        assert!(serde_json::from_str::<Overs>("500000000").is_err());
        assert!(Overs::new(u32::MAX, 0).is_err());

        let longest = Overs::new(Overs::MAX_COMPLETED, 5).unwrap();
        assert_eq!(longest.total_balls(), 6_005);
        assert_eq!(f64::from(longest), 1000.5);
        assert_eq!(serde_json::to_string(&longest).unwrap(), "1000.5");
    }

    #[test]
    fn test_overs_wire_format() {
        let json = serde_json::to_string(&overs(14.2)).unwrap();
        assert_eq!(json, "14.2");
        let back: Overs = serde_json::from_str("18.4").unwrap();
        assert_eq!(back, Overs::new(18, 4).unwrap());
        assert!(serde_json::from_str::<Overs>("3.7").is_err());
    }

    #[test]
    fn test_overs_ordering() {
        assert!(overs(18.4) < overs(18.5));
        assert!(overs(18.5) < overs(19.0));
    }

    #[test]
    fn test_not_out_sentinel() {
        let score = BattingScore {
            player_id: "p1".into(),
            runs: 32,
            balls: 17,
            fours: 2,
            sixes: 3,
            strike_rate: 188.24,
            dismissal: "Not Out".to_string(),
        };
        assert!(score.is_not_out());
    }

    #[test]
    fn test_push_innings_numbers_by_position() {
        let scorecard = Scorecard::new()
            .with_innings(Innings::new("rcb", 156, 9, overs(20.0)))
            .with_innings(Innings::new("csk", 157, 5, overs(18.4)));

        let numbers: Vec<u8> = scorecard.innings().iter().map(|i| i.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(scorecard.innings_for(&"csk".into()).unwrap().runs, 157);
        assert!(scorecard.innings_for(&"mi".into()).is_none());
    }

    #[test]
    fn test_explicit_number_is_kept() {
        let mut chase = Innings::new("csk", 40, 1, overs(5.0));
        chase.number = 2;
        let scorecard = Scorecard::new().with_innings(chase);
        assert_eq!(scorecard.innings()[0].number, 2);
    }

    #[test]
    fn test_deserialize_numbers_unnumbered_innings() {
        let json = r#"{"innings": [
            {"battingTeam": "csk", "runs": 193, "wickets": 6, "overs": 20,
             "battingScores": [], "bowlingFigures": []},
            {"battingTeam": "srh", "runs": 126, "wickets": 3, "overs": 14.2,
             "battingScores": [], "bowlingFigures": []}
        ]}"#;
        let scorecard: Scorecard = serde_json::from_str(json).unwrap();
        assert_eq!(scorecard.innings()[0].number, 1);
        assert_eq!(scorecard.innings()[1].number, 2);
        assert_eq!(scorecard.innings()[1].overs.to_string(), "14.2");
    }

    #[test]
    fn test_validate_foreign_batting_team() {
        let scorecard = Scorecard::new().with_innings(Innings::new("kkr", 100, 2, overs(12.0)));
        let err = scorecard
            .validate(&"csk".into(), &"mi".into())
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::ForeignBattingTeam {
                number: 1,
                team: "kkr".to_string()
            }
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_numbers() {
        let mut chase = Innings::new("csk", 40, 1, overs(5.0));
        chase.number = 2;
        let scorecard = Scorecard::new()
            .with_innings(chase)
            .with_innings(Innings::new("mi", 180, 4, overs(20.0)));
        assert_eq!(scorecard.innings()[1].number, 2);
        assert_eq!(
            scorecard.validate(&"csk".into(), &"mi".into()),
            Err(ValidationError::DuplicateInnings(2))
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_number() {
        let mut chase = Innings::new("csk", 40, 1, overs(5.0));
        chase.number = 2;
        let scorecard = Scorecard::new().with_innings(chase);
        assert_eq!(
            scorecard.validate(&"csk".into(), &"mi".into()),
            Err(ValidationError::InningsOutOfRange { number: 2, count: 1 })
        );
    }

    #[test]
    fn test_validate_accepts_out_of_order_numbers() {
        let mut chase = Innings::new("csk", 157, 5, overs(18.4));
        chase.number = 2;
        let mut first = Innings::new("rcb", 156, 9, overs(20.0));
        first.number = 1;
        let scorecard = Scorecard::new().with_innings(chase).with_innings(first);
        assert!(scorecard.validate(&"csk".into(), &"rcb".into()).is_ok());
    }

    #[test]
    fn test_validate_wickets() {
        let scorecard = Scorecard::new().with_innings(Innings::new("csk", 100, 11, overs(12.0)));
        assert!(matches!(
            scorecard.validate(&"csk".into(), &"mi".into()),
            Err(ValidationError::TooManyWickets { wickets: 11, .. })
        ));
    }
}
