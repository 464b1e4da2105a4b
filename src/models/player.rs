//! Player model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::validation::require;
use super::{EntityId, PlayerId, TeamId, ValidationError};

/// Playing role. Closed set; `ALL` lists them in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerRole {
    Batsman,
    Bowler,
    #[serde(rename = "All-rounder")]
    AllRounder,
    #[serde(rename = "Wicket-keeper")]
    WicketKeeper,
}

impl PlayerRole {
    pub const ALL: [PlayerRole; 4] = [
        PlayerRole::Batsman,
        PlayerRole::Bowler,
        PlayerRole::AllRounder,
        PlayerRole::WicketKeeper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerRole::Batsman => "Batsman",
            PlayerRole::Bowler => "Bowler",
            PlayerRole::AllRounder => "All-rounder",
            PlayerRole::WicketKeeper => "Wicket-keeper",
        }
    }
}

impl fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerRole {
    type Err = String;

    /// Accepts display names and common slugs ("all-rounder", "allrounder", "wk").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();
        match normalized.as_str() {
            "batsman" | "batter" => Ok(PlayerRole::Batsman),
            "bowler" => Ok(PlayerRole::Bowler),
            "allrounder" => Ok(PlayerRole::AllRounder),
            "wicketkeeper" | "keeper" | "wk" => Ok(PlayerRole::WicketKeeper),
            _ => Err(format!("unknown player role: {}", s)),
        }
    }
}

/// Career aggregates. Ratios are supplied with the data and never recomputed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub matches: u32,
    pub runs: u32,
    pub highest_score: u32,
    pub average: f64,
    pub strike_rate: f64,
    pub fifties: u32,
    pub hundreds: u32,
    pub wickets: u32,

    /// Formatted figure such as "5/10", or "-" when the player has none
    pub best_bowling: String,

    pub economy_rate: f64,
}

/// A squad member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default)]
    pub id: PlayerId,
    pub name: String,

    /// Image reference (path or URL)
    #[serde(default)]
    pub image: String,

    /// Owning team
    pub team_id: TeamId,

    pub role: PlayerRole,

    #[serde(default)]
    pub batting_style: String,

    #[serde(default)]
    pub bowling_style: String,

    #[serde(default)]
    pub nationality: String,

    #[serde(default)]
    pub age: u32,

    #[serde(default)]
    pub stats: PlayerStats,
}

impl Player {
    pub fn new(
        id: impl Into<PlayerId>,
        name: &str,
        team_id: impl Into<TeamId>,
        role: PlayerRole,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            image: String::new(),
            team_id: team_id.into(),
            role,
            batting_style: String::new(),
            bowling_style: String::new(),
            nationality: String::new(),
            age: 0,
            stats: PlayerStats::default(),
        }
    }

    /// Builder method to set batting and bowling styles.
    pub fn with_styles(mut self, batting: &str, bowling: &str) -> Self {
        self.batting_style = batting.to_string();
        self.bowling_style = bowling.to_string();
        self
    }

    pub fn with_profile(mut self, nationality: &str, age: u32) -> Self {
        self.nationality = nationality.to_string();
        self.age = age;
        self
    }

    pub fn with_image(mut self, image: &str) -> Self {
        self.image = image.to_string();
        self
    }

    pub fn with_stats(mut self, stats: PlayerStats) -> Self {
        self.stats = stats;
        self
    }

    /// Id to use for a new player submitted without one.
    pub fn generated_id(&self) -> PlayerId {
        EntityId::generate(&["player", self.team_id.as_str(), &self.name])
    }

    /// Last word of the name, used for compact chart labels.
    pub fn short_name(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or(&self.name)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "name")?;
        require(self.team_id.as_str(), "teamId")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_order_and_display() {
        let names: Vec<_> = PlayerRole::ALL.iter().map(|r| r.to_string()).collect();
        assert_eq!(
            names,
            vec!["Batsman", "Bowler", "All-rounder", "Wicket-keeper"]
        );
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("Batsman".parse::<PlayerRole>(), Ok(PlayerRole::Batsman));
        assert_eq!("all-rounder".parse::<PlayerRole>(), Ok(PlayerRole::AllRounder));
        assert_eq!("All_Rounder".parse::<PlayerRole>(), Ok(PlayerRole::AllRounder));
        assert_eq!("Wicket-keeper".parse::<PlayerRole>(), Ok(PlayerRole::WicketKeeper));
        assert_eq!("wk".parse::<PlayerRole>(), Ok(PlayerRole::WicketKeeper));
        assert!("umpire".parse::<PlayerRole>().is_err());
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(
            serde_json::to_string(&PlayerRole::AllRounder).unwrap(),
            "\"All-rounder\""
        );
        let role: PlayerRole = serde_json::from_str("\"Wicket-keeper\"").unwrap();
        assert_eq!(role, PlayerRole::WicketKeeper);
    }

    #[test]
    fn test_player_deserialize_site_shape() {
        let json = r#"{
            "id": "p4", "name": "Jasprit Bumrah", "image": "/player-images/jasprit-bumrah.png",
            "teamId": "mi", "role": "Bowler", "battingStyle": "Right Handed",
            "bowlingStyle": "Right-arm fast", "nationality": "Indian", "age": 30,
            "stats": {"matches": 120, "runs": 56, "highestScore": 16, "average": 5.6,
                      "strikeRate": 85.0, "fifties": 0, "hundreds": 0, "wickets": 145,
                      "bestBowling": "5/10", "economyRate": 7.39}
        }"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.team_id, "mi");
        assert_eq!(player.role, PlayerRole::Bowler);
        assert_eq!(player.stats.wickets, 145);
        assert_eq!(player.stats.best_bowling, "5/10");
    }

    #[test]
    fn test_short_name() {
        let player = Player::new("p2", "Virat Kohli", "rcb", PlayerRole::Batsman);
        assert_eq!(player.short_name(), "Kohli");
        let mononym = Player::new("p9", "Rashid", "gt", PlayerRole::Bowler);
        assert_eq!(mononym.short_name(), "Rashid");
    }

    #[test]
    fn test_player_validation() {
        let player = Player::new("p1", "MS Dhoni", "csk", PlayerRole::WicketKeeper);
        assert!(player.validate().is_ok());

        let orphan = Player::new("p1", "MS Dhoni", "", PlayerRole::WicketKeeper);
        assert_eq!(
            orphan.validate(),
            Err(ValidationError::MissingField("teamId"))
        );
    }

    #[test]
    fn test_generated_id_depends_on_team_and_name() {
        let a = Player::new("", "Rohit Sharma", "mi", PlayerRole::Batsman);
        let b = Player::new("", "Rohit Sharma", "mi", PlayerRole::Batsman);
        let c = Player::new("", "Rohit Sharma", "csk", PlayerRole::Batsman);
        assert_eq!(a.generated_id(), b.generated_id());
        assert_ne!(a.generated_id(), c.generated_id());
    }
}
