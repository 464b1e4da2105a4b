//! Team model.

use serde::{Deserialize, Serialize};

use super::validation::require;
use super::{EntityId, TeamId, ValidationError};

/// A franchise in the league.
///
/// The roster is not stored here: a team's players are every `Player`
/// whose `team_id` equals this team's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Empty on records submitted for creation; filled in by the store
    #[serde(default)]
    pub id: TeamId,

    /// Full name (e.g., "Chennai Super Kings")
    pub name: String,

    /// Short code (e.g., "CSK")
    pub short_name: String,

    /// Logo reference (path or URL)
    #[serde(default)]
    pub logo: String,

    pub primary_color: String,
    pub secondary_color: String,
    pub captain: String,

    /// Home venue
    pub home_ground: String,

    /// Number of titles won
    #[serde(default)]
    pub championships: u32,
}

impl Team {
    pub fn new(id: impl Into<TeamId>, name: &str, short_name: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            short_name: short_name.to_string(),
            logo: String::new(),
            primary_color: String::new(),
            secondary_color: String::new(),
            captain: String::new(),
            home_ground: String::new(),
            championships: 0,
        }
    }

    /// Builder method to set both theme colors.
    pub fn with_colors(mut self, primary: &str, secondary: &str) -> Self {
        self.primary_color = primary.to_string();
        self.secondary_color = secondary.to_string();
        self
    }

    pub fn with_logo(mut self, logo: &str) -> Self {
        self.logo = logo.to_string();
        self
    }

    pub fn with_captain(mut self, captain: &str) -> Self {
        self.captain = captain.to_string();
        self
    }

    pub fn with_home_ground(mut self, ground: &str) -> Self {
        self.home_ground = ground.to_string();
        self
    }

    pub fn with_championships(mut self, championships: u32) -> Self {
        self.championships = championships;
        self
    }

    /// Id to use for a new team submitted without one.
    pub fn generated_id(&self) -> TeamId {
        EntityId::generate(&["team", &self.name, &self.short_name])
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "name")?;
        require(&self.short_name, "shortName")?;
        Ok(())
    }
}
