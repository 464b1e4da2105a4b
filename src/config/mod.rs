//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::calculate::{leaderboards, standings};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed browser origin, or "*" for any
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "*".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

/// Display settings for the league pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueConfig {
    #[serde(default = "default_league_name")]
    pub name: String,

    /// Rows highlighted as qualifying in the standings
    #[serde(default = "default_qualifying_spots")]
    pub qualifying_spots: usize,

    /// Leaders shown per category on the overview
    #[serde(default = "default_home_leaders")]
    pub home_leaders: usize,

    /// Default leaderboard length on the stats page
    #[serde(default = "default_stats_leaders")]
    pub stats_leaders: usize,

    #[serde(default = "default_home_standings_rows")]
    pub home_standings_rows: usize,
}

fn default_league_name() -> String {
    "IPL 2025".to_string()
}

fn default_qualifying_spots() -> usize {
    standings::QUALIFYING_SPOTS
}

fn default_home_leaders() -> usize {
    leaderboards::HOME_LEADERS
}

fn default_stats_leaders() -> usize {
    leaderboards::STATS_LEADERS
}

fn default_home_standings_rows() -> usize {
    5
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            name: default_league_name(),
            qualifying_spots: default_qualifying_spots(),
            home_leaders: default_home_leaders(),
            stats_leaders: default_stats_leaders(),
            home_standings_rows: default_home_standings_rows(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub league: LeagueConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            server: ServerConfig::default(),
            league: LeagueConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("No config at {:?}; using defaults", path);
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        let league = &self.league;
        for (name, value) in [
            ("qualifying_spots", league.qualifying_spots),
            ("home_leaders", league.home_leaders),
            ("stats_leaders", league.stats_leaders),
            ("home_standings_rows", league.home_standings_rows),
        ] {
            if value == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "league.{} must be greater than 0",
                    name
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.league.qualifying_spots, 4);
        assert_eq!(config.league.home_leaders, 3);
        assert_eq!(config.league.stats_leaders, 10);
        assert_eq!(config.league.home_standings_rows, 5);
    }

    #[test]
    fn test_config_validation_ok() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_zero_spots() {
        let mut config = AppConfig::default();
        config.league.qualifying_spots = 0;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("qualifying_spots"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("league.toml");
        std::fs::write(
            &path,
            r#"
log_level = "debug"

[league]
name = "Test League"
qualifying_spots = 2
"#,
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.league.name, "Test League");
        assert_eq!(config.league.qualifying_spots, 2);
        assert_eq!(config.league.stats_leaders, 10);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load_or_default(&temp_dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.league.name, "IPL 2025");
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        std::fs::write(&path, "data_dir = [").unwrap();

        assert!(matches!(
            AppConfig::from_file(&path),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.data_dir, parsed.data_dir);
        assert_eq!(config.league.name, parsed.league.name);
    }
}
