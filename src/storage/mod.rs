//! League data store.
//!
//! Holds the four collections in memory behind the `Repository` interface:
//! - Teams, players, matches and points-table rows
//! - Referential checks for admin edits
//! - JSONL snapshot import/export
//! - The built-in seed league

pub mod jsonl;
pub mod repository;
pub mod seed;

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::calculate::find_issues;
use crate::models::{
    EntityId, LeagueSnapshot, Match, Player, PointsTableEntry, Team, TeamId, ValidationError,
};

pub use repository::{Entity, InMemoryRepository, Repository};

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("{entity} already exists: {id}")]
    AlreadyExists { entity: &'static str, id: String },

    #[error("Invalid record: {0}")]
    Invalid(#[from] ValidationError),

    #[error("{entity} {id} references unknown team {team}")]
    DanglingReference {
        entity: &'static str,
        id: String,
        team: String,
    },

    #[error("team {id} still has {players} player(s)")]
    InUse { id: String, players: usize },
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Directory holding the JSONL snapshot.
    pub fn league_dir(&self) -> PathBuf {
        self.data_dir.join("league")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}

/// All league collections, one repository each.
#[derive(Debug, Clone, Default)]
pub struct LeagueStore {
    pub teams: InMemoryRepository<Team>,
    pub players: InMemoryRepository<Player>,
    pub matches: InMemoryRepository<Match>,
    pub points_table: InMemoryRepository<PointsTableEntry>,
}

impl LeagueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a snapshot, keeping records as given. Data-quality
    /// problems are logged, not rejected.
    pub fn from_snapshot(snapshot: LeagueSnapshot) -> Self {
        for issue in find_issues(&snapshot) {
            warn!("League data: {}", issue);
        }
        Self {
            teams: InMemoryRepository::from_vec(snapshot.teams),
            players: InMemoryRepository::from_vec(snapshot.players),
            matches: InMemoryRepository::from_vec(snapshot.matches),
            points_table: InMemoryRepository::from_vec(snapshot.points_table),
        }
    }

    /// A store holding the built-in seed league.
    pub fn seeded() -> Result<Self, StorageError> {
        Ok(Self::from_snapshot(seed::league()?))
    }

    /// Load the JSONL snapshot if one was exported, otherwise the seed.
    pub fn load(config: &StorageConfig) -> Result<Self, StorageError> {
        if jsonl::snapshot_exists(config) {
            info!("Loading league snapshot from {:?}", config.league_dir());
            Ok(Self::from_snapshot(jsonl::load_snapshot(config)?))
        } else {
            info!("No snapshot in {:?}; using seed data", config.league_dir());
            Self::seeded()
        }
    }

    /// Owned copy of every collection for the computations.
    pub fn snapshot(&self) -> LeagueSnapshot {
        LeagueSnapshot {
            teams: self.teams.list().to_vec(),
            players: self.players.list().to_vec(),
            matches: self.matches.list().to_vec(),
            points_table: self.points_table.list().to_vec(),
        }
    }

    fn require_team(
        &self,
        entity: &'static str,
        id: &EntityId,
        team: &TeamId,
    ) -> Result<(), StorageError> {
        if self.teams.contains(team) {
            Ok(())
        } else {
            Err(StorageError::DanglingReference {
                entity,
                id: id.to_string(),
                team: team.to_string(),
            })
        }
    }

    fn check_player(&self, player: &Player) -> Result<(), StorageError> {
        self.require_team(Player::KIND, &player.id, &player.team_id)
    }

    fn check_match(&self, fixture: &Match) -> Result<(), StorageError> {
        self.require_team(Match::KIND, &fixture.id, &fixture.team1)?;
        self.require_team(Match::KIND, &fixture.id, &fixture.team2)
    }

    fn check_points(&self, entry: &PointsTableEntry) -> Result<(), StorageError> {
        if !entry.points_consistent() {
            warn!(
                team = %entry.team_id,
                stored = entry.points,
                expected = entry.expected_points(),
                "Points disagree with results"
            );
        }
        self.require_team(PointsTableEntry::KIND, &entry.team_id, &entry.team_id)
    }

    pub fn create_team(&mut self, team: Team) -> Result<Team, StorageError> {
        let team = prepare(team)?;
        insert(&mut self.teams, team)
    }

    pub fn update_team(&mut self, id: &EntityId, team: Team) -> Result<Team, StorageError> {
        let team = prepare_update(id, team)?;
        replace(&mut self.teams, team)
    }

    /// Remove a team. Refused while players still belong to it.
    pub fn delete_team(&mut self, id: &EntityId) -> Result<Team, StorageError> {
        let players = self
            .players
            .list()
            .iter()
            .filter(|p| &p.team_id == id)
            .count();
        if players > 0 {
            return Err(StorageError::InUse {
                id: id.to_string(),
                players,
            });
        }
        remove(&mut self.teams, id)
    }

    pub fn create_player(&mut self, player: Player) -> Result<Player, StorageError> {
        let player = prepare(player)?;
        self.check_player(&player)?;
        insert(&mut self.players, player)
    }

    pub fn update_player(&mut self, id: &EntityId, player: Player) -> Result<Player, StorageError> {
        let player = prepare_update(id, player)?;
        self.check_player(&player)?;
        replace(&mut self.players, player)
    }

    pub fn delete_player(&mut self, id: &EntityId) -> Result<Player, StorageError> {
        remove(&mut self.players, id)
    }

    pub fn create_match(&mut self, fixture: Match) -> Result<Match, StorageError> {
        let fixture = prepare(fixture)?;
        self.check_match(&fixture)?;
        insert(&mut self.matches, fixture)
    }

    pub fn update_match(&mut self, id: &EntityId, fixture: Match) -> Result<Match, StorageError> {
        let fixture = prepare_update(id, fixture)?;
        self.check_match(&fixture)?;
        replace(&mut self.matches, fixture)
    }

    pub fn delete_match(&mut self, id: &EntityId) -> Result<Match, StorageError> {
        remove(&mut self.matches, id)
    }

    pub fn create_points_entry(
        &mut self,
        entry: PointsTableEntry,
    ) -> Result<PointsTableEntry, StorageError> {
        let entry = prepare(entry)?;
        self.check_points(&entry)?;
        insert(&mut self.points_table, entry)
    }

    pub fn update_points_entry(
        &mut self,
        team: &EntityId,
        entry: PointsTableEntry,
    ) -> Result<PointsTableEntry, StorageError> {
        let entry = prepare_update(team, entry)?;
        self.check_points(&entry)?;
        replace(&mut self.points_table, entry)
    }

    pub fn delete_points_entry(
        &mut self,
        team: &EntityId,
    ) -> Result<PointsTableEntry, StorageError> {
        remove(&mut self.points_table, team)
    }
}

/// Validate a new record, generating its id when missing.
fn prepare<T: Entity>(mut item: T) -> Result<T, StorageError> {
    if item.id().is_empty() {
        let id = item.generated_id();
        debug!("Generated {} id {}", T::KIND, id);
        item.set_id(id);
    }
    item.validate()?;
    Ok(item)
}

/// Validate a replacement; the path id wins over any id in the body.
fn prepare_update<T: Entity>(id: &EntityId, mut item: T) -> Result<T, StorageError> {
    item.set_id(id.clone());
    item.validate()?;
    Ok(item)
}

fn insert<T: Entity>(repo: &mut InMemoryRepository<T>, item: T) -> Result<T, StorageError> {
    if repo.contains(item.id()) {
        return Err(StorageError::AlreadyExists {
            entity: T::KIND,
            id: item.id().to_string(),
        });
    }
    info!("Created {} {}", T::KIND, item.id());
    repo.upsert(item.clone());
    Ok(item)
}

fn replace<T: Entity>(repo: &mut InMemoryRepository<T>, item: T) -> Result<T, StorageError> {
    if !repo.contains(item.id()) {
        return Err(not_found::<T>(item.id()));
    }
    info!("Updated {} {}", T::KIND, item.id());
    repo.upsert(item.clone());
    Ok(item)
}

fn remove<T: Entity>(repo: &mut InMemoryRepository<T>, id: &EntityId) -> Result<T, StorageError> {
    let removed = repo.remove(id).ok_or_else(|| not_found::<T>(id))?;
    info!("Deleted {} {}", T::KIND, id);
    Ok(removed)
}

fn not_found<T: Entity>(id: &EntityId) -> StorageError {
    StorageError::NotFound {
        entity: T::KIND,
        id: id.to_string(),
    }
}
