//! JSONL (JSON Lines) snapshots.
//!
//! A league snapshot is four files under `<data_dir>/league/`, one JSON
//! object per line. Loading is lenient: unparseable lines are skipped.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};

use super::{StorageConfig, StorageError};
use crate::models::LeagueSnapshot;

/// Entity types for JSONL storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Team,
    Player,
    Match,
    PointsEntry,
}

impl EntityType {
    pub const ALL: [EntityType; 4] = [
        EntityType::Team,
        EntityType::Player,
        EntityType::Match,
        EntityType::PointsEntry,
    ];

    /// Get the filename for this entity type.
    pub fn filename(&self) -> &'static str {
        match self {
            EntityType::Team => "teams.jsonl",
            EntityType::Player => "players.jsonl",
            EntityType::Match => "matches.jsonl",
            EntityType::PointsEntry => "points_table.jsonl",
        }
    }
}

/// Get the path for an entity file.
pub fn entity_path(config: &StorageConfig, entity: EntityType) -> PathBuf {
    config.league_dir().join(entity.filename())
}

/// JSONL file writer.
pub struct JsonlWriter<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Serialize> JsonlWriter<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    pub fn for_entity(config: &StorageConfig, entity: EntityType) -> Self {
        Self::new(entity_path(config, entity))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Append a single entity to the file.
    pub fn append(&self, entity: &T) -> Result<(), StorageError> {
        self.ensure_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = BufWriter::new(file);
        let json = serde_json::to_string(entity)?;
        writeln!(writer, "{}", json)?;
        writer.flush()?;

        debug!("Appended entity to {:?}", self.path);
        Ok(())
    }

    /// Write entities, replacing the entire file.
    pub fn write_all(&self, entities: &[T]) -> Result<usize, StorageError> {
        self.ensure_dir()?;

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);

        for entity in entities {
            let json = serde_json::to_string(entity)?;
            writeln!(writer, "{}", json)?;
        }

        writer.flush()?;
        info!("Wrote {} entities to {:?}", entities.len(), self.path);

        Ok(entities.len())
    }
}

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    pub fn for_entity(config: &StorageConfig, entity: EntityType) -> Self {
        Self::new(entity_path(config, entity))
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read all entities from the file. A missing file reads as empty.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut entities = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(entity) => entities.push(entity),
                Err(e) => {
                    warn!(
                        "Failed to parse line {} in {:?}: {}",
                        index + 1,
                        self.path,
                        e
                    );
                }
            }
        }

        debug!("Read {} entities from {:?}", entities.len(), self.path);
        Ok(entities)
    }
}

/// Whether a snapshot has been exported into the data directory.
pub fn snapshot_exists(config: &StorageConfig) -> bool {
    EntityType::ALL
        .iter()
        .any(|entity| entity_path(config, *entity).exists())
}

/// Load all four collections. Fails only when the data directory is missing.
pub fn load_snapshot(config: &StorageConfig) -> Result<LeagueSnapshot, StorageError> {
    if !config.data_dir.exists() {
        return Err(StorageError::PathNotFound(config.data_dir.clone()));
    }

    let snapshot = LeagueSnapshot {
        teams: JsonlReader::for_entity(config, EntityType::Team).read_all()?,
        players: JsonlReader::for_entity(config, EntityType::Player).read_all()?,
        matches: JsonlReader::for_entity(config, EntityType::Match).read_all()?,
        points_table: JsonlReader::for_entity(config, EntityType::PointsEntry).read_all()?,
    };

    info!(
        teams = snapshot.teams.len(),
        players = snapshot.players.len(),
        matches = snapshot.matches.len(),
        "Loaded league snapshot from {:?}",
        config.league_dir()
    );
    Ok(snapshot)
}

/// Write all four collections, replacing any existing files.
pub fn save_snapshot(
    config: &StorageConfig,
    snapshot: &LeagueSnapshot,
) -> Result<usize, StorageError> {
    let mut written = 0;
    written += JsonlWriter::for_entity(config, EntityType::Team).write_all(&snapshot.teams)?;
    written += JsonlWriter::for_entity(config, EntityType::Player).write_all(&snapshot.players)?;
    written += JsonlWriter::for_entity(config, EntityType::Match).write_all(&snapshot.matches)?;
    written +=
        JsonlWriter::for_entity(config, EntityType::PointsEntry).write_all(&snapshot.points_table)?;
    Ok(written)
}
