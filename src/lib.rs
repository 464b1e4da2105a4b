//! # Cricket League
//!
//! Standings, match scoreboards and player leaderboards for a T20 league,
//! served over a small JSON API.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (teams, players, matches, points table)
//! - **calculate**: Standings ranking, scoreboards, leaderboards and lookups
//! - **storage**: In-memory repositories, seed data and JSONL snapshots
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;

pub use models::*;
