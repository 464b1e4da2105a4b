//! Core data models for the league.

mod fixture;
mod ids;
mod league;
mod player;
mod points_table;
mod scorecard;
mod team;
mod validation;

pub use fixture::*;
pub use ids::*;
pub use league::*;
pub use player::*;
pub use points_table::*;
pub use scorecard::*;
pub use team::*;
pub use validation::ValidationError;
