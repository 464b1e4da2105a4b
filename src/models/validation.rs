//! Record validation errors.

use thiserror::Error;

/// Reasons a record is rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("teams must be different (both are {0})")]
    SameTeams(String),

    #[error("innings {number}: batting team {team} is not playing this match")]
    ForeignBattingTeam { number: u8, team: String },

    #[error("innings {number}: {wickets} wickets is more than 10")]
    TooManyWickets { number: u8, wickets: u32 },

    #[error("invalid overs value {0}: balls must be between 0 and 5, overs at most 1000")]
    InvalidOvers(f64),

    #[error("innings {number} is out of range for a scorecard of {count} innings")]
    InningsOutOfRange { number: u8, count: usize },

    #[error("innings {0} appears more than once")]
    DuplicateInnings(u8),

    #[error("{team}: won + lost + tied + no result ({recorded}) exceeds played ({played})")]
    ResultsExceedPlayed {
        team: String,
        recorded: u64,
        played: u32,
    },
}

/// Fail with `MissingField` when `value` is blank.
pub(crate) fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}
