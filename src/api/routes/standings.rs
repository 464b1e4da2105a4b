use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::routes::PLACEHOLDER_LOGO;
use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{rank_standings_with, win_percentage};
use crate::models::{LeagueSnapshot, PointsTableEntry};

#[derive(Debug, Deserialize)]
pub struct StandingsParams {
    pub limit: Option<usize>,
}

/// One table row joined with its team.
#[derive(Debug, Serialize)]
pub struct StandingRow<'a> {
    pub position: usize,
    pub qualifying: bool,
    pub team_name: &'a str,
    pub short_name: &'a str,
    pub logo: &'a str,
    pub win_percentage: f64,
    #[serde(flatten)]
    pub entry: &'a PointsTableEntry,
}

#[derive(Debug, Serialize)]
pub struct StandingsResponse<'a> {
    pub qualifying_spots: usize,
    pub rows: Vec<StandingRow<'a>>,
}

/// The ranked table, minus rows whose team is unknown. Positions are
/// taken before those rows are dropped.
pub fn standing_rows(snapshot: &LeagueSnapshot, qualifying_spots: usize) -> Vec<StandingRow<'_>> {
    rank_standings_with(&snapshot.points_table, qualifying_spots)
        .into_iter()
        .filter_map(|ranked| {
            let Some(team) = snapshot.team(&ranked.entry.team_id) else {
                warn!(team = %ranked.entry.team_id, "Skipping points table row for unknown team");
                return None;
            };
            Some(StandingRow {
                position: ranked.position,
                qualifying: ranked.qualifying,
                team_name: &team.name,
                short_name: &team.short_name,
                logo: if team.logo.is_empty() {
                    PLACEHOLDER_LOGO
                } else {
                    &team.logo
                },
                win_percentage: win_percentage(ranked.entry),
                entry: ranked.entry,
            })
        })
        .collect()
}

pub async fn standings(
    State(state): State<AppState>,
    Query(params): Query<StandingsParams>,
) -> Result<Response, ApiError> {
    let snapshot = state.snapshot().await;
    let qualifying_spots = state.config.league.qualifying_spots;

    let mut rows = standing_rows(&snapshot, qualifying_spots);
    if let Some(limit) = params.limit {
        rows.truncate(limit);
    }

    let response = StandingsResponse {
        qualifying_spots,
        rows,
    };
    Ok(Json(response).into_response())
}
