use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::routes::PLACEHOLDER_LOGO;
use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{rank_standings_with, roster, search_teams, RankedEntry};
use crate::models::{MatchId, Player, Team};

#[derive(Debug, Deserialize)]
pub struct ListTeamsParams {
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TeamSummary<'a> {
    #[serde(flatten)]
    pub team: &'a Team,
    pub logo_url: &'a str,
    pub player_count: usize,
}

#[derive(Debug, Serialize)]
pub struct TeamListResponse<'a> {
    pub teams: Vec<TeamSummary<'a>>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct TeamDetailResponse<'a> {
    #[serde(flatten)]
    pub team: &'a Team,
    pub logo_url: &'a str,
    pub players: Vec<&'a Player>,
    pub standing: Option<RankedEntry<'a>>,
    pub matches: Vec<&'a MatchId>,
}

fn logo_url(team: &Team) -> &str {
    if team.logo.is_empty() {
        PLACEHOLDER_LOGO
    } else {
        &team.logo
    }
}

pub async fn list_teams(
    State(state): State<AppState>,
    Query(params): Query<ListTeamsParams>,
) -> Result<Response, ApiError> {
    let snapshot = state.snapshot().await;
    let query = params.search.as_deref().unwrap_or("");
    let teams: Vec<TeamSummary> = search_teams(&snapshot.teams, query)
        .into_iter()
        .map(|team| TeamSummary {
            team,
            logo_url: logo_url(team),
            player_count: roster(&snapshot.players, &team.id).len(),
        })
        .collect();

    let response = TeamListResponse {
        total: teams.len(),
        teams,
    };
    Ok(Json(response).into_response())
}

pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let snapshot = state.snapshot().await;
    let team = snapshot
        .team(&id.as_str().into())
        .ok_or_else(|| ApiError::NotFound(format!("team {}", id)))?;

    let standing = rank_standings_with(&snapshot.points_table, state.config.league.qualifying_spots)
        .into_iter()
        .find(|row| row.entry.team_id == team.id);

    let response = TeamDetailResponse {
        team,
        logo_url: logo_url(team),
        players: roster(&snapshot.players, &team.id),
        standing,
        matches: snapshot
            .matches
            .iter()
            .filter(|m| m.involves(&team.id))
            .map(|m| &m.id)
            .collect(),
    };
    Ok(Json(response).into_response())
}
