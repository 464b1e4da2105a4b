use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::{ApiError, Pagination, PaginationMeta};
use crate::calculate::{filter_players, PlayerFilter};
use crate::models::{Player, PlayerRole, Team};

#[derive(Debug, Deserialize)]
pub struct ListPlayersParams {
    pub search: Option<String>,
    pub team: Option<String>,
    pub role: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ListPlayersParams {
    fn filter(&self) -> Result<PlayerFilter, ApiError> {
        let role = match self.role.as_deref().map(str::trim) {
            Some(r) if !r.is_empty() && r != "all" => {
                Some(r.parse::<PlayerRole>().map_err(ApiError::BadRequest)?)
            }
            _ => None,
        };
        let team = self
            .team
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty() && *t != "all")
            .map(Into::into);

        Ok(PlayerFilter {
            search: self.search.clone(),
            team,
            role,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct PlayerListResponse<'a> {
    pub players: &'a [&'a Player],
    pub pagination: PaginationMeta,
}

#[derive(Debug, Serialize)]
pub struct PlayerDetailResponse<'a> {
    #[serde(flatten)]
    pub player: &'a Player,
    pub team: Option<&'a Team>,
}

pub async fn list_players(
    State(state): State<AppState>,
    Query(params): Query<ListPlayersParams>,
) -> Result<Response, ApiError> {
    let filter = params.filter()?;
    let snapshot = state.snapshot().await;
    let players = filter_players(&snapshot.players, &filter);

    let pagination = Pagination::new(params.page, params.page_size);
    let meta = PaginationMeta::new(&pagination, players.len() as u32);

    let response = PlayerListResponse {
        players: pagination.slice(&players),
        pagination: meta,
    };
    Ok(Json(response).into_response())
}

pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let snapshot = state.snapshot().await;
    let player = snapshot
        .player(&id.as_str().into())
        .ok_or_else(|| ApiError::NotFound(format!("player {}", id)))?;

    let response = PlayerDetailResponse {
        player,
        team: snapshot.team(&player.team_id),
    };
    Ok(Json(response).into_response())
}

#[cfg(test)]
mod tests {
    use crate::api::routes::test_support::{get_json, seeded_app};
    use axum::http::StatusCode;

    fn ids(json: &serde_json::Value) -> Vec<&str> {
        json["players"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_list_all_players() {
        let (status, json) = get_json(seeded_app(), "/api/players").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&json), vec!["p1", "p2", "p3", "p4", "p5"]);
        assert_eq!(json["pagination"]["total_items"], 5);
        assert_eq!(json["players"][0]["role"], "Wicket-keeper");
    }

    #[tokio::test]
    async fn test_filters_combine() {
        let (_, json) = get_json(seeded_app(), "/api/players?team=mi&role=bowler").await;
        assert_eq!(ids(&json), vec!["p4"]);

        let (_, json) = get_json(seeded_app(), "/api/players?search=sharma&team=all").await;
        assert_eq!(ids(&json), vec!["p3"]);
    }

    #[tokio::test]
    async fn test_pagination() {
        let (_, json) = get_json(seeded_app(), "/api/players?page=2&page_size=2").await;
        assert_eq!(ids(&json), vec!["p3", "p4"]);
        assert_eq!(json["pagination"]["total_pages"], 3);
        assert_eq!(json["pagination"]["has_next"], true);

        let (_, json) = get_json(seeded_app(), "/api/players?page=9").await;
        assert!(ids(&json).is_empty());
    }

    #[tokio::test]
    async fn test_huge_page_is_empty() {
        let (status, json) =
            get_json(seeded_app(), "/api/players?page=50000000&page_size=100").await;
        assert_eq!(status, StatusCode::OK);
        assert!(ids(&json).is_empty());
        assert_eq!(json["pagination"]["has_next"], false);
        assert_eq!(json["pagination"]["total_items"], 5);
    }

    #[tokio::test]
    async fn test_unknown_role_is_bad_request() {
        let (status, _) = get_json(seeded_app(), "/api/players?role=umpire").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_player_detail() {
        let (status, json) = get_json(seeded_app(), "/api/players/p5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["name"], "Ravindra Jadeja");
        assert_eq!(json["stats"]["bestBowling"], "5/16");
        assert_eq!(json["team"]["name"], "Chennai Super Kings");

        let (status, _) = get_json(seeded_app(), "/api/players/p42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
