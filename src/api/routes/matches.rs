use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{by_status, search_matches, InningsView, MatchScoreboard, ScoreLine};
use crate::models::{LeagueSnapshot, Match, MatchStatus};

#[derive(Debug, Deserialize)]
pub struct ListMatchesParams {
    pub status: Option<String>,
    pub search: Option<String>,
}

/// A match with both teams' names and current scores.
#[derive(Debug, Serialize)]
pub struct MatchSummary<'a> {
    #[serde(flatten)]
    pub fixture: &'a Match,
    pub team1_name: &'a str,
    pub team2_name: &'a str,
    pub team1_score: ScoreLine,
    pub team2_score: ScoreLine,
}

impl<'a> MatchSummary<'a> {
    pub fn new(fixture: &'a Match, snapshot: &'a LeagueSnapshot) -> Self {
        let board = MatchScoreboard::new(fixture, &snapshot.players);
        Self {
            fixture,
            team1_name: snapshot.team_name(&fixture.team1),
            team2_name: snapshot.team_name(&fixture.team2),
            team1_score: board.score_line_for(&fixture.team1),
            team2_score: board.score_line_for(&fixture.team2),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MatchListResponse<'a> {
    pub matches: Vec<MatchSummary<'a>>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct MatchDetailResponse<'a> {
    #[serde(flatten)]
    pub summary: MatchSummary<'a>,
    pub innings: Vec<InningsView<'a>>,
}

pub fn parse_status(raw: Option<&str>) -> Result<Option<MatchStatus>, ApiError> {
    match raw.map(str::trim).filter(|s| !s.is_empty() && *s != "all") {
        Some(s) => s.parse().map(Some).map_err(ApiError::BadRequest),
        None => Ok(None),
    }
}

pub async fn list_matches(
    State(state): State<AppState>,
    Query(params): Query<ListMatchesParams>,
) -> Result<Response, ApiError> {
    let status = parse_status(params.status.as_deref())?;
    let snapshot = state.snapshot().await;

    let selected: Vec<&Match> = match status {
        Some(status) => by_status(&snapshot.matches, status),
        None => MatchStatus::ALL
            .iter()
            .flat_map(|s| by_status(&snapshot.matches, *s))
            .collect(),
    };
    let found = search_matches(
        &selected,
        &snapshot.teams,
        params.search.as_deref().unwrap_or(""),
    );

    let matches: Vec<MatchSummary> = found
        .into_iter()
        .map(|m| MatchSummary::new(m, &snapshot))
        .collect();
    let response = MatchListResponse {
        total: matches.len(),
        matches,
    };
    Ok(Json(response).into_response())
}

pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let snapshot = state.snapshot().await;
    let fixture = snapshot
        .fixture(&id.as_str().into())
        .ok_or_else(|| ApiError::NotFound(format!("match {}", id)))?;

    let board = MatchScoreboard::new(fixture, &snapshot.players);
    let response = MatchDetailResponse {
        summary: MatchSummary::new(fixture, &snapshot),
        innings: board.innings_views(),
    };
    Ok(Json(response).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::routes::test_support::{get_json, seeded_app};
    use axum::http::StatusCode;

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status(None).unwrap(), None);
        assert_eq!(parse_status(Some("all")).unwrap(), None);
        assert_eq!(parse_status(Some("live")).unwrap(), Some(MatchStatus::Live));
        assert!(matches!(
            parse_status(Some("postponed")),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_list_matches_groups_by_status() {
        let (status, json) = get_json(seeded_app(), "/api/matches").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"], 8);

        let ids: Vec<&str> = json["matches"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["m1", "m2", "m3", "m4", "m5", "m8", "m7", "m6"]);
    }

    #[tokio::test]
    async fn test_list_completed_most_recent_first() {
        let (status, json) = get_json(seeded_app(), "/api/matches?status=completed").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"], 2);
        assert_eq!(json["matches"][0]["id"], "m7");
        assert_eq!(json["matches"][0]["result"], "Mumbai Indians won by 7 wickets");
        assert_eq!(json["matches"][1]["team1_score"]["runs"], 157);
    }

    #[tokio::test]
    async fn test_search_by_team_name() {
        let (_, json) = get_json(seeded_app(), "/api/matches?search=sunrisers").await;
        let ids: Vec<&str> = json["matches"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["m4", "m8"]);
    }

    #[tokio::test]
    async fn test_invalid_status_is_bad_request() {
        let (status, json) = get_json(seeded_app(), "/api/matches?status=abandoned").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_live_match_detail() {
        let (status, json) = get_json(seeded_app(), "/api/matches/m8").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "Live");
        assert_eq!(json["team1_name"], "Sunrisers Hyderabad");
        assert_eq!(json["team1_score"]["kind"], "scored");
        assert_eq!(json["team1_score"]["overs"], 14.2);

        let innings = json["innings"].as_array().unwrap();
        assert_eq!(innings.len(), 2);
        assert_eq!(innings[0]["is_chasing"], false);
        assert_eq!(innings[1]["is_chasing"], true);
        assert_eq!(innings[1]["bowling_team"], "csk");
        assert_eq!(innings[1]["bowling"][0]["player_name"], "Ravindra Jadeja");
    }

    #[tokio::test]
    async fn test_upcoming_match_yet_to_bat() {
        let (status, json) = get_json(seeded_app(), "/api/matches/m1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["team1_score"]["kind"], "yet_to_bat");
        assert!(json["innings"].as_array().unwrap().is_empty());
        assert!(json.get("scorecard").is_none());
    }

    #[tokio::test]
    async fn test_unknown_match_is_404() {
        let (status, json) = get_json(seeded_app(), "/api/matches/m99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }
}
