use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{
    role_distribution, stat_leaders, top_performer_for_role, LeaderRow, RoleCount, Stat,
};
use crate::models::{Player, PlayerRole};

#[derive(Debug, Deserialize)]
pub struct LeadersParams {
    pub stat: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct LeadersResponse<'a> {
    pub stat: Stat,
    pub leaders: Vec<LeaderRow<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RoleBreakdown<'a> {
    #[serde(flatten)]
    pub distribution: RoleCount,
    pub top_performer: Option<&'a Player>,
}

#[derive(Debug, Serialize)]
pub struct RolesResponse<'a> {
    pub total_players: usize,
    pub roles: Vec<RoleBreakdown<'a>>,
}

pub async fn leaders(
    State(state): State<AppState>,
    Query(params): Query<LeadersParams>,
) -> Result<Response, ApiError> {
    let stat = match params.stat.as_deref() {
        Some(raw) => raw.parse::<Stat>().map_err(ApiError::BadRequest)?,
        None => Stat::Runs,
    };
    let limit = params
        .limit
        .unwrap_or(state.config.league.stats_leaders)
        .clamp(1, 100);

    let snapshot = state.snapshot().await;
    let response = LeadersResponse {
        stat,
        leaders: stat_leaders(&snapshot.players, stat, limit),
    };
    Ok(Json(response).into_response())
}

pub async fn roles(State(state): State<AppState>) -> Result<Response, ApiError> {
    let snapshot = state.snapshot().await;
    let roles: Vec<RoleBreakdown> = role_distribution(&snapshot.players)
        .into_iter()
        .map(|distribution| {
            let role: PlayerRole = distribution.role;
            RoleBreakdown {
                top_performer: top_performer_for_role(&snapshot.players, role),
                distribution,
            }
        })
        .collect();

    let response = RolesResponse {
        total_players: snapshot.players.len(),
        roles,
    };
    Ok(Json(response).into_response())
}

#[cfg(test)]
mod tests {
    use crate::api::routes::test_support::{get_json, seeded_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_default_leaders_are_run_scorers() {
        let (status, json) = get_json(seeded_app(), "/api/stats/leaders").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["stat"], "runs");

        let names: Vec<&str> = json["leaders"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["player"]["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["Virat Kohli", "Rohit Sharma", "MS Dhoni", "Ravindra Jadeja", "Jasprit Bumrah"]
        );
        assert_eq!(json["leaders"][0]["rank"], 1);
        assert_eq!(json["leaders"][0]["value"], 7263.0);
    }

    #[tokio::test]
    async fn test_wicket_leaders_skip_zero() {
        let (_, json) = get_json(seeded_app(), "/api/stats/leaders?stat=wickets&limit=10").await;
        let ids: Vec<&str> = json["leaders"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["player"]["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["p5", "p4", "p3", "p2"]);
    }

    #[tokio::test]
    async fn test_leaders_limit_and_alias() {
        let (_, json) = get_json(seeded_app(), "/api/stats/leaders?stat=sr&limit=2").await;
        assert_eq!(json["stat"], "strike_rate");
        assert_eq!(json["leaders"].as_array().unwrap().len(), 2);
        assert_eq!(json["leaders"][0]["player"]["id"], "p5");
    }

    #[tokio::test]
    async fn test_unknown_stat_is_bad_request() {
        let (status, _) = get_json(seeded_app(), "/api/stats/leaders?stat=catches").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_role_breakdown() {
        let (status, json) = get_json(seeded_app(), "/api/stats/roles").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total_players"], 5);

        let roles = json["roles"].as_array().unwrap();
        assert_eq!(roles.len(), 4);
        assert_eq!(roles[0]["role"], "Batsman");
        assert_eq!(roles[0]["count"], 2);
        assert_eq!(roles[0]["top_performer"]["id"], "p2");
        assert_eq!(roles[1]["top_performer"]["id"], "p4");
        assert_eq!(roles[2]["top_performer"]["id"], "p5");
        assert_eq!(roles[3]["top_performer"]["id"], "p1");
        assert_eq!(roles[3]["share"], 0.2);
    }
}
