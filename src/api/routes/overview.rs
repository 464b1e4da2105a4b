//! Home page summary.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::api::routes::matches::MatchSummary;
use crate::api::routes::standings::{standing_rows, StandingRow};
use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{
    featured_match, recent_results, stat_leaders, LeaderRow, Stat, RECENT_RESULTS,
};

#[derive(Debug, Serialize)]
pub struct OverviewResponse<'a> {
    pub league: &'a str,
    pub featured: Option<MatchSummary<'a>>,
    pub recent_results: Vec<MatchSummary<'a>>,
    pub top_run_scorers: Vec<LeaderRow<'a>>,
    pub top_wicket_takers: Vec<LeaderRow<'a>>,
    pub standings: Vec<StandingRow<'a>>,
}

pub async fn overview(State(state): State<AppState>) -> Result<Response, ApiError> {
    let snapshot = state.snapshot().await;
    let league = &state.config.league;

    let mut standings = standing_rows(&snapshot, league.qualifying_spots);
    standings.truncate(league.home_standings_rows);

    let response = OverviewResponse {
        league: &league.name,
        featured: featured_match(&snapshot.matches).map(|m| MatchSummary::new(m, &snapshot)),
        recent_results: recent_results(&snapshot.matches, RECENT_RESULTS)
            .into_iter()
            .map(|m| MatchSummary::new(m, &snapshot))
            .collect(),
        top_run_scorers: stat_leaders(&snapshot.players, Stat::Runs, league.home_leaders),
        top_wicket_takers: stat_leaders(&snapshot.players, Stat::Wickets, league.home_leaders),
        standings,
    };
    Ok(Json(response).into_response())
}
