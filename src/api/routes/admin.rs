//! Admin edits. Changes live in memory only and are lost on restart
//! unless exported.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{Match, Player, PointsTableEntry, Team};

type Created<T> = Result<(StatusCode, Json<T>), ApiError>;

/// Unwrap a JSON body, reporting malformed input with the API error shape.
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

pub async fn create_team(
    State(state): State<AppState>,
    payload: Result<Json<Team>, JsonRejection>,
) -> Created<Team> {
    let team = body(payload)?;
    let created = state.store.write().await.create_team(team)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Team>, JsonRejection>,
) -> Result<Json<Team>, ApiError> {
    let team = body(payload)?;
    let updated = state.store.write().await.update_team(&id.into(), team)?;
    Ok(Json(updated))
}

pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Team>, ApiError> {
    let removed = state.store.write().await.delete_team(&id.into())?;
    Ok(Json(removed))
}

pub async fn create_player(
    State(state): State<AppState>,
    payload: Result<Json<Player>, JsonRejection>,
) -> Created<Player> {
    let player = body(payload)?;
    let created = state.store.write().await.create_player(player)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Player>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let player = body(payload)?;
    let updated = state.store.write().await.update_player(&id.into(), player)?;
    Ok(Json(updated))
}

pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Player>, ApiError> {
    let removed = state.store.write().await.delete_player(&id.into())?;
    Ok(Json(removed))
}

pub async fn create_match(
    State(state): State<AppState>,
    payload: Result<Json<Match>, JsonRejection>,
) -> Created<Match> {
    let fixture = body(payload)?;
    let created = state.store.write().await.create_match(fixture)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Match>, JsonRejection>,
) -> Result<Json<Match>, ApiError> {
    let fixture = body(payload)?;
    let updated = state.store.write().await.update_match(&id.into(), fixture)?;
    Ok(Json(updated))
}

pub async fn delete_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Match>, ApiError> {
    let removed = state.store.write().await.delete_match(&id.into())?;
    Ok(Json(removed))
}

pub async fn create_points_entry(
    State(state): State<AppState>,
    payload: Result<Json<PointsTableEntry>, JsonRejection>,
) -> Created<PointsTableEntry> {
    let entry = body(payload)?;
    let created = state.store.write().await.create_points_entry(entry)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_points_entry(
    State(state): State<AppState>,
    Path(team): Path<String>,
    payload: Result<Json<PointsTableEntry>, JsonRejection>,
) -> Result<Json<PointsTableEntry>, ApiError> {
    let entry = body(payload)?;
    let updated = state
        .store
        .write()
        .await
        .update_points_entry(&team.into(), entry)?;
    Ok(Json(updated))
}

pub async fn delete_points_entry(
    State(state): State<AppState>,
    Path(team): Path<String>,
) -> Result<Json<PointsTableEntry>, ApiError> {
    let removed = state.store.write().await.delete_points_entry(&team.into())?;
    Ok(Json(removed))
}
