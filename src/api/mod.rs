//! REST API endpoints.
//!
//! Axum-based HTTP API over the league store. Read endpoints recompute
//! from a fresh snapshot on every request; admin endpoints edit the
//! in-memory store only.

pub mod routes;
pub mod state;

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::storage::StorageError;
use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            StorageError::AlreadyExists { .. }
            | StorageError::Invalid(_)
            | StorageError::DanglingReference { .. }
            | StorageError::InUse { .. } => ApiError::BadRequest(err.to_string()),
            StorageError::Io(_) | StorageError::Json(_) | StorageError::PathNotFound(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };
        if status.is_server_error() {
            error!("{}", self);
        }

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Pagination parameters.
#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 50,
        }
    }
}

impl Pagination {
    pub fn new(page: Option<u32>, page_size: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            page_size: page_size.unwrap_or(50).clamp(1, 100),
        }
    }

    /// Index of the first item on this page, saturating for absurd pages.
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.page_size as usize)
    }

    /// The slice of `items` on this page; empty past the end.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = (start + self.page_size as usize).min(items.len());
        &items[start..end]
    }
}

/// Pagination metadata in responses.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(pagination: &Pagination, total_items: u32) -> Self {
        let total_pages = total_items.div_ceil(pagination.page_size);
        Self {
            page: pagination.page,
            page_size: pagination.page_size,
            total_items,
            total_pages,
            has_next: pagination.page < total_pages,
            has_prev: pagination.page > 1,
        }
    }
}

fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origin == "*" {
        return layer.allow_origin(Any);
    }
    match HeaderValue::from_str(origin) {
        Ok(value) => layer.allow_origin(AllowOrigin::exact(value)),
        Err(_) => {
            warn!("Ignoring invalid CORS origin {:?}; allowing any", origin);
            layer.allow_origin(Any)
        }
    }
}

/// Build the full API router.
pub fn build_router(state: AppState) -> Router {
    use routes::{admin, matches, overview, players, standings, stats, teams};

    let cors = cors_layer(&state.config.server.cors_origin);

    Router::new()
        .route("/api/overview", get(overview::overview))
        .route("/api/teams", get(teams::list_teams))
        .route("/api/teams/:id", get(teams::get_team))
        .route("/api/players", get(players::list_players))
        .route("/api/players/:id", get(players::get_player))
        .route("/api/matches", get(matches::list_matches))
        .route("/api/matches/:id", get(matches::get_match))
        .route("/api/standings", get(standings::standings))
        .route("/api/stats/leaders", get(stats::leaders))
        .route("/api/stats/roles", get(stats::roles))
        .route("/api/admin/teams", post(admin::create_team))
        .route(
            "/api/admin/teams/:id",
            put(admin::update_team).delete(admin::delete_team),
        )
        .route("/api/admin/players", post(admin::create_player))
        .route(
            "/api/admin/players/:id",
            put(admin::update_player).delete(admin::delete_player),
        )
        .route("/api/admin/matches", post(admin::create_match))
        .route(
            "/api/admin/matches/:id",
            put(admin::update_match).delete(admin::delete_match),
        )
        .route("/api/admin/standings", post(admin::create_points_entry))
        .route(
            "/api/admin/standings/:id",
            put(admin::update_points_entry).delete(admin::delete_points_entry),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
