pub mod admin;
pub mod matches;
pub mod overview;
pub mod players;
pub mod standings;
pub mod stats;
pub mod teams;

/// Logo shown for teams without one.
pub const PLACEHOLDER_LOGO: &str = "/team-logos/placeholder.svg";

#[cfg(test)]
pub(crate) mod test_support {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::config::AppConfig;
    use crate::storage::LeagueStore;

    pub fn seeded_state() -> AppState {
        AppState::new(LeagueStore::seeded().unwrap(), AppConfig::default())
    }

    pub fn seeded_app() -> axum::Router {
        build_router(seeded_state())
    }

    pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        send_json(app, "GET", uri, None).await
    }

    pub async fn send_json(
        app: axum::Router,
        method: &str,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
            .unwrap();
        let resp = app.oneshot(request).await.unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }
}
