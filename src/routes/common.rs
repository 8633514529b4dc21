//! Operational endpoints for load balancers and deploy tooling.
//! `/ready` is the only one that touches book storage.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

/// Liveness and readiness answer. `storage` is only reported by `/ready`.
#[derive(Serialize)]
struct Probe {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    storage: Option<&'static str>,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

async fn liveness() -> Json<Probe> {
    Json(Probe { status: "ok", storage: None })
}

async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<Probe>) {
    if state.sessions.ping().await {
        (StatusCode::OK, Json(Probe { status: "ok", storage: Some("ok") }))
    } else {
        tracing::warn!("readiness check failed: book storage unreachable");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(Probe { status: "degraded", storage: Some("unavailable") }),
        )
    }
}

async fn build_info() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health, /ready, /version (alias /info).
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(liveness))
        .route("/ready", get(readiness))
        .route("/version", get(build_info))
        .route("/info", get(build_info))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = common_routes(AppState::new(MemoryStore::new()));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_omits_storage() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn ready_reports_storage() {
        let (status, body) = get_json("/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["storage"], "ok");
    }

    #[tokio::test]
    async fn version_names_the_package() {
        let (_, body) = get_json("/info").await;
        assert_eq!(body["name"], "bookshelf");
    }
}
