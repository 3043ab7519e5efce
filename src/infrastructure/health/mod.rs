//! Liveness endpoint for hosting platforms that probe an HTTP port

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

pub const HEALTHY_BODY: &str = "Bot is running and healthy!";

#[derive(Clone)]
pub struct HealthState {
    service: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
    pub checked_at: String,
}

pub fn router(service: impl Into<String>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(HealthState { service: service.into() })
}

/// Bind the health endpoint and serve it in the background
pub async fn spawn(port: u16, service: impl Into<String>) -> std::io::Result<()> {
    let address = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    let app = router(service);

    tracing::info!("Web server listening on port {}", port);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Health endpoint terminated unexpectedly: {}", e);
        }
    });

    Ok(())
}

pub async fn root() -> (StatusCode, &'static str) {
    (StatusCode::OK, HEALTHY_BODY)
}

// Unconditionally healthy: the gateway connection is not probed.
pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let payload = HealthResponse {
        status: "ok",
        service: state.service,
        checked_at: Utc::now().to_rfc3339(),
    };
    (StatusCode::OK, Json(payload))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::extract::State;
    use axum::http::{Request, StatusCode};
    use axum::Json;
    use tower::ServiceExt;

    use super::{health, root, router, HealthState, HEALTHY_BODY};

    #[tokio::test]
    async fn root_reports_healthy() {
        let (status, body) = root().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, HEALTHY_BODY);
    }

    #[tokio::test]
    async fn health_reports_service_name() {
        let (status, Json(payload)) = health(State(HealthState { service: "trade-bot".to_string() })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.status, "ok");
        assert_eq!(payload.service, "trade-bot");
        assert!(!payload.checked_at.is_empty());
    }

    #[tokio::test]
    async fn router_serves_root() {
        let response = router("trade-bot")
            .oneshot(Request::builder().uri("/").body(Body::empty()).expect("request"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        assert_eq!(&bytes[..], HEALTHY_BODY.as_bytes());
    }

    #[tokio::test]
    async fn router_rejects_unknown_paths() {
        let response = router("trade-bot")
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).expect("request"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
