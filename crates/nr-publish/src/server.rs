use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::net::SocketAddr;

use crate::config::PublishConfig;
use crate::github::GithubClient;

pub async fn run_server(listen_addr: &str) -> Result<(), String> {
    let addr: SocketAddr = listen_addr
        .parse()
        .map_err(|e| format!("Invalid listen addr: {e}"))?;

    // Non-POST methods on the route get 405 from axum's method router.
    let app = Router::new().route("/api/save", post(save));

    tracing::info!(%addr, "Publish HTTP server listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| e.to_string())?;

    axum::serve(listener, app).await.map_err(|e| e.to_string())
}

// ═══════════════════════════════════════════════════════════════
// POST /api/save
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
struct SaveRequest {
    payload: Value,
}

async fn save(Json(req): Json<SaveRequest>) -> impl IntoResponse {
    let cfg = match PublishConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error=%e, "Save rejected: configuration incomplete");
            let body = json!({"error": e.to_string()});
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
        }
    };

    let client = GithubClient::new(cfg);
    match client.commit_payload(&req.payload).await {
        Ok(()) => {
            tracing::info!("Site data committed");
            let body = json!({"success": true, "message": "Saved successfully!"});
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            // No automatic retry; the admin panel owns retry policy.
            tracing::error!(error=%e, "Save failed");
            let body = json!({"error": e.to_string()});
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
