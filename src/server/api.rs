use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::config::ProjectLayout;
use crate::errors::TeamError;
use crate::orchestrator::{OrchestrationSummary, run_orchestration};

// ── Shared application state ──────────────────────────────────────────

pub struct AppState {
    pub layout: ProjectLayout,
}

pub type SharedState = Arc<AppState>;

// ── Request / response payload types ──────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RunRequest {
    pub task: String,
    /// Accepted for forward compatibility; not used by the sync
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub brief: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RunResponse {
    pub status: String,
    pub summary: OrchestrationSummary,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

// ── Error handling ────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl From<TeamError> for ApiError {
    fn from(err: TeamError) -> Self {
        if err.is_not_found() {
            ApiError::BadRequest(err.to_string())
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (
            status,
            Json(serde_json::json!({"status": "error", "detail": message})),
        )
            .into_response()
    }
}

// ── Router ────────────────────────────────────────────────────────────

pub fn api_router() -> Router<SharedState> {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/run", post(run_team))
}

// ── Handlers ──────────────────────────────────────────────────────────

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn run_team(
    State(state): State<SharedState>,
    Json(req): Json<RunRequest>,
) -> Result<Json<RunResponse>, ApiError> {
    let brief = match req.brief.as_deref().filter(|b| !b.is_empty()) {
        Some(path) => state.layout.resolve_brief(path),
        None => state.layout.brief.clone(),
    };
    tracing::info!(task = %req.task, brief = %brief.display(), "Run requested");
    tracing::debug!(branch = ?req.branch, "Branch field ignored");

    let layout = state.layout.clone();
    let task = req.task;
    let summary = tokio::task::spawn_blocking(move || {
        run_orchestration(&layout, &task, &brief, &mut std::io::stdout().lock())
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Orchestration task failed: {}", e)))?
    .inspect_err(|e| tracing::warn!(error = %e, "Run failed"))?;

    Ok(Json(RunResponse {
        status: "ok".to_string(),
        summary,
    }))
}
