//! HTTP surface: one onboarding route plus a liveness probe.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::acquire::RepoSource;
use crate::config::Config;
use crate::contract::Summarizer;
use crate::error::OnboardError;
use crate::onboard::onboard;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub summarizer: Arc<dyn Summarizer>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/onboard", post(onboard_repo))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState) -> anyhow::Result<()> {
    let addr = state.config.bind_addr.clone();
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Onboarding service listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Debug, Deserialize)]
struct OnboardRequest {
    #[serde(default)]
    url: String,
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `POST /onboard` — the whole mapping is computed before the response is
/// sent; there is no partial-result streaming.
async fn onboard_repo(
    State(state): State<AppState>,
    Json(request): Json<OnboardRequest>,
) -> Response {
    let source = match RepoSource::parse(&request.url) {
        Ok(source) => source,
        Err(e) => return error_response(&e),
    };

    info!(source = ?source, "Onboarding request received");
    match onboard(&source, &state.config, state.summarizer.as_ref()).await {
        Ok(report) => (StatusCode::OK, Json(Value::Object(report.to_flat_map()))).into_response(),
        Err(e) => {
            error!(error = %e, "Onboarding request failed");
            error_response(&e)
        }
    }
}

fn error_response(error: &OnboardError) -> Response {
    let status = match error {
        OnboardError::MissingSource => StatusCode::BAD_REQUEST,
        OnboardError::PathNotFound(_) => StatusCode::NOT_FOUND,
        OnboardError::CloneFailed(_) | OnboardError::Io(_) | OnboardError::Config(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(json!({ "detail": error.to_string() }))).into_response()
}
