use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::debug;

use crate::error::RelayError;
use crate::state::AppState;
use crate::translate::TranslatePayload;

/// Build the relay router with its state applied.
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.config.system_config.static_dir.clone();

    Router::new()
        .route("/languages", get(list_languages))
        .route("/translate", post(translate))
        .route("/health", get(health_check))
        // Everything else is a static asset
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn list_languages(State(state): State<AppState>) -> Result<Json<Value>, RelayError> {
    let languages = state
        .upstream
        .languages()
        .await
        .map_err(RelayError::from_languages_error)?;
    Ok(Json(languages))
}

async fn translate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, RelayError> {
    // Bodies that aren't a JSON object fall through to the missing-field check
    let request: TranslatePayload = serde_json::from_slice(&body).unwrap_or_else(|e| {
        debug!("Unparseable translate body: {}", e);
        TranslatePayload::default()
    });

    let request = request.validate().ok_or(RelayError::InvalidRequest)?;

    let result = state
        .upstream
        .translate(&request)
        .await
        .map_err(RelayError::from_translate_error)?;
    Ok(Json(result))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let upstream_healthy = state.upstream.health_check().await;
    Json(json!({
        "status": "ok",
        "upstream": upstream_healthy
    }))
}
