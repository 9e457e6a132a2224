//! Request handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use manglish_model::{SlidesError, SongSlides};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateSlidesRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Fetch the archived lyrics page for `url` and split it into slides.
pub async fn create_slides(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateSlidesRequest>, JsonRejection>,
) -> Result<Json<SongSlides>, ApiError> {
    let Json(request) = payload.map_err(|e| SlidesError::InvalidRequest(e.body_text()))?;

    let url = request
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| SlidesError::MissingField("url".to_string()))?;

    tracing::info!(url = %url, "Creating slides from lyrics page");
    let acquired = manglish_acquire::acquire(&state.fetcher, url, &state.options).await?;
    let song = manglish_parse::parse(&acquired);

    Ok(Json(song))
}

#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
