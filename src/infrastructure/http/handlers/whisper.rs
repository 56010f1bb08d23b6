//! Whisper Handlers

use axum::{
    extract::{Host, Path, State},
    Json,
};
use http::{HeaderMap, HeaderName};
use std::sync::Arc;

use crate::application::GetWhisperQuery;
use crate::infrastructure::http::dto::WhisperResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::routes::AUDIO_ROUTE_PREFIX;
use crate::infrastructure::http::state::AppState;

const X_FORWARDED_PROTO: HeaderName = HeaderName::from_static("x-forwarded-proto");

/// `GET /api/channel/{num}`
///
/// num 为任意位数的整数；非整数返回 400
pub async fn get_whisper(
    State(state): State<Arc<AppState>>,
    Path(num): Path<String>,
    host: Option<Host>,
    headers: HeaderMap,
) -> Result<Json<WhisperResponse>, ApiError> {
    let scheme = headers
        .get(X_FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim);
    let base_url = state.base_url(host.as_ref().map(|Host(h)| h.as_str()), scheme);

    let view = state.get_whisper_handler.handle(GetWhisperQuery {
        channel: num,
        audio_base_url: format!("{base_url}{AUDIO_ROUTE_PREFIX}"),
    })?;

    Ok(Json(view.into()))
}
