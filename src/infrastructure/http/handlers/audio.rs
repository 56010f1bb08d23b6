//! Audio Handlers

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use std::sync::Arc;
use tokio_util::io::ReaderStream;

use crate::application::GetAudioQuery;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// `GET /audio/{*path}`
///
/// 越界路径和不存在的文件都返回 404
pub async fn serve_audio(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Result<Response, ApiError> {
    let audio = state
        .get_audio_handler
        .handle(GetAudioQuery { path })
        .await?;

    // 流式返回文件内容
    let body = Body::from_stream(ReaderStream::new(audio.file));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, audio.content_type)
        .header(header::CONTENT_LENGTH, audio.size)
        .body(body)
        .map_err(|e| ApiError::Internal(format!("Failed to build audio response: {}", e)))
}
