//! HTTP Routes
//!
//! API Endpoints:
//! - /api/channel/{num}   GET  随机低语 + 音频 URL
//! - /api/ping            GET  健康检查
//! - /audio/{*path}       GET  音频文件（可含子目录）

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 音频路由前缀，低语响应中的 audio_url 指向这里
pub const AUDIO_ROUTE_PREFIX: &str = "/audio";

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .route(&format!("{AUDIO_ROUTE_PREFIX}/*path"), get(handlers::serve_audio))
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/channel/:num", get(handlers::get_whisper))
}
