//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::sync::Arc;

use axum::middleware;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::error_logging_middleware;
use super::routes::create_routes;
use super::state::AppState;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 构建完整的 Router（路由 + 中间件 + 状态）
pub fn build_router(state: Arc<AppState>) -> Router {
    // CORS 配置 - 允许任意来源、方法、请求头
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_routes()
        .layer(middleware::from_fn(error_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.state.clone());
        let addr = self.config.addr();

        let listener = TcpListener::bind(&addr).await?;
        info!("Listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tempfile::{tempdir, TempDir};
    use tower::util::ServiceExt;

    use crate::application::RandomSource;
    use crate::domain::audio::AudioCatalog;
    use crate::domain::whisper::{ChannelCatalog, ChannelId};
    use crate::infrastructure::adapters::{FileAudioStorage, SequenceRandom, ThreadRandom};
    use crate::infrastructure::http::dto::WhisperResponse;

    const MP3_BYTES: &[u8] = b"ID3\x04\x00\x00whisper";

    async fn test_app(
        random: Arc<dyn RandomSource>,
        base_url: Option<&str>,
    ) -> (TempDir, Router) {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().join("audio");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("channel1.mp3"), MP3_BYTES).unwrap();
        std::fs::write(temp_dir.path().join("secrets.txt"), b"outside").unwrap();

        let storage = FileAudioStorage::new(&root).await.unwrap();
        let state = AppState::new(
            Arc::new(ChannelCatalog::builtin()),
            Arc::new(AudioCatalog::builtin()),
            Arc::new(storage),
            random,
            base_url.map(str::to_string),
            "http://127.0.0.1:5000",
        );

        (temp_dir, build_router(Arc::new(state)))
    }

    async fn get(
        app: Router,
        uri: &str,
        host: Option<&str>,
    ) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let mut request = Request::builder().uri(uri);
        if let Some(host) = host {
            request = request.header(header::HOST, host);
        }
        let response = app
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, body.to_vec())
    }

    fn audio_file_of(url: &str) -> &str {
        url.rsplit('/').next().unwrap()
    }

    #[tokio::test]
    async fn test_channel_two_returns_channel_two_message() {
        let (_dir, app) = test_app(Arc::new(ThreadRandom::new()), None).await;
        let (status, headers, body) = get(app, "/api/channel/2", Some("localhost:5000")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");

        let whisper: WhisperResponse = serde_json::from_slice(&body).unwrap();
        let catalog = ChannelCatalog::builtin();
        assert!(catalog.messages_for(ChannelId::new(2)).contains(&whisper.message));
        assert!(whisper.audio_url.starts_with("http://localhost:5000/audio/"));
        assert!(AudioCatalog::builtin().contains(audio_file_of(&whisper.audio_url)));
    }

    #[tokio::test]
    async fn test_body_has_exactly_message_and_audio_url() {
        let (_dir, app) = test_app(Arc::new(SequenceRandom::new(vec![1, 2])), None).await;
        let (_, _, body) = get(app, "/api/channel/2", Some("example.org")).await;

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "message": "01101000... hello?",
                "audio_url": "http://example.org/audio/channel3.mp3",
            })
        );
    }

    #[tokio::test]
    async fn test_unknown_channel_falls_back_to_channel_one() {
        let (_dir, app) = test_app(Arc::new(ThreadRandom::new()), None).await;
        let (status, _, body) = get(app, "/api/channel/99", Some("localhost")).await;

        assert_eq!(status, StatusCode::OK);
        let whisper: WhisperResponse = serde_json::from_slice(&body).unwrap();
        let catalog = ChannelCatalog::builtin();
        assert!(catalog.messages_for(ChannelId::new(1)).contains(&whisper.message));
    }

    #[tokio::test]
    async fn test_negative_channel_is_accepted() {
        let (_dir, app) = test_app(Arc::new(ThreadRandom::new()), None).await;
        let (status, _, _) = get(app, "/api/channel/-3", Some("localhost")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_twenty_digit_channel_falls_back_to_channel_one() {
        let (_dir, app) = test_app(Arc::new(ThreadRandom::new()), None).await;
        let uri = "/api/channel/99999999999999999999";
        let (status, _, body) = get(app, uri, Some("localhost")).await;

        assert_eq!(status, StatusCode::OK);
        let whisper: WhisperResponse = serde_json::from_slice(&body).unwrap();
        let catalog = ChannelCatalog::builtin();
        assert!(catalog.messages_for(ChannelId::new(1)).contains(&whisper.message));
    }

    #[tokio::test]
    async fn test_non_integer_channel_is_bad_request() {
        let (_dir, app) = test_app(Arc::new(ThreadRandom::new()), None).await;

        for uri in ["/api/channel/abc", "/api/channel/1.5", "/api/channel/-"] {
            let (status, _, body) = get(app.clone(), uri, Some("localhost")).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");

            let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(json["errno"], 400, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_configured_base_url_wins_over_host() {
        let random = Arc::new(SequenceRandom::new(vec![0]));
        let (_dir, app) = test_app(random, Some("https://radio.example.com/")).await;
        let (_, _, body) = get(app, "/api/channel/1", Some("internal:5000")).await;

        let whisper: WhisperResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(whisper.audio_url, "https://radio.example.com/audio/channel1.mp3");
    }

    #[tokio::test]
    async fn test_missing_host_uses_listen_address() {
        let (_dir, app) = test_app(Arc::new(SequenceRandom::new(vec![0])), None).await;
        let (_, _, body) = get(app, "/api/channel/3", None).await;

        let whisper: WhisperResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(whisper.audio_url, "http://127.0.0.1:5000/audio/channel1.mp3");
    }

    #[tokio::test]
    async fn test_forwarded_proto_sets_scheme() {
        let (_dir, app) = test_app(Arc::new(SequenceRandom::new(vec![0])), None).await;
        let request = Request::builder()
            .uri("/api/channel/1")
            .header(header::HOST, "radio.example.com")
            .header("x-forwarded-proto", "https")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        let whisper: WhisperResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(whisper.audio_url, "https://radio.example.com/audio/channel1.mp3");
    }

    #[tokio::test]
    async fn test_whisper_url_serves_audio() {
        let (_dir, app) = test_app(Arc::new(SequenceRandom::new(vec![0])), None).await;
        let (_, _, body) = get(app.clone(), "/api/channel/1", Some("localhost")).await;
        let whisper: WhisperResponse = serde_json::from_slice(&body).unwrap();

        let path = whisper.audio_url.trim_start_matches("http://localhost");
        let (status, headers, bytes) = get(app, path, Some("localhost")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "audio/mpeg");
        assert_eq!(bytes, MP3_BYTES);
    }

    #[tokio::test]
    async fn test_missing_audio_is_404() {
        let (_dir, app) = test_app(Arc::new(ThreadRandom::new()), None).await;
        let too_long = format!("/audio/{}.mp3", "a".repeat(300));

        for uri in [
            "/audio/nonexistent.mp3",
            "/audio/channel1.mp3/",
            "/audio/channel1.mp3/x.mp3",
            "/audio/a%00b.mp3",
            too_long.as_str(),
        ] {
            let (status, _, _) = get(app.clone(), uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_traversal_is_404_and_leaks_nothing() {
        let (_dir, app) = test_app(Arc::new(ThreadRandom::new()), None).await;

        for uri in [
            "/audio/../secrets.txt",
            "/audio/%2e%2e/secrets.txt",
            "/audio/..%2Fsecrets.txt",
            "/audio//etc/passwd",
        ] {
            let (status, _, body) = get(app.clone(), uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert!(!String::from_utf8_lossy(&body).contains("outside"), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let (_dir, app) = test_app(Arc::new(ThreadRandom::new()), None).await;
        let request = Request::builder()
            .uri("/api/channel/1")
            .header(header::ORIGIN, "http://somewhere.else")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_ping() {
        let (_dir, app) = test_app(Arc::new(ThreadRandom::new()), None).await;
        let (status, _, body) = get(app, "/api/ping", None).await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["channels"], 3);
        assert_eq!(json["audio_files"], 4);
    }
}
