//! Whisper Radio - 随机低语频道服务
//!
//! 启动顺序：配置 → 日志 → 目录与存储 → HTTP 服务器

use std::sync::Arc;

use whisper_radio::config::{load_config, print_config};
use whisper_radio::domain::audio::AudioCatalog;
use whisper_radio::domain::whisper::ChannelCatalog;
use whisper_radio::infrastructure::adapters::{FileAudioStorage, ThreadRandom};
use whisper_radio::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},whisper_radio={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Whisper Radio v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 目录在开始接收请求前构建，之后只读
    let channels = Arc::new(ChannelCatalog::builtin());
    let audio_catalog = Arc::new(AudioCatalog::builtin());

    // 音频目录相对于当前工作目录，只解析一次
    let audio_dir = config.storage.resolved_audio_dir()?;
    let storage = FileAudioStorage::new(&audio_dir)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open audio directory {:?}: {}", audio_dir, e))?;
    tracing::info!("Serving audio from {:?}", audio_dir);

    let state = AppState::new(
        channels,
        audio_catalog,
        Arc::new(storage),
        Arc::new(ThreadRandom::new()),
        config.server.base_url.clone(),
        config.server.listen_base_url(),
    );

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
