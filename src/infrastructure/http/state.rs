//! Application State
//!
//! 启动时构建一次，所有请求只读共享

use std::sync::Arc;

use crate::application::{AudioStoragePort, GetAudioHandler, GetWhisperHandler, RandomSource};
use crate::domain::audio::AudioCatalog;
use crate::domain::whisper::ChannelCatalog;

/// 应用状态
pub struct AppState {
    pub channels: Arc<ChannelCatalog>,
    pub audio_catalog: Arc<AudioCatalog>,
    pub storage: Arc<dyn AudioStoragePort>,

    /// 配置的公开 Base URL，优先于请求的 Host
    pub public_base_url: Option<String>,
    /// 请求没有 Host 时使用的地址（监听地址）
    pub fallback_base_url: String,

    pub get_whisper_handler: GetWhisperHandler,
    pub get_audio_handler: GetAudioHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        channels: Arc<ChannelCatalog>,
        audio_catalog: Arc<AudioCatalog>,
        storage: Arc<dyn AudioStoragePort>,
        random: Arc<dyn RandomSource>,
        public_base_url: Option<String>,
        fallback_base_url: impl Into<String>,
    ) -> Self {
        Self {
            channels: channels.clone(),
            audio_catalog: audio_catalog.clone(),
            storage: storage.clone(),
            public_base_url,
            fallback_base_url: fallback_base_url.into(),
            get_whisper_handler: GetWhisperHandler::new(channels, audio_catalog, random),
            get_audio_handler: GetAudioHandler::new(storage),
        }
    }

    /// 计算对外可见的 Base URL
    ///
    /// 优先级：配置的 base_url > 请求 Host > 监听地址
    pub fn base_url(&self, host: Option<&str>, scheme: Option<&str>) -> String {
        if let Some(url) = &self.public_base_url {
            return url.trim_end_matches('/').to_string();
        }
        match host {
            Some(host) if !host.is_empty() => {
                format!("{}://{}", scheme.unwrap_or("http"), host)
            }
            _ => self.fallback_base_url.trim_end_matches('/').to_string(),
        }
    }
}
