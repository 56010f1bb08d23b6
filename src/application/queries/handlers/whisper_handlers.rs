//! Whisper Query Handlers
//!
//! 频道消息和音频文件各自独立随机选择，音频与频道无关

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{choose, RandomSource};
use crate::application::queries::whisper_queries::{GetWhisperQuery, WhisperView};
use crate::domain::audio::AudioCatalog;
use crate::domain::whisper::{ChannelCatalog, ChannelId};

/// GetWhisper Handler - 解析一条低语
pub struct GetWhisperHandler {
    channels: Arc<ChannelCatalog>,
    audio: Arc<AudioCatalog>,
    random: Arc<dyn RandomSource>,
}

impl GetWhisperHandler {
    pub fn new(
        channels: Arc<ChannelCatalog>,
        audio: Arc<AudioCatalog>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            channels,
            audio,
            random,
        }
    }

    pub fn handle(&self, query: GetWhisperQuery) -> Result<WhisperView, ApplicationError> {
        // 超出 i64 的编号不可能命中目录，直接按默认频道处理
        let requested = ChannelId::parse(&query.channel)
            .map_err(|e| ApplicationError::validation(e.to_string()))?;
        let channel = requested.unwrap_or_else(|| self.channels.default_channel());
        let fell_back = requested.map_or(true, |id| !self.channels.contains(id));
        let messages = self.channels.messages_for(channel);

        let message = choose(self.random.as_ref(), messages).ok_or_else(|| {
            ApplicationError::internal(format!("Channel has no messages: {}", channel))
        })?;
        let audio_file = choose(self.random.as_ref(), self.audio.files())
            .ok_or_else(|| ApplicationError::internal("Audio catalog is empty"))?;

        let audio_url = format!(
            "{}/{}",
            query.audio_base_url.trim_end_matches('/'),
            audio_file
        );

        tracing::debug!(
            channel = %query.channel,
            resolved = %channel,
            fell_back,
            audio = %audio_file,
            "Resolved whisper"
        );

        Ok(WhisperView {
            message: message.clone(),
            audio_file: audio_file.clone(),
            audio_url,
            fell_back,
        })
    }
}
