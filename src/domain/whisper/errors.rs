//! Whisper Context - Errors

use thiserror::Error;

use super::ChannelId;

#[derive(Debug, Error)]
pub enum WhisperError {
    #[error("频道消息集合为空: {0}")]
    EmptyChannel(ChannelId),

    #[error("无效的频道编号: {0}")]
    InvalidChannel(String),

    #[error("默认频道不存在: {0}")]
    MissingDefault(ChannelId),
}
