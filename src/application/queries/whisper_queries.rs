//! Whisper Queries - 低语查询

use crate::domain::audio::AudioFileName;

/// 获取一条低语
#[derive(Debug, Clone)]
pub struct GetWhisperQuery {
    /// 路径中的原始频道编号（可选符号 + 数字，不限位数）
    pub channel: String,
    /// 音频路由的绝对地址前缀，例如 `http://host:5000/audio`
    pub audio_base_url: String,
}

/// 低语查询结果
#[derive(Debug, Clone)]
pub struct WhisperView {
    pub message: String,
    pub audio_file: AudioFileName,
    pub audio_url: String,
    /// 请求的频道不存在，已回退到默认频道
    pub fell_back: bool,
}
