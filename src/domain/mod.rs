//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Whisper Context: 频道与低语消息
//! - Audio Context: 音频文件目录

pub mod audio;
pub mod whisper;
