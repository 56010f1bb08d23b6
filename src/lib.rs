//! Whisper Radio - 随机低语频道服务
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Whisper Context: 频道消息目录
//! - Audio Context: 音频文件目录
//!
//! 应用层 (application/):
//! - Ports: RandomSource, AudioStorage
//! - Queries: GetWhisper, GetAudio
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 低语 API + 音频文件服务
//! - Adapters: 随机源、文件系统存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
