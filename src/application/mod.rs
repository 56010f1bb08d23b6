//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 出站端口定义（RandomSource、AudioStorage）
//! - queries: 查询及处理器
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod queries;

pub use error::ApplicationError;

pub use ports::{choose, AudioFile, AudioStorageError, AudioStoragePort, RandomSource};

pub use queries::{
    GetAudioQuery, GetWhisperQuery, WhisperView,
    handlers::{GetAudioHandler, GetWhisperHandler},
};
