//! Audio Storage Port - 出站端口
//!
//! 定义按相对路径读取音频文件的抽象接口，实现必须保证路径不逃逸存储根目录

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// 音频存储错误
#[derive(Debug, Error)]
pub enum AudioStorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Path escapes audio directory: {0}")]
    OutsideRoot(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// 已打开的音频文件
#[derive(Debug)]
pub struct AudioFile {
    /// 规范化后的绝对路径
    pub path: PathBuf,
    pub file: tokio::fs::File,
    pub size: u64,
    pub content_type: String,
}

/// Audio Storage Port - 出站端口
#[async_trait]
pub trait AudioStoragePort: Send + Sync {
    /// 存储根目录（已规范化）
    fn root(&self) -> &std::path::Path;

    /// 打开根目录下的文件
    ///
    /// `relative_path` 可以包含子目录；任何逃逸根目录的路径返回 `OutsideRoot`
    async fn open(&self, relative_path: &str) -> Result<AudioFile, AudioStorageError>;
}
