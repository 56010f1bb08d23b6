//! 应用层错误定义
//!
//! 统一的查询错误类型

use thiserror::Error;

use crate::application::ports::AudioStorageError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<AudioStorageError> for ApplicationError {
    fn from(err: AudioStorageError) -> Self {
        match err {
            AudioStorageError::FileNotFound(path) => Self::not_found("Audio", path),
            // 越界路径对外表现为不存在
            AudioStorageError::OutsideRoot(path) => {
                tracing::warn!(path = %path, "Rejected audio path outside root");
                Self::not_found("Audio", path)
            }
            AudioStorageError::IoError(msg) => Self::StorageError(msg),
        }
    }
}
