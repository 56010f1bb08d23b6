//! Audio Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("音频目录为空")]
    EmptyCatalog,

    #[error("无效的音频文件名: {0}")]
    InvalidFileName(String),
}
