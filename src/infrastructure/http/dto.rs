//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::WhisperView;

/// `GET /api/channel/{num}` 响应
#[derive(Debug, Serialize, Deserialize)]
pub struct WhisperResponse {
    pub message: String,
    pub audio_url: String,
}

impl From<WhisperView> for WhisperResponse {
    fn from(view: WhisperView) -> Self {
        Self {
            message: view.message,
            audio_url: view.audio_url,
        }
    }
}
