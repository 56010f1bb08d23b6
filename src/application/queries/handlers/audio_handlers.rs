//! Audio Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{AudioFile, AudioStoragePort};
use crate::application::queries::audio_queries::GetAudioQuery;

/// GetAudio Handler - 从音频目录读取文件
pub struct GetAudioHandler {
    storage: Arc<dyn AudioStoragePort>,
}

impl GetAudioHandler {
    pub fn new(storage: Arc<dyn AudioStoragePort>) -> Self {
        Self { storage }
    }

    pub async fn handle(&self, query: GetAudioQuery) -> Result<AudioFile, ApplicationError> {
        let audio = self.storage.open(&query.path).await?;

        tracing::debug!(
            path = %audio.path.display(),
            size = audio.size,
            content_type = %audio.content_type,
            "Serving audio"
        );

        Ok(audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    use crate::infrastructure::adapters::FileAudioStorage;

    #[tokio::test]
    async fn test_missing_and_escaping_paths_are_not_found() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().join("audio");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(temp_dir.path().join("secrets.txt"), b"top secret").unwrap();

        let storage = FileAudioStorage::new(&root).await.unwrap();
        let handler = GetAudioHandler::new(Arc::new(storage));

        for path in ["nonexistent.mp3", "../secrets.txt"] {
            let err = handler
                .handle(GetAudioQuery {
                    path: path.to_string(),
                })
                .await
                .unwrap_err();
            assert!(matches!(err, ApplicationError::NotFound { .. }), "{path}");
        }
    }

    #[tokio::test]
    async fn test_existing_file_is_opened() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(temp_dir.path().join("channel2.mp3"), b"ID3 static").unwrap();

        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();
        let handler = GetAudioHandler::new(Arc::new(storage));

        let audio = handler
            .handle(GetAudioQuery {
                path: "channel2.mp3".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(audio.size, 10);
        assert_eq!(audio.content_type, "audio/mpeg");
    }
}
