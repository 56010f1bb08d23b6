//! File Storage - 文件系统音频存储实现
//!
//! 实现 AudioStoragePort trait，所有读取都限定在根目录内

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

use crate::application::ports::{AudioFile, AudioStorageError, AudioStoragePort};

/// 文件系统音频存储
pub struct FileAudioStorage {
    /// 存储根目录（规范化后的绝对路径）
    root: PathBuf,
}

impl FileAudioStorage {
    /// 创建新的文件存储
    ///
    /// 目录不存在时创建，随后规范化根路径
    pub async fn new(root: impl AsRef<Path>) -> Result<Self, AudioStorageError> {
        let root = root.as_ref();

        fs::create_dir_all(root)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        let root = fs::canonicalize(root)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        Ok(Self { root })
    }

    /// 把请求路径解析为根目录下的真实文件
    ///
    /// 1. 只允许普通路径段（拒绝绝对路径、`.`、`..`、NUL）
    /// 2. 规范化失败一律视为不存在（ENOTDIR、名字过长等）
    /// 3. 规范化后仍须位于根目录内（处理符号链接逃逸）
    async fn resolve(&self, relative_path: &str) -> Result<PathBuf, AudioStorageError> {
        let relative = Path::new(relative_path);
        let plain = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));

        if relative_path.is_empty() || !plain || relative_path.contains(['\\', '\0']) {
            return Err(AudioStorageError::OutsideRoot(relative_path.to_string()));
        }

        let canonical = fs::canonicalize(self.root.join(relative))
            .await
            .map_err(|e| {
                if e.kind() != ErrorKind::NotFound {
                    tracing::debug!(path = %relative_path, error = %e, "Unresolvable audio path");
                }
                AudioStorageError::FileNotFound(relative_path.to_string())
            })?;

        if !canonical.starts_with(&self.root) {
            return Err(AudioStorageError::OutsideRoot(relative_path.to_string()));
        }

        Ok(canonical)
    }
}

#[async_trait]
impl AudioStoragePort for FileAudioStorage {
    fn root(&self) -> &Path {
        &self.root
    }

    async fn open(&self, relative_path: &str) -> Result<AudioFile, AudioStorageError> {
        let path = self.resolve(relative_path).await?;

        let file = fs::File::open(&path)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;
        let metadata = file
            .metadata()
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        if !metadata.is_file() {
            return Err(AudioStorageError::FileNotFound(relative_path.to_string()));
        }

        let content_type = mime_guess::from_path(&path)
            .first_or_octet_stream()
            .to_string();

        Ok(AudioFile {
            path,
            file,
            size: metadata.len(),
            content_type,
        })
    }
}
