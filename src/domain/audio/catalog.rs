//! Audio Catalog - 固定的音频文件名列表
//!
//! 列表写死在代码中，与音频目录的实际内容无关

use super::{AudioError, AudioFileName};

const BUILTIN_AUDIO_FILES: &[&str] = &[
    "channel1.mp3",
    "channel2.mp3",
    "channel3.mp3",
    "channel4.mp3",
];

/// 音频目录（随机选择的取值域）
#[derive(Debug, Clone)]
pub struct AudioCatalog {
    files: Vec<AudioFileName>,
}

impl AudioCatalog {
    pub fn new<I, S>(names: I) -> Result<Self, AudioError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let files = names
            .into_iter()
            .map(AudioFileName::new)
            .collect::<Result<Vec<_>, _>>()?;

        if files.is_empty() {
            return Err(AudioError::EmptyCatalog);
        }
        Ok(Self { files })
    }

    pub fn builtin() -> Self {
        Self {
            files: BUILTIN_AUDIO_FILES
                .iter()
                .map(|name| AudioFileName(name.to_string()))
                .collect(),
        }
    }

    pub fn files(&self) -> &[AudioFileName] {
        &self.files
    }

    pub fn get(&self, index: usize) -> Option<&AudioFileName> {
        self.files.get(index)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.iter().any(|f| f.as_str() == name)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Default for AudioCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
