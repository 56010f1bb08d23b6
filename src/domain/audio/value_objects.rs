//! Audio Context - Value Objects

use std::path::{Component, Path};

use serde::Serialize;

use super::AudioError;

/// 音频文件名
///
/// 不变量:
/// - 非空
/// - 只包含单个普通路径段（无分隔符、无 `.`/`..`）
/// - 只由 URL 非保留字符组成（`A-Z a-z 0-9 - . _ ~`），可直接拼入 URL
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AudioFileName(pub(super) String);

impl AudioFileName {
    pub fn new(name: impl Into<String>) -> Result<Self, AudioError> {
        let name = name.into();
        let mut components = Path::new(&name).components();
        let single_segment = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );

        let url_safe = name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~'));

        if name.is_empty() || !single_segment || !url_safe {
            return Err(AudioError::InvalidFileName(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AudioFileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
