//! Whisper Context - Value Objects

use serde::{Deserialize, Serialize};

use super::WhisperError;

/// 频道编号
///
/// 接受任意整数，不做范围校验
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChannelId(i64);

impl ChannelId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// 解析路径中的频道编号
    ///
    /// 只接受可选符号加十进制数字。超出 `i64` 的整数返回 `Ok(None)`，
    /// 它不可能是目录中的频道
    pub fn parse(raw: &str) -> Result<Option<Self>, WhisperError> {
        let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(WhisperError::InvalidChannel(raw.to_string()));
        }
        Ok(raw.parse::<i64>().ok().map(Self))
    }
}

impl From<i64> for ChannelId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
