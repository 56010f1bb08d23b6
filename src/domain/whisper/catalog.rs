//! Channel Catalog - 频道消息目录
//!
//! 启动时构建，之后只读

use std::collections::HashMap;

use super::{ChannelId, WhisperError};

/// 默认频道（未知频道回退目标）
pub const DEFAULT_CHANNEL: ChannelId = ChannelId::new(1);

const BUILTIN_CHANNELS: &[(i64, &[&str])] = &[
    (
        1,
        &[
            "The network hums softly, dreaming of endless loops.",
            "I speak in packets, whispering across the void.",
            "The internet never sleeps — only changes shape.",
        ],
    ),
    (
        2,
        &[
            "Signal lost. Memory fragments remain.",
            "01101000... hello?",
            "The transmission crackles — ghosts in the machine.",
        ],
    ),
    (
        3,
        &[
            "You are not alone on this quiet web.",
            "Even the code watches the stars sometimes.",
            "Somewhere, a server sighs and dreams of you.",
        ],
    ),
];

/// 频道目录
///
/// 不变量:
/// - 每个频道的消息集合非空
/// - 默认频道必须存在
#[derive(Debug, Clone)]
pub struct ChannelCatalog {
    channels: HashMap<ChannelId, Vec<String>>,
    default_channel: ChannelId,
}

impl ChannelCatalog {
    pub fn new(
        channels: HashMap<ChannelId, Vec<String>>,
        default_channel: ChannelId,
    ) -> Result<Self, WhisperError> {
        if let Some((id, _)) = channels.iter().find(|(_, messages)| messages.is_empty()) {
            return Err(WhisperError::EmptyChannel(*id));
        }
        if !channels.contains_key(&default_channel) {
            return Err(WhisperError::MissingDefault(default_channel));
        }

        Ok(Self {
            channels,
            default_channel,
        })
    }

    /// 内置的三个频道，默认频道为 1
    pub fn builtin() -> Self {
        let channels = BUILTIN_CHANNELS
            .iter()
            .map(|(id, messages)| {
                (
                    ChannelId::new(*id),
                    messages.iter().map(|m| m.to_string()).collect(),
                )
            })
            .collect();

        Self {
            channels,
            default_channel: DEFAULT_CHANNEL,
        }
    }

    /// 查找频道消息，未知频道回退到默认频道
    pub fn messages_for(&self, id: ChannelId) -> &[String] {
        self.channels
            .get(&id)
            .or_else(|| self.channels.get(&self.default_channel))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, id: ChannelId) -> bool {
        self.channels.contains_key(&id)
    }

    pub fn default_channel(&self) -> ChannelId {
        self.default_channel
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl Default for ChannelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
