//! Whisper Context - 频道低语限界上下文
//!
//! 职责:
//! - 频道编号到候选消息集合的映射
//! - 未知频道回退到默认频道

mod catalog;
mod errors;
mod value_objects;

pub use catalog::{ChannelCatalog, DEFAULT_CHANNEL};
pub use errors::WhisperError;
pub use value_objects::ChannelId;
