//! Audio Context - 音频目录限界上下文
//!
//! 职责:
//! - 可供随机选择的音频文件名列表
//! - 文件名合法性校验

mod catalog;
mod errors;
mod value_objects;

pub use catalog::AudioCatalog;
pub use errors::AudioError;
pub use value_objects::AudioFileName;
