//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_storage;
mod random_source;

pub use audio_storage::{AudioFile, AudioStorageError, AudioStoragePort};
pub use random_source::{choose, RandomSource};
