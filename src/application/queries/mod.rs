//! 应用层 - 查询（读操作）
//!
//! 服务只有读操作：取一条低语、取一个音频文件

mod audio_queries;
mod whisper_queries;

pub mod handlers;

pub use audio_queries::*;
pub use whisper_queries::*;
