//! Query Handlers 实现

mod audio_handlers;
mod whisper_handlers;

pub use audio_handlers::*;
pub use whisper_handlers::*;
