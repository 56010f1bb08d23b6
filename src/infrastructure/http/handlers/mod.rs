//! HTTP Handlers

mod audio;
mod ping;
mod whisper;

pub use audio::*;
pub use ping::*;
pub use whisper::*;
