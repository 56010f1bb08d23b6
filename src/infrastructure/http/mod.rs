//! HTTP Layer - 低语 API + 音频文件服务

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::{create_routes, AUDIO_ROUTE_PREFIX};
pub use server::{build_router, HttpServer, ServerConfig};
pub use state::AppState;
