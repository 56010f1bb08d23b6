//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 公开访问的 Base URL
    /// 如果未设置，则使用请求的 Host
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_url: None,
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 请求没有 Host 时使用的 Base URL
    pub fn listen_base_url(&self) -> String {
        let host = if self.host == "0.0.0.0" {
            "localhost"
        } else {
            &self.host
        };
        format!("http://{}:{}", host, self.port)
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 音频目录，相对路径基于进程工作目录
    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,
}

fn default_audio_dir() -> PathBuf {
    PathBuf::from("audio")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            audio_dir: default_audio_dir(),
        }
    }
}

impl StorageConfig {
    /// 基于给定工作目录解析音频目录
    pub fn audio_dir_in(&self, cwd: &Path) -> PathBuf {
        if self.audio_dir.is_absolute() {
            self.audio_dir.clone()
        } else {
            cwd.join(&self.audio_dir)
        }
    }

    /// 基于当前工作目录解析音频目录，启动时调用一次
    pub fn resolved_audio_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.audio_dir_in(&std::env::current_dir()?))
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
