//! Audio Queries - 音频查询

/// 获取音频文件
#[derive(Debug, Clone)]
pub struct GetAudioQuery {
    /// 相对于音频目录的路径，可包含子目录
    pub path: String,
}
