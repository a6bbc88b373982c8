use thiserror::Error;

/// 日志相关错误类型
#[derive(Error, Debug)]
pub enum LogError {
    /// 输出目标写入失败
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
    /// JSON 序列化失败
    #[error("json encode failed: {0}")]
    Json(#[from] serde_json::Error),
    /// 文本渲染失败
    #[error("format failed")]
    Fmt(#[from] std::fmt::Error),
    /// 配置非法
    #[error("invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LogError>;
