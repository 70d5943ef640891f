//! 错误处理模块

use thiserror::Error;

/// gemini-ping 的统一错误类型
///
/// 非 200 状态码不属于错误，由 `ApiReply` 原样带回
#[derive(Debug, Error)]
pub enum GeminiError {
    /// HTTP 请求相关错误（DNS、连接、读取响应体）
    #[error("HTTP请求失败: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON 序列化/反序列化错误
    #[error("JSON处理错误: {0}")]
    Json(String),

    /// 请求参数无效
    #[error("请求参数无效: {0}")]
    InvalidRequest(String),

    /// 配置相关错误
    #[error("配置错误: {0}")]
    Config(String),

    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// gemini-ping 的 Result 类型别名
pub type Result<T> = std::result::Result<T, GeminiError>;

impl From<serde_json::Error> for GeminiError {
    fn from(e: serde_json::Error) -> Self {
        GeminiError::Json(e.to_string())
    }
}
