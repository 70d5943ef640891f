//! API 数据结构模块

use crate::error::Result;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

// ================================================================================================
// API 请求结构
// ================================================================================================

/// generateContent 请求体
#[derive(Debug, Serialize, Clone, Default)]
pub struct GenerateContentRequest {
    /// 对话内容
    pub contents: Vec<Content>,
}

/// 一段内容
#[derive(Debug, Serialize, Clone, Default)]
pub struct Content {
    /// 内容分片
    pub parts: Vec<Part>,
}

/// 文本分片
#[derive(Debug, Serialize, Clone, Default)]
pub struct Part {
    /// 文本
    pub text: String,
}

// ================================================================================================
// API 响应结构
// ================================================================================================

/// 一次调用的原始结果：状态码和响应体文本
///
/// 任何 HTTP 状态码都会落到这里，只有传输层失败才会返回错误
#[derive(Debug, Clone)]
pub struct ApiReply {
    /// HTTP 状态码
    pub status: StatusCode,
    /// 原始响应体
    pub body: String,
}

impl ApiReply {
    /// 只有 200 才算成功
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK
    }
}

/// candidates[0].content.parts[0].text 的 JSON Pointer
const FIRST_TEXT_POINTER: &str = "/candidates/0/content/parts/0/text";

/// generateContent 响应体
///
/// 只关心第一个候选结果的文本，其余字段不做类型约束
#[derive(Debug, Default)]
pub struct GenerateContentResponse {
    raw: Value,
}

impl GenerateContentResponse {
    /// 解析响应体
    ///
    /// 不是合法 JSON 时返回错误；结构不符不算错误
    pub fn from_body(body: &str) -> Result<Self> {
        Ok(Self {
            raw: serde_json::from_str(body)?,
        })
    }

    /// 响应中是否带有 `candidates` 字段
    pub fn has_candidates(&self) -> bool {
        self.raw.get("candidates").is_some()
    }

    /// 取 `candidates[0].content.parts[0].text`
    pub fn first_text(&self) -> Option<&str> {
        self.raw.pointer(FIRST_TEXT_POINTER).and_then(Value::as_str)
    }
}
