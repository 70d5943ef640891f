//! Gemini 客户端核心模块
use crate::{
    config::Config,
    error::{GeminiError, Result},
    types::ApiReply,
    utils::prompt_request,
};
use log::{debug, info, warn};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE},
    Client,
};
use std::sync::Arc;

// ================================================================================================
// 核心客户端模块
// ================================================================================================

/// 固定使用的模型
pub const MODEL: &str = "gemini-2.0-flash";

/// 冒烟测试使用的固定提示
pub const PING_PROMPT: &str = "Say: AI_MEE is ready!";

/// 携带 API 密钥的请求头
const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-goog-api-key");

/// Gemini 客户端
///
/// 每次调用只发一次请求：没有超时、没有重试
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: Arc<Config>,
}

impl GeminiClient {
    /// 创建一个新的 `GeminiClient` 实例
    pub fn new(config: Config) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config),
        }
    }

    /// generateContent 的完整 URL
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.config.api_base, MODEL)
    }

    /// 构建 API 请求所需的 HTTP 标头
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(&self.config.api_key)
                .map_err(|e| GeminiError::InvalidRequest(format!("Invalid API key: {}", e)))?,
        );
        Ok(headers)
    }

    /// 发送一次 generateContent 请求
    ///
    /// 任何 HTTP 状态码都原样返回；只有传输层失败才是错误
    pub async fn generate_content(&self, prompt: &str) -> Result<ApiReply> {
        let endpoint = self.endpoint();
        let headers = self.build_headers()?;
        let payload = prompt_request(prompt);
        debug!("POST {} payload: {:?}", endpoint, payload);

        let response = self
            .client
            .post(&endpoint)
            .headers(headers)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            debug!("Response status: {}", status);
        } else {
            warn!("Request failed with status: {}", status);
        }
        Ok(ApiReply { status, body })
    }

    /// 用固定提示做一次冒烟测试
    pub async fn ping(&self) -> Result<ApiReply> {
        info!("API key: {}", self.config.masked_api_key());
        info!("Endpoint: {}", self.endpoint());
        self.generate_content(PING_PROMPT).await
    }
}
