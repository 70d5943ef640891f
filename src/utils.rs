//! 工具函数模块
use crate::types::{Content, GenerateContentRequest, Part};

/// 日志中保留的 API 密钥前缀长度
const KEY_PREFIX_LEN: usize = 10;

/// 创建文本分片的便捷函数
pub fn part(text: &str) -> Part {
    Part {
        text: text.to_string(),
    }
}

/// 用单条文本提示构建请求体
///
/// # 参数
///
/// * `prompt` - 提示文本
///
/// # 返回
///
/// `{"contents":[{"parts":[{"text": prompt}]}]}` 对应的请求体
pub fn prompt_request(prompt: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![part(prompt)],
        }],
    }
}

/// 遮蔽 API 密钥，只保留前缀
pub(crate) fn mask_key(key: &str) -> String {
    let prefix: String = key.chars().take(KEY_PREFIX_LEN).collect();
    format!("{}...", prefix)
}
