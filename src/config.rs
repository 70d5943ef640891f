//! 配置模块
use crate::error::{GeminiError, Result};
use crate::utils::mask_key;
use std::env;

// ===============================================================================================
// 配置模块
// ===============================================================================================

/// 默认 API 基础 URL
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// 按优先级依次查找的 API 密钥环境变量
pub const API_KEY_VARS: [&str; 3] = ["GEMINI_API_KEY", "VITE_GEMINI_API_KEY", "API_KEY"];

/// 客户端配置
///
/// 模型和提示是固定的，这里只有密钥和基础 URL
#[derive(Debug, Clone)]
pub struct Config {
    /// API 基础 URL
    pub(crate) api_base: String,
    /// API 密钥
    pub(crate) api_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            api_key: String::new(),
        }
    }
}

/// 生成 Config Builder 方法的宏
///
/// 自动生成 `with_field_name` 形式的 builder 方法
macro_rules! config_builder {
    ($field:ident, $type:ty) => {
        paste::paste! {
            #[doc = "设置 `"]
            #[doc = stringify!($field)]
            #[doc = "`"]
            pub fn [<with_ $field>](mut self, $field: $type) -> Self {
                self.$field = $field;
                self
            }
        }
    };
}

impl Config {
    pub fn api_base(&self) -> &str { &self.api_base }
    pub fn api_key(&self) -> &str { &self.api_key }

    /// 供日志输出的遮蔽密钥
    pub fn masked_api_key(&self) -> String {
        mask_key(&self.api_key)
    }

    /// 从环境变量和 `.env` 文件加载配置
    ///
    /// 环境变量会覆盖 `.env` 文件中的设置
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 用给定的查找函数加载配置
    ///
    /// 依次尝试 [`API_KEY_VARS`]，空值视为未设置
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(*name))
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty())
            .ok_or_else(|| GeminiError::Config("GEMINI_API_KEY not found".into()))?;

        Ok(Config {
            api_key,
            ..Default::default()
        })
    }

    // 使用宏生成 builder 方法
    config_builder!(api_base, String);
    config_builder!(api_key, String);
}
