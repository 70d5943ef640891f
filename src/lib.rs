//! # gemini-ping - Gemini API 冒烟测试
//!
//! 向 `gemini-2.0-flash:generateContent` 发送一次固定请求，
//! 打印调用是否成功，并在成功时打印第一个候选结果的文本。
//!
//! ## 主要特性
//!
//! - 🚀 **单次请求**：不重试、不设超时，一次尽力而为的调用。
//! - 🔧 **环境配置**：API 密钥来自环境变量或 `.env` 文件。
//! - 🛡️ **错误处理**：所有失败都只打印，不会让进程异常退出。
//!
//! ## 快速开始
//!
//! ```rust,no_run
//! use gemini_ping::client::GeminiClient;
//! use gemini_ping::config::Config;
//! use gemini_ping::error::Result;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     // 从环境变量加载配置 (需要设置 GEMINI_API_KEY)
//!     let config = Config::from_env()?;
//!     let client = GeminiClient::new(config);
//!
//!     gemini_ping::run(&client, &mut std::io::stdout()).await
//! }
//! ```

// 模块定义
pub mod client;
pub mod config;
pub mod error;
pub mod report;
pub mod types;
pub mod utils;

pub use client::GeminiClient;
pub use config::Config;
pub use error::{GeminiError, Result};
use std::io::Write;

/// 执行一次冒烟测试并把结果写到 `out`
///
/// 请求失败会被打印而不是返回，只有写入 `out` 失败时才返回错误
pub async fn run<W: Write>(client: &GeminiClient, out: &mut W) -> Result<()> {
    let reply = client.ping().await;
    report::report(out, reply)
}

/// 完整的冒烟测试流程：横幅、配置检查、请求、结果
///
/// 配置加载失败时只打印错误描述，不发请求
pub async fn smoke_test<W: Write>(config: Result<Config>, out: &mut W) -> Result<()> {
    report::banner(out)?;
    match config {
        Ok(config) => run(&GeminiClient::new(config), out).await,
        Err(e) => report::report(out, Err(e)),
    }
}
