//! gemini-ping 命令行入口
//!
//! 设置 `RUST_LOG=debug` 可查看请求细节

use gemini_ping::{smoke_test, Config};
use log::error;
use std::io;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let mut stdout = io::stdout().lock();
    if let Err(e) = smoke_test(Config::from_env(), &mut stdout).await {
        error!("Failed to write report: {}", e);
    }
}
