//! # cnrename - 中文数字文件名转换工具
//!
//! 将文件名中的中文数字标记（如 "第三章"）替换为阿拉伯数字（"第3章"）。
//!
//! ## 子命令
//! - `parse`   - 直接转换中文数字
//! - `preview` - 预览目录中的重命名结果
//! - `rename`  - 预览、确认后执行重命名
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (扫描、计划、执行)
//!   │     ├── models/    (规则与计划模型)
//!   │     └── numeral/   (中文数字解析)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod numeral;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = commands::run(cli.command) {
        log::debug!("{:?}", e);
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}

/// 初始化日志，`RUST_LOG` 优先
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_target(false)
        .init();
}
