//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `numeral/`, `models/`, `batch/`, `utils/`
//! - 子模块: parse, preview, rename

pub mod parse;
pub mod preview;
pub mod rename;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Parse(args) => parse::execute(args),
        Commands::Preview(args) => preview::execute(args),
        Commands::Rename(args) => rename::execute(args),
    }
}
