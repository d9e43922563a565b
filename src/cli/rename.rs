//! # rename 子命令 CLI 定义
//!
//! 预览、确认后执行重命名
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rename.rs`

use super::preview::ScanArgs;
use clap::Args;

/// rename 子命令参数
#[derive(Args, Debug)]
pub struct RenameArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Rename without asking for confirmation
    #[arg(short, long, default_value_t = false)]
    pub yes: bool,
}
