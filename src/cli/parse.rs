//! # parse 子命令 CLI 定义
//!
//! 直接转换命令行给出的中文数字
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/parse.rs`

use clap::Args;

/// parse 子命令参数
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Chinese numerals to convert (e.g. 一百二十三)
    #[arg(required = true)]
    pub numerals: Vec<String>,
}
