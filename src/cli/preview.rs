//! # preview 子命令 CLI 定义
//!
//! 预览目录中的重命名结果，同时定义 preview/rename 共用的扫描参数
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs`, `cli/rename.rs` 使用
//! - 参数传递给 `commands/preview.rs`

use crate::models::rule::{DEFAULT_MATCH_TEMPLATE, DEFAULT_REPLACE_TEMPLATE};
use crate::models::RenameRule;

use clap::Args;
use std::path::PathBuf;

/// 目录扫描与规则参数
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Target directory (not searched recursively)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Match template; {cn_num} stands for the Chinese numeral, the rest is a regex
    #[arg(short, long = "match", env = "CNRENAME_MATCH", default_value = DEFAULT_MATCH_TEMPLATE)]
    pub match_template: String,

    /// Replace template; {an_num} is the Arabic number, {cn_num} the original numeral
    #[arg(short, long = "replace", env = "CNRENAME_REPLACE", default_value = DEFAULT_REPLACE_TEMPLATE)]
    pub replace_template: String,

    /// Only consider files whose name matches this glob (e.g. '*.txt')
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Number of parallel jobs for preview (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,
}

impl ScanArgs {
    /// 组装重命名规则
    pub fn rule(&self) -> RenameRule {
        RenameRule::new(self.match_template.clone(), self.replace_template.clone())
    }
}

/// preview 子命令参数
#[derive(Args, Debug)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Export the rename plan to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
