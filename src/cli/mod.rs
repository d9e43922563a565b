//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `parse`: 转换命令行给出的中文数字
//! - `preview`: 预览目录中的重命名结果（不修改文件）
//! - `rename`: 预览、确认后执行重命名
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: parse, preview, rename

pub mod parse;
pub mod preview;
pub mod rename;

use clap::{Parser, Subcommand};

/// cnrename - 中文数字文件名转换工具
#[derive(Parser)]
#[command(name = "cnrename")]
#[command(version)]
#[command(
    about = "Rename files by converting Chinese numerals (第三章 -> 第3章) to Arabic numerals",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show debug log output (RUST_LOG overrides)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert Chinese numerals given on the command line
    Parse(parse::ParseArgs),

    /// Preview renames in a directory without touching any file
    Preview(preview::PreviewArgs),

    /// Preview, confirm and rename files in a directory
    Rename(rename::RenameArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rule::{DEFAULT_MATCH_TEMPLATE, DEFAULT_REPLACE_TEMPLATE};
    use std::path::PathBuf;

    #[test]
    fn test_rename_defaults() {
        let cli = Cli::try_parse_from(["cnrename", "rename"]).unwrap();
        match cli.command {
            Commands::Rename(args) => {
                assert_eq!(args.scan.path, PathBuf::from("."));
                assert_eq!(args.scan.match_template, DEFAULT_MATCH_TEMPLATE);
                assert_eq!(args.scan.replace_template, DEFAULT_REPLACE_TEMPLATE);
                assert!(!args.yes);
            }
            _ => panic!("expected rename"),
        }
    }

    #[test]
    fn test_preview_options() {
        let cli = Cli::try_parse_from([
            "cnrename",
            "-v",
            "preview",
            "books",
            "--match",
            "第{cn_num}章",
            "--replace",
            "Chapter {an_num}",
            "--pattern",
            "*.txt",
            "--csv",
            "plan.csv",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Preview(args) => {
                assert_eq!(args.scan.path, PathBuf::from("books"));
                assert_eq!(args.scan.rule().match_template, "第{cn_num}章");
                assert_eq!(args.scan.rule().replace_template, "Chapter {an_num}");
                assert_eq!(args.scan.pattern.as_deref(), Some("*.txt"));
                assert_eq!(args.csv, Some(PathBuf::from("plan.csv")));
            }
            _ => panic!("expected preview"),
        }
    }

    #[test]
    fn test_parse_requires_numeral() {
        assert!(Cli::try_parse_from(["cnrename", "parse"]).is_err());
    }
}
