//! # 重命名计划数据模型
//!
//! 预览阶段生成 `RenamePlan`，确认后交给 `batch/runner.rs` 执行。
//!
//! ## 依赖关系
//! - 被 `batch/planner.rs`, `batch/runner.rs`, `batch/export.rs` 使用
//! - 被 `commands/preview.rs`, `commands/rename.rs` 使用

use crate::error::InvalidNumeral;

use serde::Serialize;
use std::path::{Path, PathBuf};

/// 一条待执行的重命名
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedRename {
    /// 源文件完整路径
    #[serde(skip)]
    pub source: PathBuf,

    /// 原文件名
    pub original_name: String,

    /// 匹配到的中文数字
    pub numeral: String,

    /// 转换结果
    pub value: u64,

    /// 新文件名（同目录）
    pub new_name: String,
}

impl PlannedRename {
    /// 目标路径
    pub fn target(&self) -> PathBuf {
        self.source.with_file_name(&self.new_name)
    }
}

/// 跳过原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    InvalidNumeral(InvalidNumeral),
    Unchanged,
    TargetExists(String),
    DuplicateTarget(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::InvalidNumeral(e) => write!(f, "{}", e),
            SkipReason::Unchanged => write!(f, "name unchanged"),
            SkipReason::TargetExists(name) => write!(f, "'{}' already exists", name),
            SkipReason::DuplicateTarget(name) => {
                write!(f, "'{}' is already the target of another file", name)
            }
        }
    }
}

/// 被跳过的文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

impl SkippedFile {
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }
}

/// 一个目录的预览结果
#[derive(Debug, Clone, Default)]
pub struct RenamePlan {
    /// 扫描的目录
    pub directory: PathBuf,
    /// 扫描到的文件数
    pub scanned: usize,
    /// 可执行的重命名（按文件名排序）
    pub renames: Vec<PlannedRename>,
    /// 匹配但被跳过的文件
    pub skipped: Vec<SkippedFile>,
}

impl RenamePlan {
    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.renames.len()
    }
}

/// 文件名（用于显示）
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
