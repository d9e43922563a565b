//! # 数据模型模块
//!
//! 定义重命名规则和重命名计划数据模型。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 子模块: rule, rename

pub mod rename;
pub mod rule;

pub use rename::{PlannedRename, RenamePlan, SkipReason, SkippedFile};
pub use rule::{CompiledRule, RenameRule, RuleOutcome};
