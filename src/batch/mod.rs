//! # 批量处理模块
//!
//! 目录扫描、重命名计划生成（预览）与执行。
//!
//! ## 功能
//! - 收集目标目录下的文件
//! - 并行生成重命名计划
//! - 顺序执行重命名并统计结果
//! - 计划导出为 CSV
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `rayon` 进行并行计算
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod export;
pub mod planner;
pub mod runner;

pub use collector::FileCollector;
pub use planner::Planner;
pub use runner::BatchRunner;
