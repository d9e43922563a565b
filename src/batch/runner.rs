//! # 批量重命名执行器
//!
//! 按计划顺序执行重命名。
//!
//! ## 功能
//! - 执行前再次检查源文件/目标文件状态
//! - 单个文件失败不影响其余文件
//! - 进度条显示与汇总统计
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条

use crate::error::{CnRenameError, Result};
use crate::models::{PlannedRename, RenamePlan};
use crate::utils::{output, progress};

use std::error::Error as _;
use std::fs;
use std::path::Path;

/// 单个文件处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    /// 处理成功
    Success(String),
    /// 跳过（如目标已存在）
    Skipped(String, String), // (文件名, 原因)
    /// 处理失败
    Failed(String, String), // (文件名, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 跳过详情
    pub skips: Vec<(String, String)>,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(_) => self.success += 1,
            ProcessResult::Skipped(name, reason) => {
                self.skipped += 1;
                self.skips.push((name, reason));
            }
            ProcessResult::Failed(name, err) => {
                self.failed += 1;
                self.failures.push((name, err));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }
}

/// 批量重命名执行器
pub struct BatchRunner {
    /// 是否显示进度条
    show_progress: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(show_progress: bool) -> Self {
        Self { show_progress }
    }

    /// 顺序执行计划中的全部重命名
    pub fn run(&self, plan: &RenamePlan) -> BatchResult {
        let pb = progress::create_progress_bar(plan.len() as u64, "Renaming");
        if !self.show_progress {
            pb.set_draw_target(indicatif::ProgressDrawTarget::hidden());
        }

        let mut batch_result = BatchResult::default();

        for rename in &plan.renames {
            let result = rename_one(rename);
            if let ProcessResult::Success(_) = &result {
                pb.suspend(|| output::print_rename(&rename.original_name, &rename.new_name));
            }
            batch_result.merge(result);
            pb.inc(1);
        }

        pb.finish_and_clear();
        batch_result
    }
}

/// 执行单个重命名
fn rename_one(rename: &PlannedRename) -> ProcessResult {
    let name = rename.original_name.clone();
    let target = rename.target();

    if !rename.source.exists() {
        log::debug!("'{}' no longer exists, skipped", rename.source.display());
        return ProcessResult::Skipped(name, "source file no longer exists".to_string());
    }

    if target.exists() {
        log::debug!("'{}' already exists, '{}' skipped", target.display(), name);
        return ProcessResult::Skipped(name, format!("'{}' already exists", rename.new_name));
    }

    match rename_file(&rename.source, &target) {
        Ok(()) => {
            log::info!("renamed '{}' -> '{}'", name, rename.new_name);
            ProcessResult::Success(name)
        }
        Err(e) => {
            let message = match e.source() {
                Some(source) => format!("{}: {}", e, source),
                None => e.to_string(),
            };
            log::debug!("rename failed: {}", message);
            ProcessResult::Failed(name, message)
        }
    }
}

fn rename_file(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|e| CnRenameError::RenameError {
        from: from.display().to_string(),
        to: to.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{FileCollector, Planner};
    use crate::models::RenameRule;

    fn plan_for(dir: &Path) -> RenamePlan {
        let rule = RenameRule::default().compile().unwrap();
        let files = FileCollector::new(dir.to_path_buf()).collect().unwrap();
        Planner::new(&rule, 1).plan(dir, files).unwrap()
    }

    #[test]
    fn test_run_renames_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("第一章.txt"), "one").unwrap();
        fs::write(dir.path().join("第一千零五章.txt"), "1005").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let plan = plan_for(dir.path());
        let result = BatchRunner::new(false).run(&plan);

        assert_eq!(result.success, 2);
        assert_eq!(result.total(), 2);
        assert_eq!(
            fs::read_to_string(dir.path().join("第1章.txt")).unwrap(),
            "one"
        );
        assert!(dir.path().join("第1005章.txt").exists());
        assert!(dir.path().join("notes.txt").exists());
        assert!(!dir.path().join("第一章.txt").exists());
    }

    #[test]
    fn test_run_skips_target_created_after_preview() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("第二章.txt"), "original").unwrap();

        let plan = plan_for(dir.path());
        fs::write(dir.path().join("第2章.txt"), "late").unwrap();
        let result = BatchRunner::new(false).run(&plan);

        assert_eq!(result.success, 0);
        assert_eq!(result.skipped, 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("第2章.txt")).unwrap(),
            "late"
        );
        assert!(dir.path().join("第二章.txt").exists());
    }

    #[test]
    fn test_run_skips_vanished_source() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("第三章.txt"), "").unwrap();
        fs::write(dir.path().join("第四章.txt"), "").unwrap();

        let plan = plan_for(dir.path());
        fs::remove_file(dir.path().join("第三章.txt")).unwrap();
        let result = BatchRunner::new(false).run(&plan);

        assert_eq!(result.success, 1);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.skips[0].0, "第三章.txt");
        assert!(dir.path().join("第4章.txt").exists());
    }

    #[test]
    fn test_batch_result_merge() {
        let mut result = BatchResult::default();
        result.merge(ProcessResult::Success("a".into()));
        result.merge(ProcessResult::Skipped("b".into(), "exists".into()));
        result.merge(ProcessResult::Failed("c".into(), "denied".into()));

        assert_eq!(result.total(), 3);
        assert_eq!(result.failures, vec![("c".to_string(), "denied".to_string())]);
    }
}
