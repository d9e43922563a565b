//! # 重命名计划生成（预览）
//!
//! 对文件列表应用规则，生成 `RenamePlan`，不修改任何文件。
//!
//! ## 功能
//! - 基于 rayon 的并行规则匹配与数字转换
//! - 转换失败/名称未变化的文件记入跳过列表
//! - 目标冲突检测（磁盘已存在、多个文件映射到同一目标）
//!
//! ## 依赖关系
//! - 被 `commands/preview.rs` 调用
//! - 使用 `models/rule.rs`, `models/rename.rs`

use crate::error::{CnRenameError, Result};
use crate::models::{
    CompiledRule, PlannedRename, RenamePlan, RuleOutcome, SkipReason, SkippedFile,
};

use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// 单个文件的规划结果
enum Planned {
    Ignored,
    Skipped(SkippedFile),
    Rename(PlannedRename),
}

/// 重命名计划生成器
pub struct Planner<'a> {
    rule: &'a CompiledRule,
    /// 并行作业数
    jobs: usize,
}

impl<'a> Planner<'a> {
    /// 创建新的计划生成器
    pub fn new(rule: &'a CompiledRule, jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { rule, jobs }
    }

    /// 生成计划，`files` 应已按文件名排序
    pub fn plan(&self, directory: &Path, files: Vec<PathBuf>) -> Result<RenamePlan> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| CnRenameError::Other(format!("Failed to start thread pool: {}", e)))?;

        let outcomes: Vec<Planned> =
            pool.install(|| files.par_iter().map(|file| self.plan_file(file)).collect());

        let mut plan = RenamePlan {
            directory: directory.to_path_buf(),
            scanned: files.len(),
            ..RenamePlan::default()
        };
        let mut targets: HashSet<PathBuf> = HashSet::new();

        for outcome in outcomes {
            match outcome {
                Planned::Ignored => {}
                Planned::Skipped(skipped) => plan.skipped.push(skipped),
                Planned::Rename(rename) => {
                    let target = rename.target();
                    let reason = if target.exists() {
                        Some(SkipReason::TargetExists(rename.new_name.clone()))
                    } else if !targets.insert(target) {
                        Some(SkipReason::DuplicateTarget(rename.new_name.clone()))
                    } else {
                        None
                    };

                    match reason {
                        Some(reason) => {
                            log::debug!("skipping '{}': {}", rename.original_name, reason);
                            plan.skipped.push(SkippedFile {
                                path: rename.source,
                                reason,
                            });
                        }
                        None => plan.renames.push(rename),
                    }
                }
            }
        }

        log::info!(
            "planned {} rename(s), {} skipped, {} scanned in '{}'",
            plan.renames.len(),
            plan.skipped.len(),
            plan.scanned,
            plan.directory.display()
        );

        Ok(plan)
    }

    /// 单文件规划（纯函数，可并行）
    fn plan_file(&self, path: &Path) -> Planned {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => {
                log::debug!("'{}' has a non UTF-8 name, ignored", path.display());
                return Planned::Ignored;
            }
        };

        match self.rule.apply(name) {
            RuleOutcome::NoMatch => {
                log::debug!("'{}' does not match the rule, ignored", name);
                Planned::Ignored
            }
            RuleOutcome::Invalid { numeral, error } => {
                log::warn!("'{}': cannot convert '{}': {}", name, numeral, error);
                Planned::Skipped(SkippedFile {
                    path: path.to_path_buf(),
                    reason: SkipReason::InvalidNumeral(error),
                })
            }
            RuleOutcome::Unchanged { numeral, value } => {
                log::warn!("'{}' ({} -> {}) would keep the same name", name, numeral, value);
                Planned::Skipped(SkippedFile {
                    path: path.to_path_buf(),
                    reason: SkipReason::Unchanged,
                })
            }
            RuleOutcome::Renamed {
                numeral,
                value,
                new_name,
            } => Planned::Rename(PlannedRename {
                source: path.to_path_buf(),
                original_name: name.to_string(),
                numeral,
                value,
                new_name,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::FileCollector;
    use crate::models::RenameRule;
    use std::fs;
    use std::sync::Mutex;

    /// 记录日志，供断言日志级别使用
    struct CaptureLogger {
        records: Mutex<Vec<(log::Level, String)>>,
    }

    impl log::Log for CaptureLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut records) = self.records.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger {
        records: Mutex::new(Vec::new()),
    };

    fn logged_at(level: log::Level, needle: &str) -> bool {
        LOGGER
            .records
            .lock()
            .unwrap()
            .iter()
            .any(|(l, msg)| *l == level && msg.contains(needle))
    }

    fn plan_dir(dir: &Path, rule: &RenameRule) -> RenamePlan {
        let compiled = rule.compile().unwrap();
        let files = FileCollector::new(dir.to_path_buf()).collect().unwrap();
        Planner::new(&compiled, 2).plan(dir, files).unwrap()
    }

    #[test]
    fn test_plan_default_rule() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["第一章.txt", "第十二章.txt", "readme.md", "第3章.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let plan = plan_dir(dir.path(), &RenameRule::default());

        assert_eq!(plan.scanned, 4);
        assert!(plan.skipped.is_empty());
        let pairs: Vec<(&str, &str)> = plan
            .renames
            .iter()
            .map(|r| (r.original_name.as_str(), r.new_name.as_str()))
            .collect();
        assert_eq!(pairs.len(), 2);
        assert!(pairs.contains(&("第一章.txt", "第1章.txt")));
        assert!(pairs.contains(&("第十二章.txt", "第12章.txt")));

        let twelve = plan.renames.iter().find(|r| r.value == 12).unwrap();
        assert_eq!(twelve.numeral, "十二");
        assert_eq!(twelve.target(), dir.path().join("第12章.txt"));
    }

    #[test]
    fn test_plan_skips_existing_target() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("第五章.txt"), "").unwrap();
        fs::write(dir.path().join("第5章.txt"), "").unwrap();

        let plan = plan_dir(dir.path(), &RenameRule::default());

        assert!(plan.is_empty());
        assert_eq!(plan.skipped.len(), 1);
        assert_eq!(
            plan.skipped[0].reason,
            SkipReason::TargetExists("第5章.txt".to_string())
        );
    }

    #[test]
    fn test_plan_skips_duplicate_targets() {
        let dir = tempfile::tempdir().unwrap();
        // 一十 and 十 both convert to 10
        fs::write(dir.path().join("第一十章.txt"), "").unwrap();
        fs::write(dir.path().join("第十章.txt"), "").unwrap();

        let plan = plan_dir(dir.path(), &RenameRule::default());

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.skipped.len(), 1);
        assert!(matches!(
            plan.skipped[0].reason,
            SkipReason::DuplicateTarget(_)
        ));
    }

    #[test]
    fn test_plan_records_invalid_numeral() {
        let dir = tempfile::tempdir().unwrap();
        let name = format!("第{}章.txt", "九".repeat(25));
        fs::write(dir.path().join(&name), "").unwrap();
        fs::write(dir.path().join("第二章.txt"), "").unwrap();

        let plan = plan_dir(dir.path(), &RenameRule::default());

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.skipped.len(), 1);
        assert_eq!(plan.skipped[0].file_name(), name);
        assert!(matches!(
            plan.skipped[0].reason,
            SkipReason::InvalidNumeral(_)
        ));
    }

    #[test]
    fn test_plan_does_not_touch_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("第一章.txt"), "").unwrap();

        let plan = plan_dir(dir.path(), &RenameRule::default());

        assert_eq!(plan.len(), 1);
        assert!(dir.path().join("第一章.txt").exists());
        assert!(!dir.path().join("第1章.txt").exists());
    }

    #[test]
    fn test_skipped_files_are_logged_as_warnings() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);

        let dir = tempfile::tempdir().unwrap();
        let overflow = format!("第{}回.txt", "八".repeat(25));
        fs::write(dir.path().join(&overflow), "").unwrap();
        fs::write(dir.path().join("卷七7.txt"), "").unwrap();
        fs::write(dir.path().join("unrelated-log-check.txt"), "").unwrap();

        plan_dir(dir.path(), &RenameRule::default());
        assert!(logged_at(log::Level::Warn, &overflow));

        plan_dir(dir.path(), &RenameRule::new("{cn_num}7", "{cn_num}{an_num}"));
        assert!(logged_at(log::Level::Warn, "卷七7.txt"));

        assert!(logged_at(log::Level::Debug, "unrelated-log-check.txt"));
        assert!(!logged_at(log::Level::Warn, "unrelated-log-check.txt"));
    }
}
