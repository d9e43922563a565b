//! # rename 命令实现
//!
//! 预览重命名计划，确认后执行。
//!
//! ## 功能
//! - 复用 preview 生成并显示计划
//! - 交互确认（`--yes` 跳过）
//! - 顺序执行重命名，汇总成功/跳过/失败
//!
//! ## 依赖关系
//! - 使用 `cli/rename.rs` 定义的参数
//! - 使用 `commands/preview.rs`, `batch/runner.rs`
//! - 使用 `utils/output.rs`, `utils/prompt.rs`

use super::preview;
use crate::batch::BatchRunner;
use crate::cli::rename::RenameArgs;
use crate::error::Result;
use crate::utils::{output, prompt};

use console::Term;

/// 执行 rename 命令
pub fn execute(args: RenameArgs) -> Result<()> {
    execute_with(args, prompt::confirm)
}

/// 执行 rename 命令，`confirm` 决定是否继续（`--yes` 时不调用）
pub fn execute_with(args: RenameArgs, confirm: impl FnOnce(&str) -> Result<bool>) -> Result<()> {
    output::print_header("Renaming Files");

    let plan = preview::build_plan(&args.scan)?;
    preview::show_plan(&plan);

    if plan.is_empty() {
        return Ok(());
    }

    if !args.yes && !confirm(&format!("Rename {} file(s)?", plan.len()))? {
        output::print_warning("Rename cancelled, no file was changed.");
        return Ok(());
    }

    log::info!("renaming {} file(s) in '{}'", plan.len(), plan.directory.display());
    let result = BatchRunner::new(Term::stderr().is_term()).run(&plan);

    for (name, reason) in &result.skips {
        output::print_skip(name, reason);
    }
    for (name, err) in &result.failures {
        output::print_error(&format!("{}: {}", name, err));
    }

    output::print_done(&format!(
        "Renamed {} of {} file(s) ({} skipped, {} failed)",
        result.success,
        result.total(),
        result.skipped,
        result.failed
    ));

    Ok(())
}
