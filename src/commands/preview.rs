//! # preview 命令实现
//!
//! 生成并显示重命名计划（dry run），不修改任何文件。
//!
//! ## 功能
//! - 校验规则、扫描目录
//! - 并行生成重命名计划
//! - 表格显示计划与跳过的文件
//! - 可选导出 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/preview.rs` 定义的参数
//! - 使用 `batch/`, `models/`
//! - 使用 `utils/output.rs`
//! - `build_plan`/`show_plan` 被 `commands/rename.rs` 复用

use crate::batch::{export, FileCollector, Planner};
use crate::cli::preview::{PreviewArgs, ScanArgs};
use crate::error::Result;
use crate::models::RenamePlan;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 预览表格行
#[derive(Debug, Clone, Tabled)]
struct PreviewRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Numeral")]
    numeral: String,
    #[tabled(rename = "Value")]
    value: u64,
    #[tabled(rename = "New name")]
    new_name: String,
}

/// 执行 preview 命令
pub fn execute(args: PreviewArgs) -> Result<()> {
    output::print_header("Previewing Renames");

    let plan = build_plan(&args.scan)?;
    show_plan(&plan);

    if let Some(ref csv_path) = args.csv {
        export::plan_to_csv(&plan, csv_path)?;
        output::print_success(&format!("Rename plan saved to '{}'", csv_path.display()));
    }

    Ok(())
}

/// 校验规则、扫描目录并生成计划
pub fn build_plan(scan: &ScanArgs) -> Result<RenamePlan> {
    // 规则错误要在扫描之前报告
    let rule = scan.rule().compile()?;

    let files = FileCollector::new(scan.path.clone())
        .with_pattern(scan.pattern.as_deref())?
        .collect()?;

    output::print_info(&format!(
        "Scanning {} file(s) in '{}'...",
        files.len(),
        scan.path.display()
    ));

    Planner::new(&rule, scan.jobs).plan(&scan.path, files)
}

/// 显示计划
pub fn show_plan(plan: &RenamePlan) {
    if plan.is_empty() {
        output::print_warning("No files to convert.");
    } else {
        let rows: Vec<PreviewRow> = plan
            .renames
            .iter()
            .enumerate()
            .map(|(i, r)| PreviewRow {
                index: i + 1,
                file: r.original_name.clone(),
                numeral: r.numeral.clone(),
                value: r.value,
                new_name: r.new_name.clone(),
            })
            .collect();
        println!("{}", Table::new(&rows));
    }

    for skipped in &plan.skipped {
        output::print_skip(&skipped.file_name(), &skipped.reason.to_string());
    }

    output::print_info(&format!(
        "{} of {} file(s) can be renamed ({} skipped)",
        plan.len(),
        plan.scanned,
        plan.skipped.len()
    ));
}
