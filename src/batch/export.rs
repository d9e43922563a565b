//! # 重命名计划导出
//!
//! 将预览结果导出为 CSV（original_name, numeral, value, new_name）。
//!
//! ## 依赖关系
//! - 被 `commands/preview.rs` 调用
//! - 使用 `csv` + `serde` 序列化 `PlannedRename`

use crate::error::{CnRenameError, Result};
use crate::models::RenamePlan;

use std::path::Path;

/// 导出计划为 CSV
pub fn plan_to_csv(plan: &RenamePlan, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    if plan.renames.is_empty() {
        wtr.write_record(["original_name", "numeral", "value", "new_name"])?;
    }

    for rename in &plan.renames {
        wtr.serialize(rename)?;
    }

    wtr.flush().map_err(|e| CnRenameError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
