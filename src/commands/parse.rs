//! # parse 命令实现
//!
//! 转换命令行给出的中文数字并以表格输出。
//!
//! ## 依赖关系
//! - 使用 `cli/parse.rs` 定义的参数
//! - 使用 `numeral/`
//! - 使用 `utils/output.rs`

use crate::cli::parse::ParseArgs;
use crate::error::{CnRenameError, Result};
use crate::numeral;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 转换结果行
#[derive(Debug, Clone, Tabled)]
struct NumeralRow {
    #[tabled(rename = "Numeral")]
    numeral: String,
    #[tabled(rename = "Value")]
    value: u64,
}

/// 执行 parse 命令
pub fn execute(args: ParseArgs) -> Result<()> {
    let mut rows = Vec::new();
    let mut failed = 0;

    for input in &args.numerals {
        match numeral::parse(input) {
            Ok(value) => rows.push(NumeralRow {
                numeral: input.clone(),
                value,
            }),
            Err(e) => {
                failed += 1;
                output::print_error(&format!("'{}': {}", input, e));
            }
        }
    }

    if !rows.is_empty() {
        println!("{}", Table::new(&rows));
    }

    if failed > 0 {
        return Err(CnRenameError::Other(format!(
            "{} of {} numeral(s) could not be converted",
            failed,
            args.numerals.len()
        )));
    }

    Ok(())
}
