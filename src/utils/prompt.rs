//! # 交互确认
//!
//! 执行重命名前向用户确认（y/N）。
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 使用 `console` crate 读取终端输入

use crate::error::{CnRenameError, Result};

use colored::Colorize;
use console::Term;

/// 询问用户是否继续，默认为否
pub fn confirm(question: &str) -> Result<bool> {
    let term = Term::stderr();
    ensure_interactive(term.is_term())?;
    term.write_str(&format!("{} {} [y/N] ", "[?]".cyan().bold(), question))
        .map_err(CnRenameError::TerminalError)?;
    let answer = term.read_line().map_err(CnRenameError::TerminalError)?;
    Ok(is_yes(&answer))
}

/// 非终端（管道、重定向）时无法读取回答，直接报错
fn ensure_interactive(is_term: bool) -> Result<()> {
    if is_term {
        Ok(())
    } else {
        Err(CnRenameError::NotInteractive)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "是")
}
