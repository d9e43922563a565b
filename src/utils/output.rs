//! # 美化输出工具
//!
//! 终端输出统一使用带颜色的标签前缀，日志（`log`）只用于诊断信息。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块和 `batch/runner.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息（stderr）
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印跳过的文件及原因
pub fn print_skip(name: &str, reason: &str) {
    println!("{} {} {}", "[SKIP]".dimmed(), name, format!("({})", reason).dimmed());
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印一条已完成的重命名
pub fn print_rename(from: &str, to: &str) {
    println!(
        "{} {} {} {}",
        "[OK]".green().bold(),
        from.dimmed(),
        "->".cyan(),
        to.bold()
    );
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}
