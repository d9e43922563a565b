//! # 统一错误处理模块
//!
//! 定义 cnrename 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// 中文数字校验/转换失败
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidNumeral {
    #[error("invalid numeral: empty input")]
    Empty,

    #[error("invalid numeral character(s): {}", join_chars(.0))]
    InvalidChars(Vec<char>),

    #[error("numeral '{0}' exceeds the supported range")]
    Overflow(String),
}

fn join_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// cnrename 统一错误类型
#[derive(Error, Debug)]
pub enum CnRenameError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read directory: {path}")]
    DirectoryReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to rename '{from}' -> '{to}'")]
    RenameError {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read answer from terminal")]
    TerminalError(#[source] std::io::Error),

    #[error("Cannot ask for confirmation: stderr is not a terminal (pass --yes to rename without asking)")]
    NotInteractive,

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    // ─────────────────────────────────────────────────────────────
    // 规则错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid rename rule: {0}")]
    InvalidRule(String),

    #[error("Invalid regular expression in match template: {0}")]
    RegexError(#[from] regex::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, CnRenameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_numeral_messages() {
        assert_eq!(InvalidNumeral::Empty.to_string(), "invalid numeral: empty input");
        assert_eq!(
            InvalidNumeral::InvalidChars(vec!['壹', 'x']).to_string(),
            "invalid numeral character(s): 壹, x"
        );
    }

    #[test]
    fn test_overflow_message_names_input() {
        let err = InvalidNumeral::Overflow("九九九".to_string());
        assert_eq!(err.to_string(), "numeral '九九九' exceeds the supported range");
    }
}
