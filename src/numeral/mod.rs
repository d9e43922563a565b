//! # 中文数字模块
//!
//! 将文件名中出现的中文数字（如 "一百二十三"）转换为整数。
//!
//! ## 依赖关系
//! - 被 `models/rule.rs` 和 `commands/parse.rs` 使用
//! - 子模块: alphabet, parser

pub mod alphabet;
pub mod parser;

pub use alphabet::NUMERAL_CHARS;
pub use parser::parse;
