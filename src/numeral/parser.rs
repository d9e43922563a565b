//! # 中文数字解析器
//!
//! 单次从左到右扫描，维护三个累加器：
//! ```text
//! result   已完成的万级以上总和
//! section  当前小节（< 10000）的累计值
//! pending  上一个单位之后尚未乘以单位的数字
//! ```
//! 中文按万分节（而非西文的千），万/亿会对整个小节做乘法，
//! 例如 "一百二十三万" = (1*100 + 2*10 + 3) * 10000。
//!
//! ## 依赖关系
//! - 使用 `numeral/alphabet.rs` 的字符表
//! - 使用 `error.rs` 的 `InvalidNumeral`

use super::alphabet::{symbol_of, Symbol, SECTION_UNIT};
use crate::error::InvalidNumeral;

/// 将中文数字字符串转换为整数
///
/// 输入必须非空且只包含 零~九、十、百、千、万、亿。
/// 单独的 "十" 表示 10。
pub fn parse(numeral: &str) -> Result<u64, InvalidNumeral> {
    let symbols = tokenize(numeral)?;

    if numeral == "十" {
        return Ok(10);
    }

    let overflow = || InvalidNumeral::Overflow(numeral.to_string());

    let mut result: u64 = 0;
    let mut section: u64 = 0;
    let mut pending: u64 = 0;

    for symbol in symbols {
        match symbol {
            Symbol::Digit(d) => {
                pending = pending
                    .checked_mul(10)
                    .and_then(|p| p.checked_add(d))
                    .ok_or_else(overflow)?;
            }
            Symbol::Zero => {
                section = section.checked_add(pending).ok_or_else(overflow)?;
                pending = 0;
            }
            Symbol::Unit(unit) if unit >= SECTION_UNIT => {
                // 十万：小节已有值时不再补隐含的 1
                if pending == 0 && section == 0 {
                    pending = 1;
                }
                section = section.checked_add(pending).ok_or_else(overflow)?;
                let scaled = section.checked_mul(unit).ok_or_else(overflow)?;
                result = result.checked_add(scaled).ok_or_else(overflow)?;
                section = 0;
                pending = 0;
            }
            Symbol::Unit(unit) => {
                if pending == 0 {
                    pending = 1;
                }
                let scaled = pending.checked_mul(unit).ok_or_else(overflow)?;
                section = section.checked_add(scaled).ok_or_else(overflow)?;
                pending = 0;
            }
        }
    }

    section = section.checked_add(pending).ok_or_else(overflow)?;
    result.checked_add(section).ok_or_else(overflow)
}

/// 校验输入非空，并把每个字符映射为 `Symbol`
///
/// 不在字符表内的字符全部收集后一起报告。
fn tokenize(numeral: &str) -> Result<Vec<Symbol>, InvalidNumeral> {
    if numeral.is_empty() {
        return Err(InvalidNumeral::Empty);
    }

    let mut symbols = Vec::with_capacity(numeral.len());
    let mut invalid = Vec::new();
    for c in numeral.chars() {
        match symbol_of(c) {
            Some(symbol) => symbols.push(symbol),
            None => invalid.push(c),
        }
    }

    if !invalid.is_empty() {
        return Err(InvalidNumeral::InvalidChars(invalid));
    }

    Ok(symbols)
}
