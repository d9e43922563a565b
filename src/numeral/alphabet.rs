//! # 中文数字字符表
//!
//! 15 个可识别字符：数字 零~九，单位 十/百/千/万/亿。
//!
//! ## 依赖关系
//! - 被 `numeral/parser.rs` 使用
//! - `NUMERAL_CHARS` 被 `models/rule.rs` 用于构造正则字符类

/// 字符的含义
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// 零：分隔符，不参与乘法
    Zero,
    /// 一 ~ 九
    Digit(u64),
    /// 十、百、千、万、亿
    Unit(u64),
}

/// 万级单位阈值，达到该值的单位会对整个小节做乘法
pub const SECTION_UNIT: u64 = 10_000;

/// 全部可识别字符（用于正则字符类）
pub const NUMERAL_CHARS: &str = "零一二三四五六七八九十百千万亿";

const ALPHABET: [(char, Symbol); 15] = [
    ('零', Symbol::Zero),
    ('一', Symbol::Digit(1)),
    ('二', Symbol::Digit(2)),
    ('三', Symbol::Digit(3)),
    ('四', Symbol::Digit(4)),
    ('五', Symbol::Digit(5)),
    ('六', Symbol::Digit(6)),
    ('七', Symbol::Digit(7)),
    ('八', Symbol::Digit(8)),
    ('九', Symbol::Digit(9)),
    ('十', Symbol::Unit(10)),
    ('百', Symbol::Unit(100)),
    ('千', Symbol::Unit(1_000)),
    ('万', Symbol::Unit(10_000)),
    ('亿', Symbol::Unit(100_000_000)),
];

/// 查询字符含义
pub fn symbol_of(c: char) -> Option<Symbol> {
    ALPHABET
        .iter()
        .find(|(ch, _)| *ch == c)
        .map(|(_, symbol)| *symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_matches_char_list() {
        assert_eq!(NUMERAL_CHARS.chars().count(), ALPHABET.len());
        for c in NUMERAL_CHARS.chars() {
            assert!(symbol_of(c).is_some(), "missing {}", c);
        }
    }

    #[test]
    fn test_symbol_lookup() {
        assert_eq!(symbol_of('零'), Some(Symbol::Zero));
        assert_eq!(symbol_of('七'), Some(Symbol::Digit(7)));
        assert_eq!(symbol_of('亿'), Some(Symbol::Unit(100_000_000)));
        assert_eq!(symbol_of('壹'), None);
        assert_eq!(symbol_of('3'), None);
    }
}
