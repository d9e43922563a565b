//! # 重命名规则
//!
//! 匹配模板 / 替换模板，支持两个占位符：
//! - `{cn_num}`: 中文数字（匹配模板中必须且只能出现一次）
//! - `{an_num}`: 阿拉伯数字（替换模板中必须出现）
//!
//! 匹配模板本身是正则表达式，`{cn_num}` 会被替换为命名捕获组
//! `(?P<cn_num>[零一二三四五六七八九十百千万亿]+)`。
//! 替换模板是普通文本，只做占位符替换。
//!
//! ## 依赖关系
//! - 被 `batch/planner.rs` 和 `commands/` 使用
//! - 使用 `numeral/` 转换数字

use crate::error::{CnRenameError, InvalidNumeral, Result};
use crate::numeral::{parse, NUMERAL_CHARS};

use regex::Regex;

/// 中文数字占位符
pub const CN_NUM: &str = "{cn_num}";
/// 阿拉伯数字占位符
pub const AN_NUM: &str = "{an_num}";

/// 默认匹配模板
pub const DEFAULT_MATCH_TEMPLATE: &str = "第{cn_num}";
/// 默认替换模板
pub const DEFAULT_REPLACE_TEMPLATE: &str = "第{an_num}";

const CAPTURE_NAME: &str = "cn_num";

/// 用户可配置的重命名规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRule {
    pub match_template: String,
    pub replace_template: String,
}

impl Default for RenameRule {
    fn default() -> Self {
        RenameRule {
            match_template: DEFAULT_MATCH_TEMPLATE.to_string(),
            replace_template: DEFAULT_REPLACE_TEMPLATE.to_string(),
        }
    }
}

impl RenameRule {
    pub fn new(match_template: impl Into<String>, replace_template: impl Into<String>) -> Self {
        RenameRule {
            match_template: match_template.into(),
            replace_template: replace_template.into(),
        }
    }

    /// 校验占位符并编译为正则
    pub fn compile(&self) -> Result<CompiledRule> {
        let parts: Vec<&str> = self.match_template.split(CN_NUM).collect();
        match parts.len() {
            1 => {
                return Err(CnRenameError::InvalidRule(format!(
                    "match template '{}' must contain {}",
                    self.match_template, CN_NUM
                )))
            }
            2 => {}
            _ => {
                return Err(CnRenameError::InvalidRule(format!(
                    "match template '{}' must contain {} only once",
                    self.match_template, CN_NUM
                )))
            }
        }

        if !self.replace_template.contains(AN_NUM) {
            return Err(CnRenameError::InvalidRule(format!(
                "replace template '{}' must contain {}",
                self.replace_template, AN_NUM
            )));
        }

        let source = format!(
            "{}(?P<{}>[{}]+){}",
            parts[0], CAPTURE_NAME, NUMERAL_CHARS, parts[1]
        );
        let regex = Regex::new(&source)?;
        log::debug!("compiled match template '{}' -> /{}/", self.match_template, source);

        Ok(CompiledRule {
            regex,
            replace_template: self.replace_template.clone(),
        })
    }
}

/// 对单个文件名应用规则的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// 文件名不符合匹配模板
    NoMatch,
    /// 匹配到的中文数字无法转换
    Invalid {
        numeral: String,
        error: InvalidNumeral,
    },
    /// 替换后文件名没有变化
    Unchanged { numeral: String, value: u64 },
    /// 得到新文件名
    Renamed {
        numeral: String,
        value: u64,
        new_name: String,
    },
}

/// 编译后的规则
#[derive(Debug, Clone)]
pub struct CompiledRule {
    regex: Regex,
    replace_template: String,
}

impl CompiledRule {
    /// 对文件名应用规则，只替换第一处匹配
    pub fn apply(&self, file_name: &str) -> RuleOutcome {
        // 顶层分支（如 `x|第{cn_num}`）可能先匹配到不含数字的部分
        let caps = match self
            .regex
            .captures_iter(file_name)
            .find(|c| c.name(CAPTURE_NAME).is_some())
        {
            Some(caps) => caps,
            None => return RuleOutcome::NoMatch,
        };
        let (whole, numeral) = match (caps.get(0), caps.name(CAPTURE_NAME)) {
            (Some(whole), Some(numeral)) => (whole, numeral.as_str().to_string()),
            _ => return RuleOutcome::NoMatch,
        };

        let value = match parse(&numeral) {
            Ok(value) => value,
            Err(error) => return RuleOutcome::Invalid { numeral, error },
        };

        let replacement = self
            .replace_template
            .replace(AN_NUM, &value.to_string())
            .replace(CN_NUM, &numeral);

        let new_name = format!(
            "{}{}{}",
            &file_name[..whole.start()],
            replacement,
            &file_name[whole.end()..]
        );

        if new_name == file_name {
            RuleOutcome::Unchanged { numeral, value }
        } else {
            RuleOutcome::Renamed {
                numeral,
                value,
                new_name,
            }
        }
    }
}
