//! # 文件收集器
//!
//! 扫描目标目录（不递归）收集待处理的普通文件。
//!
//! ## 功能
//! - 目录存在性校验
//! - 可选 glob 过滤（如 `*.txt`）
//! - 结果按文件名排序，保证预览输出稳定
//!
//! ## 依赖关系
//! - 被 `commands/preview.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{CnRenameError, Result};

use glob::Pattern;
use std::path::PathBuf;
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 目标目录
    directory: PathBuf,
    /// 文件名过滤模式
    pattern: Option<Pattern>,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(directory: PathBuf) -> Self {
        Self {
            directory,
            pattern: None,
        }
    }

    /// 设置文件名过滤模式
    pub fn with_pattern(mut self, pattern: Option<&str>) -> Result<Self> {
        self.pattern = match pattern.map(str::trim).filter(|p| !p.is_empty()) {
            Some(p) => Some(Pattern::new(p).map_err(|e| {
                CnRenameError::InvalidArgument(format!("Invalid pattern '{}': {}", p, e))
            })?),
            None => None,
        };
        Ok(self)
    }

    /// 收集目录下所有匹配的普通文件
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.directory.exists() {
            return Err(CnRenameError::DirectoryNotFound {
                path: self.directory.display().to_string(),
            });
        }
        if !self.directory.is_dir() {
            return Err(CnRenameError::NotADirectory {
                path: self.directory.display().to_string(),
            });
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(&self.directory).min_depth(1).max_depth(1);

        for entry in walker {
            let entry = entry.map_err(|e| CnRenameError::DirectoryReadError {
                path: self.directory.display().to_string(),
                source: e.into(),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            if let Some(pattern) = &self.pattern {
                let matched = entry
                    .file_name()
                    .to_str()
                    .map(|name| pattern.matches(name))
                    .unwrap_or(false);
                if !matched {
                    log::debug!("'{}' filtered out by pattern", entry.path().display());
                    continue;
                }
            }

            files.push(entry.into_path());
        }

        files.sort();
        Ok(files)
    }
}
