//! Word Count Queries

use std::path::PathBuf;

use crate::application::commands::validate_extension;
use crate::application::error::ApplicationError;

/// 字数报告查询
#[derive(Debug, Clone)]
pub struct CountWords {
    pub root: PathBuf,
    /// 场景文件扩展名（不含点）
    pub extension: String,
}

impl CountWords {
    pub fn validate(&self) -> Result<(), ApplicationError> {
        validate_extension(&self.extension)
    }
}
