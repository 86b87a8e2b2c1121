//! Compile Commands

use std::path::PathBuf;

use crate::application::error::ApplicationError;
use crate::domain::manuscript::CompileOptions;

/// 编译手稿命令
#[derive(Debug, Clone)]
pub struct CompileManuscript {
    /// 手稿根目录
    pub root: PathBuf,
    /// 输出文件路径
    pub output: PathBuf,
    /// 场景与 header 文件扩展名（不含点）
    pub extension: String,
    /// header 文件名（不含扩展名）
    pub header_file: String,
    pub options: CompileOptions,
}

impl CompileManuscript {
    pub fn validate(&self) -> Result<(), ApplicationError> {
        validate_extension(&self.extension)?;
        if self.header_file.is_empty() {
            return Err(ApplicationError::validation("header file name cannot be empty"));
        }
        Ok(())
    }

    /// header 文档路径：`<root>/<header_file>.<extension>`
    pub fn header_path(&self) -> PathBuf {
        self.root
            .join(format!("{}.{}", self.header_file, self.extension))
    }
}

/// 扩展名不能为空，也不能带前导点
pub(crate) fn validate_extension(extension: &str) -> Result<(), ApplicationError> {
    if extension.is_empty() || extension.starts_with('.') {
        return Err(ApplicationError::validation(format!(
            "invalid scene extension '{}'",
            extension
        )));
    }
    Ok(())
}
