//! Manuscript Writer Port - 出站端口

use std::path::{Path, PathBuf};
use thiserror::Error;

/// 写出错误
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to create directory {}: {message}", .path.display())]
    CreateDir { path: PathBuf, message: String },

    #[error("Failed to write {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },
}

/// Manuscript Writer Port
pub trait ManuscriptWriterPort: Send + Sync {
    /// 写出完整文档，缺失的上级目录会被创建，已有文件被覆盖
    fn write(&self, path: &Path, document: &str) -> Result<(), WriteError>;
}
