//! Manuscript Source Port - 出站端口
//!
//! 定义手稿目录的只读访问接口，具体实现在 infrastructure 层

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::manuscript::SourceEntry;

/// 手稿读取错误
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error at {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },
}

impl SourceError {
    pub fn io(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Manuscript Source Port
///
/// 每次调用都直接读取底层存储，不做缓存
pub trait ManuscriptSourcePort: Send + Sync {
    /// 路径是否为已存在的目录
    fn is_directory(&self, path: &Path) -> bool;

    /// 枚举根目录的两层快照：根的直接子项，以及其中每个目录的直接子项
    fn list_entries(&self, root: &Path) -> Result<Vec<SourceEntry>, SourceError>;

    /// 读取文本文件
    ///
    /// 非法字节以 U+FFFD 替换，换行统一为 `\n`
    fn read_text(&self, path: &Path) -> Result<String, SourceError>;

    /// 读取可选文件，不存在时返回 `None`
    fn read_optional_text(&self, path: &Path) -> Result<Option<String>, SourceError>;
}
