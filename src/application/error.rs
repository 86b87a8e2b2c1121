//! 应用层错误定义
//!
//! 统一的命令/查询错误类型，以及对应的进程退出码

use std::path::PathBuf;
use thiserror::Error;

use crate::application::ports::{SourceError, WriteError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 手稿根目录不存在或不是目录
    #[error("Manuscript root not found: {}", .0.display())]
    RootMissing(PathBuf),

    /// 没有任何符合命名约定的章节或场景
    #[error("No chapter or scene structure found under {}", .0.display())]
    StructureNotFound(PathBuf),

    /// 存储错误
    #[error("Storage error: {0}")]
    Storage(String),

    /// 验证错误
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// 进程退出码
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::RootMissing(_) => 2,
            Self::StructureNotFound(_) | Self::Storage(_) | Self::Validation(_) => 1,
        }
    }
}

impl From<SourceError> for ApplicationError {
    fn from(err: SourceError) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<WriteError> for ApplicationError {
    fn from(err: WriteError) -> Self {
        Self::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ApplicationError::RootMissing(PathBuf::from("m")).exit_code(), 2);
        assert_eq!(
            ApplicationError::StructureNotFound(PathBuf::from("m")).exit_code(),
            1
        );
        assert_eq!(ApplicationError::validation("bad").exit_code(), 1);
    }

    #[test]
    fn test_source_error_maps_to_storage() {
        let err: ApplicationError = SourceError::io("m/01-A/ch01-sc01.md", "permission denied").into();
        assert!(matches!(err, ApplicationError::Storage(_)));
        assert_eq!(
            err.to_string(),
            "Storage error: IO error at m/01-A/ch01-sc01.md: permission denied"
        );
    }
}
