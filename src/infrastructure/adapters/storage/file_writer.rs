//! File Manuscript Writer - 文件系统写出
//!
//! 实现 ManuscriptWriterPort trait

use std::fs;
use std::path::Path;

use crate::application::ports::{ManuscriptWriterPort, WriteError};

/// 文件系统写出器
#[derive(Debug, Clone, Copy, Default)]
pub struct FsManuscriptWriter;

impl FsManuscriptWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ManuscriptWriterPort for FsManuscriptWriter {
    fn write(&self, path: &Path, document: &str) -> Result<(), WriteError> {
        // 确保输出目录存在
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| WriteError::CreateDir {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }

        fs::write(path, document).map_err(|e| WriteError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), bytes = document.len(), "Document written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("output/nested/full_manuscript.md");

        FsManuscriptWriter::new().write(&path, "# Chapter 01\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "# Chapter 01\n");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("out.md");
        fs::write(&path, "old contents that are longer").unwrap();

        FsManuscriptWriter::new().write(&path, "new\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_write_into_file_parent_fails() {
        let temp_dir = tempdir().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "file").unwrap();

        let err = FsManuscriptWriter::new()
            .write(&blocker.join("out.md"), "x")
            .unwrap_err();
        assert!(matches!(err, WriteError::CreateDir { .. }));
    }
}
