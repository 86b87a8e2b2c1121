//! In-Memory Manuscript Writer Implementation

use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{ManuscriptWriterPort, WriteError};

/// 内存写出器，记录每个路径最后一次写入的文档
pub struct InMemoryManuscriptWriter {
    documents: DashMap<PathBuf, String>,
}

impl InMemoryManuscriptWriter {
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn document(&self, path: impl AsRef<Path>) -> Option<String> {
        self.documents.get(path.as_ref()).map(|d| d.value().clone())
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Default for InMemoryManuscriptWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ManuscriptWriterPort for InMemoryManuscriptWriter {
    fn write(&self, path: &Path, document: &str) -> Result<(), WriteError> {
        self.documents.insert(path.to_path_buf(), document.to_string());
        Ok(())
    }
}
