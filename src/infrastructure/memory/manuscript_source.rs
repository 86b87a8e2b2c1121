//! In-Memory Manuscript Source Implementation

use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{ManuscriptSourcePort, SourceError};
use crate::domain::manuscript::SourceEntry;
use crate::infrastructure::adapters::storage::decode_text;

#[derive(Debug, Clone)]
enum Node {
    Directory,
    File(Vec<u8>),
    /// 存在但读取失败的文件
    Unreadable,
}

/// 内存手稿源
///
/// 添加文件时自动补齐所有上级目录；枚举顺序不固定
pub struct InMemoryManuscriptSource {
    nodes: DashMap<PathBuf, Node>,
}

impl InMemoryManuscriptSource {
    pub fn new() -> Self {
        Self {
            nodes: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.add_ancestors(&path);
        self.nodes.insert(path, Node::Directory);
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) {
        let path = path.into();
        self.add_ancestors(&path);
        self.nodes.insert(path, Node::File(content.into()));
    }

    pub fn add_unreadable(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.add_ancestors(&path);
        self.nodes.insert(path, Node::Unreadable);
    }

    fn add_ancestors(&self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.nodes
                .entry(ancestor.to_path_buf())
                .or_insert(Node::Directory);
        }
    }

    fn children_of(&self, dir: &Path) -> Vec<(PathBuf, bool)> {
        self.nodes
            .iter()
            .filter(|entry| entry.key().parent() == Some(dir))
            .map(|entry| (entry.key().clone(), matches!(entry.value(), Node::Directory)))
            .collect()
    }
}

impl Default for InMemoryManuscriptSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ManuscriptSourcePort for InMemoryManuscriptSource {
    fn is_directory(&self, path: &Path) -> bool {
        matches!(self.nodes.get(path).as_deref(), Some(Node::Directory))
    }

    fn list_entries(&self, root: &Path) -> Result<Vec<SourceEntry>, SourceError> {
        if !self.is_directory(root) {
            return Err(SourceError::NotFound(root.to_path_buf()));
        }

        let entries = self
            .children_of(root)
            .into_iter()
            .map(|(path, is_dir)| {
                if !is_dir {
                    return SourceEntry::file(path);
                }
                let children = self
                    .children_of(&path)
                    .into_iter()
                    .map(|(child, child_is_dir)| {
                        if child_is_dir {
                            SourceEntry::directory(child, Vec::new())
                        } else {
                            SourceEntry::file(child)
                        }
                    })
                    .collect();
                SourceEntry::directory(path, children)
            })
            .collect();
        Ok(entries)
    }

    fn read_text(&self, path: &Path) -> Result<String, SourceError> {
        let node = self
            .nodes
            .get(path)
            .map(|n| n.value().clone())
            .ok_or_else(|| SourceError::NotFound(path.to_path_buf()))?;

        match node {
            Node::File(bytes) => {
                let decoded = decode_text(&bytes);
                if decoded.lossy {
                    tracing::warn!(path = %path.display(), "Invalid UTF-8 replaced while reading");
                }
                Ok(decoded.text)
            }
            Node::Directory => Err(SourceError::io(path, "is a directory")),
            Node::Unreadable => Err(SourceError::io(path, "permission denied")),
        }
    }

    fn read_optional_text(&self, path: &Path) -> Result<Option<String>, SourceError> {
        let readable = matches!(
            self.nodes.get(path).as_deref(),
            Some(Node::File(_)) | Some(Node::Unreadable)
        );
        if !readable {
            return Ok(None);
        }
        self.read_text(path).map(Some)
    }
}
