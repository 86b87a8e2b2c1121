//! File Manuscript Source - 文件系统手稿读取
//!
//! 实现 ManuscriptSourcePort trait

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::decode::decode_text;
use crate::application::ports::{ManuscriptSourcePort, SourceError};
use crate::domain::manuscript::{EntryKind, SourceEntry};

/// 文件系统手稿源
///
/// 只枚举根目录下两层：章节目录及其直接包含的文件
#[derive(Debug, Clone, Copy, Default)]
pub struct FsManuscriptSource;

impl FsManuscriptSource {
    pub fn new() -> Self {
        Self
    }
}

impl ManuscriptSourcePort for FsManuscriptSource {
    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_entries(&self, root: &Path) -> Result<Vec<SourceEntry>, SourceError> {
        let mut top: Vec<SourceEntry> = Vec::new();
        let mut dir_index: HashMap<PathBuf, usize> = HashMap::new();

        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(2)
            .follow_links(true)
            .sort_by_file_name()
        {
            // 只有根目录本身读取失败才是致命错误，其余异常项跳过
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    let path = e.path().unwrap_or(root).to_path_buf();
                    return Err(SourceError::io(path, e));
                }
                Err(e) => {
                    tracing::warn!(
                        path = %e.path().unwrap_or(root).display(),
                        error = %e,
                        "Skipping unreadable manuscript entry"
                    );
                    continue;
                }
            };

            let path = entry.path().to_path_buf();
            let snapshot = if entry.file_type().is_dir() {
                SourceEntry::directory(path.clone(), Vec::new())
            } else {
                SourceEntry::file(path.clone())
            };

            if entry.depth() == 1 {
                if snapshot.is_dir() {
                    dir_index.insert(path, top.len());
                }
                top.push(snapshot);
                continue;
            }

            let parent = path.parent().and_then(|p| dir_index.get(p)).copied();
            if let Some(index) = parent {
                if let EntryKind::Directory(children) = &mut top[index].kind {
                    children.push(snapshot);
                }
            }
        }

        tracing::debug!(root = %root.display(), entries = top.len(), "Manuscript root listed");
        Ok(top)
    }

    fn read_text(&self, path: &Path) -> Result<String, SourceError> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
            _ => SourceError::io(path, e),
        })?;

        let decoded = decode_text(&bytes);
        if decoded.lossy {
            tracing::warn!(path = %path.display(), "Invalid UTF-8 replaced while reading");
        }
        Ok(decoded.text)
    }

    fn read_optional_text(&self, path: &Path) -> Result<Option<String>, SourceError> {
        if !path.is_file() {
            return Ok(None);
        }
        self.read_text(path).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_list_entries_two_levels() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("01-Start/deeper")).unwrap();
        fs::write(root.join("01-Start/ch01-sc01.md"), "Hello").unwrap();
        fs::write(root.join("01-Start/deeper/ch01-sc09.md"), "Hidden").unwrap();
        fs::write(root.join("header_material.md"), "---\ntitle: T\n---\n").unwrap();

        let entries = FsManuscriptSource::new().list_entries(root).unwrap();

        assert_eq!(entries.len(), 2);
        let chapter = entries.iter().find(|e| e.name == "01-Start").unwrap();
        assert!(chapter.is_dir());

        let mut names: Vec<&str> = chapter.children().iter().map(|c| c.name.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["ch01-sc01.md", "deeper"]);

        let deeper = chapter.children().iter().find(|c| c.name == "deeper").unwrap();
        assert!(deeper.children().is_empty());

        let header = entries.iter().find(|e| e.name == "header_material.md").unwrap();
        assert!(!header.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_skipped() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("01-Start")).unwrap();
        fs::write(root.join("01-Start/ch01-sc01.md"), "Hello world.").unwrap();
        std::os::unix::fs::symlink(
            root.join("01-Start/missing-target"),
            root.join("01-Start/.#ch01-sc01.md"),
        )
        .unwrap();
        std::os::unix::fs::symlink(root.join("gone"), root.join("stale-link")).unwrap();

        let entries = FsManuscriptSource::new().list_entries(root).unwrap();

        let chapter = entries.iter().find(|e| e.name == "01-Start").unwrap();
        let names: Vec<&str> = chapter.children().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["ch01-sc01.md"]);
        assert!(entries.iter().all(|e| e.name != "stale-link"));
    }

    #[test]
    fn test_missing_root_is_error() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("absent");
        assert!(FsManuscriptSource::new().list_entries(&missing).is_err());
    }

    #[test]
    fn test_read_text_lossy_and_normalised() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("scene.md");
        fs::write(&path, b"caf\xE9\r\nnext").unwrap();

        let text = FsManuscriptSource::new().read_text(&path).unwrap();
        assert_eq!(text, "caf\u{FFFD}\nnext");
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = tempdir().unwrap();
        let source = FsManuscriptSource::new();
        let missing = temp_dir.path().join("nope.md");

        assert!(matches!(
            source.read_text(&missing),
            Err(SourceError::NotFound(_))
        ));
        assert_eq!(source.read_optional_text(&missing).unwrap(), None);
    }

    #[test]
    fn test_optional_text_ignores_directories() {
        let temp_dir = tempdir().unwrap();
        let dir = temp_dir.path().join("header_material.md");
        fs::create_dir(&dir).unwrap();

        assert_eq!(FsManuscriptSource::new().read_optional_text(&dir).unwrap(), None);
    }

    #[test]
    fn test_is_directory() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("file.md");
        fs::write(&file, "x").unwrap();

        let source = FsManuscriptSource::new();
        assert!(source.is_directory(temp_dir.path()));
        assert!(!source.is_directory(&file));
        assert!(!source.is_directory(&temp_dir.path().join("missing")));
    }
}
