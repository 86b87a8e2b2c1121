//! 目录结构识别
//!
//! 在预先枚举好的目录快照上识别章节目录与场景文件，纯函数，无 I/O。
//!
//! 命名约定:
//! - 章节目录: `NN-Title`
//! - 场景文件: `chNN-scMM.<ext>`（大小写不敏感）

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::{Chapter, Scene};

/// 默认场景文件扩展名
pub const DEFAULT_SCENE_EXTENSION: &str = "md";

/// 目录快照中的一项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    File,
    /// 目录及其直接子项
    Directory(Vec<SourceEntry>),
}

impl SourceEntry {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: entry_name(&path),
            path,
            kind: EntryKind::File,
        }
    }

    pub fn directory(path: impl Into<PathBuf>, children: Vec<SourceEntry>) -> Self {
        let path = path.into();
        Self {
            name: entry_name(&path),
            path,
            kind: EntryKind::Directory(children),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory(_))
    }

    pub fn children(&self) -> &[SourceEntry] {
        match &self.kind {
            EntryKind::Directory(children) => children,
            EntryKind::File => &[],
        }
    }
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// 章节目录名解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterDirName {
    pub number: u32,
    pub title: String,
}

/// 场景文件名解析结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneFileName {
    pub chapter_number: u32,
    pub scene_number: u32,
}

fn chapter_dir_pattern() -> &'static Regex {
    static CHAPTER_DIR_RE: OnceLock<Regex> = OnceLock::new();
    CHAPTER_DIR_RE.get_or_init(|| {
        Regex::new(r"^(?P<num>[0-9]{2})-(?P<title>.+)$").expect("chapter dir pattern is valid")
    })
}

/// 字数报告使用的宽松章节目录规则，按顺序尝试
fn report_dir_patterns() -> &'static [Regex; 3] {
    static REPORT_DIR_RES: OnceLock<[Regex; 3]> = OnceLock::new();
    REPORT_DIR_RES.get_or_init(|| {
        [
            Regex::new(r"^(?P<ch>[0-9]{2})-").expect("report dir pattern is valid"),
            Regex::new(r"(?i)^Chapter-(?P<ch>[0-9]{2})$").expect("report dir pattern is valid"),
            Regex::new(r"(?P<ch>[0-9]{2})").expect("report dir pattern is valid"),
        ]
    })
}

/// 解析章节目录名，不匹配则不是章节
pub fn match_chapter_dir(name: &str) -> Option<ChapterDirName> {
    let caps = chapter_dir_pattern().captures(name)?;
    Some(ChapterDirName {
        number: caps["num"].parse().ok()?,
        title: caps["title"].trim().to_string(),
    })
}

/// 宽松解析章节编号：`NN-...`、`Chapter-NN`，或名称中第一个两位数字
pub fn match_report_chapter_dir(name: &str) -> Option<u32> {
    report_dir_patterns()
        .iter()
        .find_map(|pattern| pattern.captures(name))
        .and_then(|caps| caps["ch"].parse().ok())
}

/// 章节 / 场景结构收集器
#[derive(Debug, Clone)]
pub struct StructureCollector {
    scene_pattern: Regex,
}

impl StructureCollector {
    /// 以场景文件扩展名（不含点）创建
    pub fn new(extension: &str) -> Self {
        let pattern = format!(
            r"(?i)^ch(?P<ch>[0-9]{{2}})-sc(?P<sc>[0-9]{{2}})\.{}$",
            regex::escape(extension)
        );
        Self {
            scene_pattern: Regex::new(&pattern).expect("escaped scene pattern is valid"),
        }
    }

    /// 解析场景文件名，不匹配则不是场景
    pub fn match_scene_file(&self, name: &str) -> Option<SceneFileName> {
        let caps = self.scene_pattern.captures(name)?;
        Some(SceneFileName {
            chapter_number: caps["ch"].parse().ok()?,
            scene_number: caps["sc"].parse().ok()?,
        })
    }

    /// 从根目录快照收集章节
    ///
    /// 章节按 (目录编号, 小写标题) 排序；场景按 (文件名章节号, 场景号, 文件名) 排序。
    /// 没有场景的章节也会保留，由组装阶段过滤。
    pub fn collect(&self, root_entries: &[SourceEntry]) -> Vec<Chapter> {
        let mut chapters: Vec<Chapter> = root_entries
            .iter()
            .filter(|entry| entry.is_dir())
            .filter_map(|entry| {
                let dir = match_chapter_dir(&entry.name)?;
                let scenes = self.scenes_in(entry);
                Some(Chapter::new(dir.number, dir.title, entry.path.clone()).with_scenes(scenes))
            })
            .collect();

        chapters.sort_by_cached_key(|chapter| (chapter.number(), chapter.title().to_lowercase()));
        chapters
    }

    /// 字数报告用：跨所有宽松匹配的章节目录收集场景并统一排序
    pub fn collect_scene_index(&self, root_entries: &[SourceEntry]) -> Vec<Scene> {
        let mut scenes: Vec<Scene> = root_entries
            .iter()
            .filter(|entry| entry.is_dir() && match_report_chapter_dir(&entry.name).is_some())
            .flat_map(|entry| self.scenes_in(entry))
            .collect();

        scenes.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        scenes
    }

    /// 目录下直接包含的场景文件
    fn scenes_in(&self, dir: &SourceEntry) -> Vec<Scene> {
        dir.children()
            .iter()
            .filter(|child| !child.is_dir())
            .filter_map(|child| {
                let name = self.match_scene_file(&child.name)?;
                Some(Scene::new(
                    name.chapter_number,
                    name.scene_number,
                    child.name.clone(),
                    child.path.clone(),
                ))
            })
            .collect()
    }
}

impl Default for StructureCollector {
    fn default() -> Self {
        Self::new(DEFAULT_SCENE_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter_dir(name: &str, files: &[&str]) -> SourceEntry {
        let dir = PathBuf::from("manuscript").join(name);
        let children = files
            .iter()
            .map(|file| SourceEntry::file(dir.join(file)))
            .collect();
        SourceEntry::directory(dir, children)
    }

    #[test]
    fn test_match_chapter_dir() {
        assert_eq!(
            match_chapter_dir("03-The Long Night "),
            Some(ChapterDirName {
                number: 3,
                title: "The Long Night".to_string()
            })
        );
        assert_eq!(match_chapter_dir("3-Short"), None);
        assert_eq!(match_chapter_dir("03-"), None);
        assert_eq!(match_chapter_dir("notes"), None);
        assert_eq!(match_chapter_dir("Chapter-03"), None);
    }

    #[test]
    fn test_match_scene_file() {
        let collector = StructureCollector::default();
        assert_eq!(
            collector.match_scene_file("ch02-sc10.md"),
            Some(SceneFileName {
                chapter_number: 2,
                scene_number: 10
            })
        );
        assert!(collector.match_scene_file("CH02-SC10.MD").is_some());
        assert!(collector.match_scene_file("ch02-sc10.txt").is_none());
        assert!(collector.match_scene_file("ch2-sc10.md").is_none());
        assert!(collector.match_scene_file("ch02-sc10.md.bak").is_none());
        assert!(collector.match_scene_file("notes.md").is_none());
    }

    #[test]
    fn test_custom_extension_is_escaped() {
        let collector = StructureCollector::new("txt");
        assert!(collector.match_scene_file("ch01-sc01.txt").is_some());
        assert!(collector.match_scene_file("ch01-sc01xtxt").is_none());
        assert!(collector.match_scene_file("ch01-sc01.md").is_none());
    }

    #[test]
    fn test_report_chapter_dir_patterns() {
        assert_eq!(match_report_chapter_dir("01-Opening"), Some(1));
        assert_eq!(match_report_chapter_dir("chapter-07"), Some(7));
        assert_eq!(match_report_chapter_dir("Part 12 draft"), Some(12));
        assert_eq!(match_report_chapter_dir("drafts"), None);
    }

    #[test]
    fn test_collect_orders_scenes_regardless_of_listing_order() {
        let entries = vec![chapter_dir("01-Start", &["ch01-sc02.md", "ch01-sc01.md"])];
        let chapters = StructureCollector::default().collect(&entries);

        assert_eq!(chapters.len(), 1);
        let names: Vec<&str> = chapters[0].scenes().iter().map(Scene::file_name).collect();
        assert_eq!(names, vec!["ch01-sc01.md", "ch01-sc02.md"]);
    }

    #[test]
    fn test_collect_orders_chapters_by_number_then_title() {
        let entries = vec![
            chapter_dir("02-beta", &[]),
            chapter_dir("10-Last", &[]),
            chapter_dir("02-Alpha", &[]),
            chapter_dir("01-First", &[]),
        ];
        let chapters = StructureCollector::default().collect(&entries);

        let titles: Vec<&str> = chapters.iter().map(Chapter::title).collect();
        assert_eq!(titles, vec!["First", "Alpha", "beta", "Last"]);
    }

    #[test]
    fn test_collect_ignores_non_matching_entries() {
        let entries = vec![
            SourceEntry::file("manuscript/header_material.md"),
            SourceEntry::file("manuscript/01-Not A Dir"),
            chapter_dir("notes", &["ch01-sc01.md"]),
            chapter_dir(
                "01-Start",
                &["ch01-sc01.md", "outline.md", "ch01-sc02.txt"],
            ),
        ];
        let chapters = StructureCollector::default().collect(&entries);

        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].scenes().len(), 1);
    }

    #[test]
    fn test_nested_directories_are_not_scenes() {
        let dir = PathBuf::from("manuscript/01-Start");
        let nested = SourceEntry::directory(dir.join("ch01-sc01.md"), Vec::new());
        let entries = vec![SourceEntry::directory(dir, vec![nested])];

        let chapters = StructureCollector::default().collect(&entries);
        assert!(chapters[0].scenes().is_empty());
    }

    #[test]
    fn test_empty_chapters_are_kept_at_collection() {
        let entries = vec![chapter_dir("01-Empty", &[])];
        let chapters = StructureCollector::default().collect(&entries);
        assert_eq!(chapters.len(), 1);
        assert!(chapters[0].scenes().is_empty());
    }

    #[test]
    fn test_scene_order_uses_filename_chapter_number_over_folder() {
        // 目录编号为 01，但文件名声明的章节号不同：排序以文件名为准
        let entries = vec![chapter_dir(
            "01-Start",
            &["ch02-sc01.md", "ch01-sc03.md"],
        )];
        let chapters = StructureCollector::default().collect(&entries);

        assert_eq!(chapters[0].number(), 1);
        let names: Vec<&str> = chapters[0].scenes().iter().map(Scene::file_name).collect();
        assert_eq!(names, vec!["ch01-sc03.md", "ch02-sc01.md"]);
        assert_eq!(chapters[0].scenes()[1].chapter_number(), 2);
    }

    #[test]
    fn test_collect_scene_index_spans_lenient_dirs() {
        let entries = vec![
            chapter_dir("Chapter-02", &["ch02-sc01.md"]),
            chapter_dir("01-Start", &["ch01-sc02.md", "ch01-sc01.md"]),
            chapter_dir("misc", &["ch09-sc09.md"]),
        ];
        let scenes = StructureCollector::default().collect_scene_index(&entries);

        let keys: Vec<(u32, u32)> = scenes
            .iter()
            .map(|s| (s.chapter_number(), s.scene_number()))
            .collect();
        assert_eq!(keys, vec![(1, 1), (1, 2), (2, 1)]);
    }
}
