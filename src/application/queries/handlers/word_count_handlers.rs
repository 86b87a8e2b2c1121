//! Word Count Query Handlers

use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::ManuscriptSourcePort;
use crate::application::queries::CountWords;
use crate::domain::count_words;
use crate::domain::manuscript::StructureCollector;

// ============================================================================
// Response DTOs
// ============================================================================

/// 单个场景的字数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneWordCount {
    pub chapter: u32,
    pub scene: u32,
    pub words: usize,
    pub path: PathBuf,
}

/// 单章字数（按场景文件名中的章节号分组）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterWordCount {
    pub chapter: u32,
    pub words: usize,
    pub scenes: Vec<SceneWordCount>,
}

/// 字数报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCountReport {
    pub chapters: Vec<ChapterWordCount>,
    pub total: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// CountWords Handler
pub struct CountWordsHandler {
    source: Arc<dyn ManuscriptSourcePort>,
}

impl CountWordsHandler {
    pub fn new(source: Arc<dyn ManuscriptSourcePort>) -> Self {
        Self { source }
    }

    pub fn handle(&self, query: CountWords) -> Result<WordCountReport, ApplicationError> {
        query.validate()?;

        if !self.source.is_directory(&query.root) {
            return Err(ApplicationError::RootMissing(query.root));
        }

        let entries = self.source.list_entries(&query.root)?;
        let scenes = StructureCollector::new(&query.extension).collect_scene_index(&entries);
        if scenes.is_empty() {
            return Err(ApplicationError::StructureNotFound(query.root));
        }

        // 场景已按 (章节号, 场景号, 文件名) 排序，相同章节号连续出现
        let mut chapters: Vec<ChapterWordCount> = Vec::new();
        for scene in &scenes {
            let text = self.source.read_text(scene.path())?;
            let count = SceneWordCount {
                chapter: scene.chapter_number(),
                scene: scene.scene_number(),
                words: count_words(&text),
                path: scene.path().to_path_buf(),
            };

            match chapters.last_mut() {
                Some(current) if current.chapter == count.chapter => {
                    current.words += count.words;
                    current.scenes.push(count);
                }
                _ => chapters.push(ChapterWordCount {
                    chapter: count.chapter,
                    words: count.words,
                    scenes: vec![count],
                }),
            }
        }

        let total: usize = chapters.iter().map(|c| c.words).sum();

        tracing::debug!(
            root = %query.root.display(),
            scenes = scenes.len(),
            total = total,
            "Word count report built"
        );

        Ok(WordCountReport { chapters, total })
    }
}
