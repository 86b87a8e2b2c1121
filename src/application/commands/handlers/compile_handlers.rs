//! Compile Command Handlers

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::commands::CompileManuscript;
use crate::application::error::ApplicationError;
use crate::application::ports::{ManuscriptSourcePort, ManuscriptWriterPort};
use crate::domain::manuscript::{HeaderMaterial, ManuscriptAssembler, StructureCollector};

/// 编译结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileManuscriptResponse {
    pub output: PathBuf,
    /// 场景正文总词数
    pub total_words: usize,
    pub chapters: usize,
    pub scenes: usize,
}

/// CompileManuscript Handler
///
/// 流程：检查根目录 → 收集结构 → 读取 header → 组装 → 写出。
/// 任何致命错误都发生在写出之前。
pub struct CompileManuscriptHandler {
    source: Arc<dyn ManuscriptSourcePort>,
    writer: Arc<dyn ManuscriptWriterPort>,
}

impl CompileManuscriptHandler {
    pub fn new(source: Arc<dyn ManuscriptSourcePort>, writer: Arc<dyn ManuscriptWriterPort>) -> Self {
        Self { source, writer }
    }

    pub fn handle(&self, command: CompileManuscript) -> Result<CompileManuscriptResponse, ApplicationError> {
        command.validate()?;

        if !self.source.is_directory(&command.root) {
            return Err(ApplicationError::RootMissing(command.root));
        }

        let entries = self.source.list_entries(&command.root)?;
        let chapters = StructureCollector::new(&command.extension).collect(&entries);
        if chapters.is_empty() {
            return Err(ApplicationError::StructureNotFound(command.root));
        }

        tracing::debug!(
            root = %command.root.display(),
            chapters = chapters.len(),
            "Manuscript structure collected"
        );

        let header_path = command.header_path();
        let header = match self.source.read_optional_text(&header_path)? {
            Some(text) => {
                tracing::debug!(path = %header_path.display(), "Header material loaded");
                HeaderMaterial::from_text(&text)
            }
            None => HeaderMaterial::default(),
        };

        let compiled = ManuscriptAssembler::new(&command.options).compile(&chapters, &header, |scene| {
            self.source.read_text(scene.path())
        })?;

        self.writer.write(&command.output, &compiled.document)?;

        tracing::info!(
            output = %command.output.display(),
            chapters = compiled.chapters_emitted,
            scenes = compiled.scenes_emitted,
            words = compiled.total_words,
            "Wrote: {}",
            command.output.display()
        );

        Ok(CompileManuscriptResponse {
            output: command.output,
            total_words: compiled.total_words,
            chapters: compiled.chapters_emitted,
            scenes: compiled.scenes_emitted,
        })
    }
}
