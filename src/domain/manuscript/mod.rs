//! Manuscript Context - 手稿限界上下文
//!
//! 职责:
//! - 章节目录与场景文件识别
//! - 扉页渲染
//! - 按样式组装完整手稿

mod assembler;
mod entities;
mod structure;
mod title_page;
mod value_objects;

pub use assembler::{CompiledManuscript, HeaderMaterial, ManuscriptAssembler};
pub use entities::{Chapter, Scene};
pub use structure::{
    match_chapter_dir, match_report_chapter_dir, ChapterDirName, EntryKind, SceneFileName,
    SourceEntry, StructureCollector, DEFAULT_SCENE_EXTENSION,
};
pub use title_page::{approximate_word_count, render_title_page};
pub use value_objects::{ChapterBreakStyle, CompileOptions, HeadingStyle, SceneSeparator};
