//! Manuscript Context - Entities

use std::path::{Path, PathBuf};

/// 场景 - 最小内容单位，对应一个文件
///
/// 不变量:
/// - 收集后不可变
/// - 内容在组装时才读取
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    /// 文件名中的章节编号（可能与所在目录的编号不一致）
    chapter_number: u32,
    /// 文件名中的场景编号
    scene_number: u32,
    file_name: String,
    path: PathBuf,
}

impl Scene {
    pub fn new(
        chapter_number: u32,
        scene_number: u32,
        file_name: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            chapter_number,
            scene_number,
            file_name: file_name.into(),
            path: path.into(),
        }
    }

    pub fn chapter_number(&self) -> u32 {
        self.chapter_number
    }

    pub fn scene_number(&self) -> u32 {
        self.scene_number
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 排序键：(文件名章节号, 场景号, 文件名)
    pub(crate) fn sort_key(&self) -> (u32, u32, &str) {
        (self.chapter_number, self.scene_number, &self.file_name)
    }
}

/// 章节 - 对应一个 `NN-Title` 目录
///
/// 不变量:
/// - scenes 已按场景排序键排好
/// - 没有有效场景的章节在组装阶段才被丢弃，收集阶段保留
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    number: u32,
    title: String,
    path: PathBuf,
    scenes: Vec<Scene>,
}

impl Chapter {
    pub fn new(number: u32, title: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            number,
            title: title.into(),
            path: path.into(),
            scenes: Vec::new(),
        }
    }

    /// 挂载场景并排序
    pub fn with_scenes(mut self, mut scenes: Vec<Scene>) -> Self {
        scenes.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        self.scenes = scenes;
        self
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// 章节标签，如 `Chapter 03`
    pub fn label(&self) -> String {
        format!("Chapter {:02}", self.number)
    }
}
