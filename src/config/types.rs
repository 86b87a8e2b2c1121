//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::manuscript::{
    ChapterBreakStyle, CompileOptions, HeadingStyle, SceneSeparator, DEFAULT_SCENE_EXTENSION,
};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 手稿来源
    #[serde(default)]
    pub source: SourceConfig,

    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,

    /// 组装样式
    #[serde(default)]
    pub compile: CompileConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 手稿来源配置
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// 手稿根目录
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// 场景与 header 文件扩展名（不含点）
    #[serde(default = "default_extension")]
    pub extension: String,

    /// header 文件名（不含扩展名）
    #[serde(default = "default_header_file")]
    pub header_file: String,
}

fn default_root() -> PathBuf {
    PathBuf::from("manuscript")
}

fn default_extension() -> String {
    DEFAULT_SCENE_EXTENSION.to_string()
}

fn default_header_file() -> String {
    "header_material".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extension: default_extension(),
            header_file: default_header_file(),
        }
    }
}

/// 输出配置
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("output/full_manuscript.md")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

/// 组装样式配置
#[derive(Debug, Clone, Deserialize)]
pub struct CompileConfig {
    /// 输出 header 正文
    #[serde(default = "default_true")]
    pub include_header: bool,

    /// 生成扉页
    #[serde(default = "default_true")]
    pub title_page: bool,

    #[serde(default)]
    pub chapter_heading: HeadingStyle,

    /// `em` / `hr` / `none`，其他值按字面量使用
    #[serde(default)]
    pub scene_separator: SceneSeparator,

    #[serde(default)]
    pub chapter_break: ChapterBreakStyle,
}

fn default_true() -> bool {
    true
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            include_header: true,
            title_page: true,
            chapter_heading: HeadingStyle::default(),
            scene_separator: SceneSeparator::default(),
            chapter_break: ChapterBreakStyle::default(),
        }
    }
}

impl CompileConfig {
    pub fn to_options(&self) -> CompileOptions {
        CompileOptions {
            include_header_body: self.include_header,
            include_title_page: self.title_page,
            heading_style: self.chapter_heading,
            scene_separator: self.scene_separator.clone(),
            chapter_break: self.chapter_break,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
