//! 命令行参数定义

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::domain::manuscript::{ChapterBreakStyle, HeadingStyle, SceneSeparator};

#[derive(Debug, Parser)]
#[command(
    name = "quire",
    version,
    about = "Compile chapter folders of scene files into a single manuscript"
)]
pub struct Cli {
    #[arg(long, global = true, value_name = "PATH", help = "Configuration file (TOML)")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Assemble the manuscript and write it to the output file")]
    Compile(CompileArgs),
    #[command(about = "Report word counts by scene and chapter")]
    Count(CountArgs),
}

#[derive(Debug, Args)]
pub struct CompileArgs {
    #[arg(long, help = "Manuscript root directory")]
    pub root: Option<PathBuf>,

    #[arg(long, short, help = "Output file path")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Omit the header material body")]
    pub no_header: bool,

    #[arg(long, help = "Omit the title page")]
    pub no_title_page: bool,

    #[arg(long, value_name = "STYLE", help = "Chapter heading style (title, number, none)")]
    pub chapter_heading: Option<HeadingStyle>,

    #[arg(
        long = "scene-sep",
        value_name = "SEP",
        help = "Scene separator (em, hr, none, or literal text)"
    )]
    pub scene_separator: Option<SceneSeparator>,

    #[arg(long, value_name = "STYLE", help = "Chapter break style (hr, page, none)")]
    pub chapter_break: Option<ChapterBreakStyle>,
}

impl CompileArgs {
    /// 命令行参数覆盖配置
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(root) = &self.root {
            config.source.root = root.clone();
        }
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if self.no_header {
            config.compile.include_header = false;
        }
        if self.no_title_page {
            config.compile.title_page = false;
        }
        if let Some(style) = self.chapter_heading {
            config.compile.chapter_heading = style;
        }
        if let Some(separator) = &self.scene_separator {
            config.compile.scene_separator = separator.clone();
        }
        if let Some(style) = self.chapter_break {
            config.compile.chapter_break = style;
        }
    }
}

#[derive(Debug, Args)]
pub struct CountArgs {
    #[arg(long, help = "Manuscript root directory")]
    pub root: Option<PathBuf>,

    #[arg(long, help = "Show file paths in scene output")]
    pub show_paths: bool,

    #[arg(long, help = "Emit the report as JSON")]
    pub json: bool,
}

impl CountArgs {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(root) = &self.root {
            config.source.root = root.clone();
        }
    }
}
