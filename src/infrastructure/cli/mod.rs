//! CLI - 入站适配器
//!
//! 命令行参数解析与报告输出

mod args;
mod report;

pub use args::{Cli, Commands, CompileArgs, CountArgs};
pub use report::{render_json, render_text};
