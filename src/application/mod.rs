//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ManuscriptSource、ManuscriptWriter）
//! - commands: CQRS 命令及处理器（编译手稿）
//! - queries: CQRS 查询及处理器（字数报告）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{handlers::CompileManuscriptHandler, handlers::CompileManuscriptResponse, CompileManuscript};

pub use error::ApplicationError;

pub use ports::{ManuscriptSourcePort, ManuscriptWriterPort, SourceError, WriteError};

pub use queries::{
    handlers::{ChapterWordCount, CountWordsHandler, SceneWordCount, WordCountReport},
    CountWords,
};
