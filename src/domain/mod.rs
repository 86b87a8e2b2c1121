//! Domain Layer - 领域层
//!
//! 包含:
//! - Metadata: front matter 解析
//! - Manuscript Context: 章节结构与手稿组装
//! - 字数统计
//!
//! 领域层只处理内存中的文本与目录快照，不做 I/O，也不记录日志。

pub mod manuscript;
pub mod metadata;

mod word_counter;

pub use word_counter::{count_tokens, count_words};
