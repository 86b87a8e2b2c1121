//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：字数报告

mod word_count_queries;

pub mod handlers;

pub use word_count_queries::*;
