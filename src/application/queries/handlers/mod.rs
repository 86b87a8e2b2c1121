//! Query Handlers 实现

mod word_count_handlers;

pub use word_count_handlers::*;
