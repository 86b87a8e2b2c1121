//! Memory Layer - In-Memory Adapters
//!
//! 手稿源与写出器的内存实现，供测试与嵌入使用

mod manuscript_source;
mod manuscript_writer;

pub use manuscript_source::InMemoryManuscriptSource;
pub use manuscript_writer::InMemoryManuscriptWriter;
