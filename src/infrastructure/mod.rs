//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现，以及命令行入口

pub mod adapters;
pub mod cli;
pub mod memory;

pub use adapters::{FsManuscriptSource, FsManuscriptWriter};
pub use memory::{InMemoryManuscriptSource, InMemoryManuscriptWriter};
