//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod manuscript_source;
mod manuscript_writer;

pub use manuscript_source::{ManuscriptSourcePort, SourceError};
pub use manuscript_writer::{ManuscriptWriterPort, WriteError};
