//! Storage Adapters - 文件系统读写

mod decode;
mod file_source;
mod file_writer;

pub use decode::{decode_text, DecodedText};
pub use file_source::FsManuscriptSource;
pub use file_writer::FsManuscriptWriter;
