//! Metadata Context - 前置元数据
//!
//! 职责:
//! - 识别文件开头的 `---` 元数据块
//! - 解析受限的 YAML 子集（单层标量 / 块标量 / 字符串列表）
//! - 分离元数据与正文
//!
//! 解析永不失败：任何不规则输入都退化为"无元数据"。

mod parser;
mod value;

pub use parser::{parse_front_matter, strip_front_matter};
pub use value::{FrontMatter, MetadataValue, ParsedDocument};
