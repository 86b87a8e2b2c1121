//! Metadata Context - Value Objects

use std::collections::BTreeMap;

/// 元数据值
///
/// 只支持三种形态，不支持嵌套
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    /// 单行标量（已去除一对外层引号）
    Scalar(String),
    /// 块标量（`|` 或 `>`），按换行拼接，去除末尾空行
    Block(String),
    /// 字符串列表（`- item`）
    List(Vec<String>),
}

impl MetadataValue {
    /// 作为文本读取（Scalar 与 Block 都视为文本）
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Scalar(s) | MetadataValue::Block(s) => Some(s),
            MetadataValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            MetadataValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// 解析后的元数据映射
///
/// 不变量:
/// - 键唯一，重复键以最后一次出现为准
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    entries: BTreeMap<String, MetadataValue>,
}

impl FrontMatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入键值（覆盖已有同名键）
    pub fn insert(&mut self, key: impl Into<String>, value: MetadataValue) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries.get(key)
    }

    /// 读取文本字段：去除首尾空白，空字符串视为缺失
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(MetadataValue::as_text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 解析结果：可选元数据 + 剩余正文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    /// None 表示"没有元数据"（无分隔符、未闭合、或块内没有任何键）
    pub metadata: Option<FrontMatter>,
    pub body: String,
}
