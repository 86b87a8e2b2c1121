//! 元数据解析器
//!
//! 以显式状态机解析块内各行：
//! - ExpectingKey: 等待顶层 `key: value`
//! - InBlockScalar: 收集 `|` / `>` 之后的缩进行
//! - InList: 收集 `- item` 列表项
//!
//! 每个状态的迁移函数只看当前行，返回下一个状态以及当前行是否已被消费。

use super::value::{FrontMatter, MetadataValue, ParsedDocument};

/// 开始分隔符
const OPEN_DELIMITER: &str = "---";

/// 结束分隔符（两者均可）
const CLOSE_DELIMITERS: [&str; 2] = ["---", "..."];

/// 块标量指示符（折叠与字面量按同样方式处理）
const BLOCK_INDICATORS: [&str; 2] = ["|", ">"];

const LIST_MARKER: &str = "- ";

const BOM: char = '\u{feff}';

/// 定位开头的元数据块
///
/// 返回块内各行（已去除行尾换行符）与正文起始的字节偏移。
/// 首行不是分隔符或找不到结束分隔符时返回 None。
fn locate_block(text: &str) -> Option<(Vec<&str>, usize)> {
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_start_matches(BOM).trim() != OPEN_DELIMITER {
        return None;
    }

    let mut offset = first.len();
    let mut block = Vec::new();
    for line in lines {
        offset += line.len();
        if CLOSE_DELIMITERS.contains(&line.trim()) {
            return Some((block, offset));
        }
        block.push(line.trim_end_matches(['\n', '\r']));
    }

    None
}

/// 去除开头的元数据块，返回正文
///
/// 块未闭合时原样返回，绝不做部分剥离
pub fn strip_front_matter(text: &str) -> &str {
    match locate_block(text) {
        Some((_, offset)) => &text[offset..],
        None => text,
    }
}

/// 解析开头的元数据块
///
/// 纯函数，对任意输入都返回结果：
/// - 无开始分隔符 / 未闭合 → (None, 原文)
/// - 块内没有任何键 → (None, 正文)
pub fn parse_front_matter(text: &str) -> ParsedDocument {
    let Some((block, offset)) = locate_block(text) else {
        return ParsedDocument {
            metadata: None,
            body: text.to_string(),
        };
    };

    let lines: Vec<Line<'_>> = block.into_iter().map(Line::new).collect();
    let metadata = run(&lines);

    ParsedDocument {
        metadata: (!metadata.is_empty()).then_some(metadata),
        body: text[offset..].to_string(),
    }
}

/// 块内一行
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    text: &'a str,
    /// 行首空格数（制表符不计入缩进）
    indent: usize,
}

impl<'a> Line<'a> {
    fn new(text: &'a str) -> Self {
        let indent = text.len() - text.trim_start_matches(' ').len();
        Self { text, indent }
    }

    fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    fn content(&self) -> &'a str {
        self.text.trim()
    }

    /// 列表项内容（`- item` → `item`）
    fn list_item(&self) -> Option<&'a str> {
        self.content().strip_prefix(LIST_MARKER).map(str::trim)
    }

    /// 按基准缩进去除前导空格
    fn dedent(&self, base_indent: usize) -> &'a str {
        &self.text[base_indent.min(self.indent)..]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseState {
    ExpectingKey,
    InBlockScalar {
        key: String,
        /// 由块内第一个非空行惰性确定
        base_indent: Option<usize>,
        lines: Vec<String>,
    },
    InList {
        key: String,
        key_indent: usize,
        items: Vec<String>,
    },
}

/// 单步迁移结果
#[derive(Debug, PartialEq, Eq)]
enum Step {
    /// 当前行已消费，前进到下一行
    Consume(ParseState),
    /// 当前行未消费，以新状态重新处理
    Reprocess(ParseState),
}

fn run(lines: &[Line<'_>]) -> FrontMatter {
    let mut out = FrontMatter::new();
    let mut state = ParseState::ExpectingKey;
    let mut index = 0;

    while index < lines.len() {
        let line = lines[index];
        let step = match state {
            ParseState::ExpectingKey => expect_key(lines, index, &mut out),
            ParseState::InBlockScalar {
                key,
                base_indent,
                lines: collected,
            } => block_scalar_step(key, base_indent, collected, line, &mut out),
            ParseState::InList {
                key,
                key_indent,
                items,
            } => list_step(key, key_indent, items, line, &mut out),
        };

        state = match step {
            Step::Consume(next) => {
                index += 1;
                next
            }
            Step::Reprocess(next) => next,
        };
    }

    finish(state, &mut out);
    out
}

/// ExpectingKey：只接受零缩进、含冒号的行，其余行静默跳过
fn expect_key(lines: &[Line<'_>], index: usize, out: &mut FrontMatter) -> Step {
    let line = lines[index];
    if line.is_blank() || line.indent > 0 {
        return Step::Consume(ParseState::ExpectingKey);
    }

    let Some((key, value)) = line.content().split_once(':') else {
        return Step::Consume(ParseState::ExpectingKey);
    };
    let key = key.trim().to_string();
    let value = value.trim();

    if BLOCK_INDICATORS.contains(&value) {
        return Step::Consume(ParseState::InBlockScalar {
            key,
            base_indent: None,
            lines: Vec::new(),
        });
    }

    if value.is_empty() {
        if opens_list(&lines[index + 1..], line.indent) {
            return Step::Consume(ParseState::InList {
                key,
                key_indent: line.indent,
                items: Vec::new(),
            });
        }
        out.insert(key, MetadataValue::Scalar(String::new()));
        return Step::Consume(ParseState::ExpectingKey);
    }

    out.insert(key, MetadataValue::Scalar(unquote(value).to_string()));
    Step::Consume(ParseState::ExpectingKey)
}

/// 向前看：下一个非空行比键缩进更深且是列表项
fn opens_list(rest: &[Line<'_>], key_indent: usize) -> bool {
    rest.iter()
        .find(|line| !line.is_blank())
        .is_some_and(|line| line.indent > key_indent && line.list_item().is_some())
}

fn block_scalar_step(
    key: String,
    base_indent: Option<usize>,
    mut collected: Vec<String>,
    line: Line<'_>,
    out: &mut FrontMatter,
) -> Step {
    if line.is_blank() {
        collected.push(String::new());
        return Step::Consume(ParseState::InBlockScalar {
            key,
            base_indent,
            lines: collected,
        });
    }

    let base = base_indent.unwrap_or(line.indent);
    if line.indent < base {
        commit_block(key, collected, out);
        return Step::Reprocess(ParseState::ExpectingKey);
    }

    collected.push(line.dedent(base).to_string());
    Step::Consume(ParseState::InBlockScalar {
        key,
        base_indent: Some(base),
        lines: collected,
    })
}

fn list_step(
    key: String,
    key_indent: usize,
    mut items: Vec<String>,
    line: Line<'_>,
    out: &mut FrontMatter,
) -> Step {
    if line.is_blank() {
        return Step::Consume(ParseState::InList {
            key,
            key_indent,
            items,
        });
    }

    if line.indent > key_indent {
        if let Some(item) = line.list_item() {
            items.push(item.to_string());
            return Step::Consume(ParseState::InList {
                key,
                key_indent,
                items,
            });
        }
    }

    out.insert(key, MetadataValue::List(items));
    Step::Reprocess(ParseState::ExpectingKey)
}

/// 输入结束时提交未完成的块或列表
fn finish(state: ParseState, out: &mut FrontMatter) {
    match state {
        ParseState::ExpectingKey => {}
        ParseState::InBlockScalar { key, lines, .. } => commit_block(key, lines, out),
        ParseState::InList { key, items, .. } => out.insert(key, MetadataValue::List(items)),
    }
}

fn commit_block(key: String, lines: Vec<String>, out: &mut FrontMatter) {
    let joined = lines.join("\n");
    out.insert(
        key,
        MetadataValue::Block(joined.trim_end_matches('\n').to_string()),
    );
}

/// 去除一对相同的外层引号，单独一个引号视为空值
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.starts_with(quote) && value.ends_with(quote) {
            return value.get(1..value.len() - 1).unwrap_or("");
        }
    }
    value
}
