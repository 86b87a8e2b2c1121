//! Manuscript Context - Value Objects
//!
//! 组装样式：章节标题、场景分隔符、章节分隔

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

use super::Chapter;

/// 章节标题样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingStyle {
    /// `# Chapter NN: Title`
    #[default]
    Title,
    /// `# Chapter NN`
    Number,
    /// 不输出标题
    None,
}

impl HeadingStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingStyle::Title => "title",
            HeadingStyle::Number => "number",
            HeadingStyle::None => "none",
        }
    }

    /// 渲染章节标题（含结尾空行）
    pub fn render(&self, chapter: &Chapter) -> String {
        match self {
            HeadingStyle::Title => format!("# {}: {}\n\n", chapter.label(), chapter.title()),
            HeadingStyle::Number => format!("# {}\n\n", chapter.label()),
            HeadingStyle::None => String::new(),
        }
    }
}

impl FromStr for HeadingStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(HeadingStyle::Title),
            "number" => Ok(HeadingStyle::Number),
            "none" => Ok(HeadingStyle::None),
            other => Err(format!(
                "unknown chapter heading style '{}' (expected title, number or none)",
                other
            )),
        }
    }
}

/// 场景分隔符
///
/// 命名样式之外的任何值都按字面量使用
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum SceneSeparator {
    /// `em` → `***`
    #[default]
    Emphasis,
    /// `hr` → `<hr class="scene-break" />`
    Rule,
    /// `none`
    None,
    Literal(String),
}

impl SceneSeparator {
    /// 渲染分隔符（含前后空行）
    pub fn render(&self) -> String {
        match self {
            SceneSeparator::Emphasis => "\n\n***\n\n".to_string(),
            SceneSeparator::Rule => "\n\n<hr class=\"scene-break\" />\n\n".to_string(),
            SceneSeparator::None => String::new(),
            SceneSeparator::Literal(text) => format!("\n\n{}\n\n", text),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SceneSeparator::Emphasis => "em",
            SceneSeparator::Rule => "hr",
            SceneSeparator::None => "none",
            SceneSeparator::Literal(text) => text,
        }
    }
}

impl From<&str> for SceneSeparator {
    fn from(value: &str) -> Self {
        match value {
            "em" => SceneSeparator::Emphasis,
            "hr" => SceneSeparator::Rule,
            "none" => SceneSeparator::None,
            literal => SceneSeparator::Literal(literal.to_string()),
        }
    }
}

impl From<String> for SceneSeparator {
    fn from(value: String) -> Self {
        SceneSeparator::from(value.as_str())
    }
}

impl FromStr for SceneSeparator {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SceneSeparator::from(s))
    }
}

/// 章节之间的分隔样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChapterBreakStyle {
    /// `<hr class="chapter-break" />`
    #[default]
    #[serde(rename = "hr")]
    Rule,
    /// `<!-- CHAPTER BREAK -->`
    #[serde(rename = "page")]
    Page,
    /// 只有空行
    #[serde(rename = "none")]
    None,
}

impl ChapterBreakStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChapterBreakStyle::Rule => "hr",
            ChapterBreakStyle::Page => "page",
            ChapterBreakStyle::None => "none",
        }
    }

    pub fn render(&self) -> &'static str {
        match self {
            ChapterBreakStyle::Rule => "\n\n<hr class=\"chapter-break\" />\n\n",
            ChapterBreakStyle::Page => "\n\n<!-- CHAPTER BREAK -->\n\n",
            ChapterBreakStyle::None => "\n\n",
        }
    }
}

impl FromStr for ChapterBreakStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hr" => Ok(ChapterBreakStyle::Rule),
            "page" => Ok(ChapterBreakStyle::Page),
            "none" => Ok(ChapterBreakStyle::None),
            other => Err(format!(
                "unknown chapter break style '{}' (expected hr, page or none)",
                other
            )),
        }
    }
}

/// 组装选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// 是否输出 header 文档的正文部分
    pub include_header_body: bool,
    /// 是否根据 header 元数据生成扉页
    pub include_title_page: bool,
    pub heading_style: HeadingStyle,
    pub scene_separator: SceneSeparator,
    pub chapter_break: ChapterBreakStyle,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            include_header_body: true,
            include_title_page: true,
            heading_style: HeadingStyle::default(),
            scene_separator: SceneSeparator::default(),
            chapter_break: ChapterBreakStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_styles() {
        let chapter = Chapter::new(7, "The Storm", "m/07-The Storm");
        assert_eq!(
            HeadingStyle::Title.render(&chapter),
            "# Chapter 07: The Storm\n\n"
        );
        assert_eq!(HeadingStyle::Number.render(&chapter), "# Chapter 07\n\n");
        assert_eq!(HeadingStyle::None.render(&chapter), "");
    }

    #[test]
    fn test_scene_separator_named_and_literal() {
        assert_eq!(SceneSeparator::from("em").render(), "\n\n***\n\n");
        assert_eq!(
            SceneSeparator::from("hr").render(),
            "\n\n<hr class=\"scene-break\" />\n\n"
        );
        assert_eq!(SceneSeparator::from("none").render(), "");
        assert_eq!(SceneSeparator::from("# # #").render(), "\n\n# # #\n\n");
        assert_eq!(SceneSeparator::from("# # #").as_str(), "# # #");
    }

    #[test]
    fn test_chapter_break_parse() {
        assert_eq!("page".parse::<ChapterBreakStyle>(), Ok(ChapterBreakStyle::Page));
        assert!("pagebreak".parse::<ChapterBreakStyle>().is_err());
        assert_eq!(ChapterBreakStyle::None.render(), "\n\n");
    }

    #[test]
    fn test_heading_parse_roundtrips_names() {
        for style in [HeadingStyle::Title, HeadingStyle::Number, HeadingStyle::None] {
            assert_eq!(style.as_str().parse::<HeadingStyle>(), Ok(style));
        }
        assert!("Title".parse::<HeadingStyle>().is_err());
    }
}
