//! 手稿组装
//!
//! 组装策略:
//! 1. 逐章渲染：标题 + 去除元数据并修剪后的非空场景，场景之间插入分隔符
//! 2. 没有任何非空场景的章节整体省略
//! 3. 可选扉页与 header 正文置于最前
//! 4. 章节之间插入章节分隔
//!
//! 场景内容通过调用方提供的加载函数按需读取。

use super::title_page::render_title_page;
use super::{Chapter, CompileOptions, Scene};
use crate::domain::metadata::{parse_front_matter, strip_front_matter, FrontMatter};
use crate::domain::word_counter::count_tokens;

/// header 文档：元数据 + 正文
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMaterial {
    pub metadata: Option<FrontMatter>,
    pub body: String,
}

impl HeaderMaterial {
    pub fn from_text(text: &str) -> Self {
        let parsed = parse_front_matter(text);
        Self {
            metadata: parsed.metadata,
            body: parsed.body,
        }
    }
}

/// 组装结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledManuscript {
    pub document: String,
    /// 仅统计场景正文，不含标题、扉页与 header 正文
    pub total_words: usize,
    pub chapters_emitted: usize,
    pub scenes_emitted: usize,
}

/// 单章渲染结果
struct RenderedChapter {
    text: String,
    words: usize,
    scenes: usize,
}

/// 手稿组装器
pub struct ManuscriptAssembler<'a> {
    options: &'a CompileOptions,
}

impl<'a> ManuscriptAssembler<'a> {
    pub fn new(options: &'a CompileOptions) -> Self {
        Self { options }
    }

    /// 组装完整文档
    ///
    /// `load_scene` 读取场景原文；其错误原样向上传递
    pub fn compile<F, E>(
        &self,
        chapters: &[Chapter],
        header: &HeaderMaterial,
        mut load_scene: F,
    ) -> Result<CompiledManuscript, E>
    where
        F: FnMut(&Scene) -> Result<String, E>,
    {
        let mut blocks: Vec<String> = Vec::new();
        let mut total_words = 0;
        let mut scenes_emitted = 0;

        for chapter in chapters {
            if let Some(rendered) = self.render_chapter(chapter, &mut load_scene)? {
                total_words += rendered.words;
                scenes_emitted += rendered.scenes;
                blocks.push(rendered.text);
            }
        }

        let mut document = String::new();

        if self.options.include_title_page {
            if let Some(metadata) = &header.metadata {
                document.push_str(&render_title_page(metadata, total_words));
            }
        }

        if self.options.include_header_body {
            let body = header.body.trim();
            if !body.is_empty() {
                document.push_str(body);
                document.push_str("\n\n");
            }
        }

        for (index, block) in blocks.iter().enumerate() {
            if index > 0 {
                document.push_str(self.options.chapter_break.render());
            }
            document.push_str(block);
        }

        Ok(CompiledManuscript {
            document: format!("{}\n", document.trim()),
            total_words,
            chapters_emitted: blocks.len(),
            scenes_emitted,
        })
    }

    fn render_chapter<F, E>(
        &self,
        chapter: &Chapter,
        load_scene: &mut F,
    ) -> Result<Option<RenderedChapter>, E>
    where
        F: FnMut(&Scene) -> Result<String, E>,
    {
        let mut body = String::new();
        let mut words = 0;
        let mut scenes = 0;

        for scene in chapter.scenes() {
            let text = load_scene(scene)?;
            let content = strip_front_matter(&text).trim();
            if content.is_empty() {
                continue;
            }

            if scenes > 0 {
                body.push_str(&self.options.scene_separator.render());
            }
            body.push_str(content);
            body.push_str("\n\n");
            words += count_tokens(content);
            scenes += 1;
        }

        if scenes == 0 {
            return Ok(None);
        }

        let mut text = self.options.heading_style.render(chapter);
        text.push_str(&body);
        Ok(Some(RenderedChapter {
            text,
            words,
            scenes,
        }))
    }
}
