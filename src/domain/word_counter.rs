//! 字数统计
//!
//! 以 `\b[\w']+\b` 为一个词：字母、数字、下划线与撇号的连续片段。
//! 不做任何本地化归一、去重或词干处理。

use regex::Regex;
use std::sync::OnceLock;

use crate::domain::metadata::strip_front_matter;

fn word_pattern() -> &'static Regex {
    static WORD_RE: OnceLock<Regex> = OnceLock::new();
    WORD_RE.get_or_init(|| Regex::new(r"\b[\w']+\b").expect("word pattern is valid"))
}

/// 统计文本中的词数（不剥离元数据）
pub fn count_tokens(text: &str) -> usize {
    word_pattern().find_iter(text).count()
}

/// 统计文本词数，先剥离开头的元数据块
///
/// 可独立调用，调用方无需先解析元数据
pub fn count_words(text: &str) -> usize {
    count_tokens(strip_front_matter(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contractions_are_single_words() {
        assert_eq!(count_words("The cat's toy, it's here."), 5);
    }

    #[test]
    fn test_front_matter_excluded() {
        let text = "---\ntitle: Many Many Words Here\ntags:\n  - a\n---\nOnly three words.";
        assert_eq!(count_words(text), 3);
        assert_eq!(count_tokens(text), 10);
    }

    #[test]
    fn test_unclosed_front_matter_counts_everything() {
        assert_eq!(count_words("---\ntitle: x\nbody"), 3);
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("  -- ... !!  \n"), 0);
    }

    #[test]
    fn test_digits_underscores_and_unicode() {
        assert_eq!(count_words("snake_case 1984 café naïve"), 4);
        assert_eq!(count_words("well-known"), 2);
    }
}
