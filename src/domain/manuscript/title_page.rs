//! 扉页渲染
//!
//! 由 header 元数据生成扉页：
//! - 左侧联系信息块：作者、地址、电话、邮箱、字数
//! - 居中标题块：标题、副标题、署名
//! - 末尾固定追加 `hr` 章节分隔，与全局章节分隔配置无关

use super::ChapterBreakStyle;
use crate::domain::metadata::{FrontMatter, MetadataValue};

/// 覆盖计算字数的元数据键，按顺序取第一个非空值
const WORD_COUNT_KEYS: [&str; 2] = ["word_count", "approx_word_count"];

/// 渲染扉页
///
/// `computed_words` 仅在元数据没有提供字数时使用，按千位取整
pub fn render_title_page(metadata: &FrontMatter, computed_words: usize) -> String {
    let author = metadata.text("author");
    let title = metadata.text("title");
    let subtitle = metadata.text("subtitle");
    let email = metadata.text("email");
    let phone = metadata.text("phone");

    let word_count = WORD_COUNT_KEYS
        .iter()
        .find_map(|key| metadata.text(key))
        .map(str::to_string)
        .unwrap_or_else(|| approximate_word_count(computed_words));

    let mut contact: Vec<String> = Vec::new();
    contact.extend(author.map(str::to_string));
    contact.extend(address_lines(metadata));
    contact.extend(phone.map(str::to_string));
    contact.extend(email.map(str::to_string));
    contact.push(format!("Word Count: {}", word_count));

    let mut heading: Vec<String> = Vec::new();
    heading.extend(title.map(|t| format!("# {}", t)));
    heading.extend(subtitle.map(|s| format!("## {}", s)));
    heading.extend(author.map(|a| format!("by {}", a)));

    let mut page = String::new();
    for block in [contact, heading] {
        if !block.is_empty() {
            page.push_str(block.join("\n").trim());
            page.push_str("\n\n");
        }
    }
    page.push_str(ChapterBreakStyle::Rule.render());
    page
}

/// 地址行：显式 `address` 字段在前，结构化字段合成的行在后，两者都保留
fn address_lines(metadata: &FrontMatter) -> Vec<String> {
    let mut lines: Vec<String> = match metadata.get("address").and_then(MetadataValue::as_list) {
        Some(items) => items
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
        None => metadata.text("address").map(str::to_string).into_iter().collect(),
    };

    lines.extend(metadata.text("street").map(str::to_string));

    if let Some(city) = metadata.text("city") {
        let mut locality = city.to_string();
        if let Some(state) = metadata.text("state") {
            locality.push_str(", ");
            locality.push_str(state);
        }
        if let Some(postal) = metadata.text("postal_code").or_else(|| metadata.text("zip")) {
            locality.push(' ');
            locality.push_str(postal);
        }
        lines.push(locality);
    }

    lines.extend(metadata.text("country").map(str::to_string));
    lines
}

/// 近似字数：按千位四舍六入五成双，带千位分隔符
pub fn approximate_word_count(words: usize) -> String {
    let thousands = (words as f64 / 1000.0).round_ties_even() as u64;
    group_thousands(thousands * 1000)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn front_matter(pairs: &[(&str, MetadataValue)]) -> FrontMatter {
        let mut fm = FrontMatter::new();
        for (key, value) in pairs {
            fm.insert(*key, value.clone());
        }
        fm
    }

    fn scalar(s: &str) -> MetadataValue {
        MetadataValue::Scalar(s.to_string())
    }

    #[test]
    fn test_full_title_page() {
        let fm = front_matter(&[
            ("title", scalar("The Quiet Harbor")),
            ("subtitle", scalar("A Novel")),
            ("author", scalar("Jane Roe")),
            ("email", scalar("jane@example.com")),
            ("phone", scalar("555-0100")),
            ("street", scalar("1 Main St")),
            ("city", scalar("Springfield")),
            ("state", scalar("IL")),
            ("postal_code", scalar("62701")),
            ("country", scalar("USA")),
        ]);

        let page = render_title_page(&fm, 81_499);
        assert_eq!(
            page,
            "Jane Roe\n1 Main St\nSpringfield, IL 62701\nUSA\n555-0100\njane@example.com\nWord Count: 81,000\n\n\
             # The Quiet Harbor\n## A Novel\nby Jane Roe\n\n\
             \n\n<hr class=\"chapter-break\" />\n\n"
        );
    }

    #[test]
    fn test_word_count_override() {
        let fm = front_matter(&[
            ("approx_word_count", scalar("90,000")),
            ("word_count", scalar("  ")),
        ]);
        let page = render_title_page(&fm, 12);
        assert!(page.contains("Word Count: 90,000\n"));
    }

    #[test]
    fn test_explicit_and_structured_address_both_contribute() {
        let fm = front_matter(&[
            (
                "address",
                MetadataValue::List(vec!["PO Box 9".to_string(), " ".to_string()]),
            ),
            ("street", scalar("PO Box 9")),
            ("city", scalar("Dover")),
            ("zip", scalar("19901")),
        ]);

        assert_eq!(
            address_lines(&fm),
            vec!["PO Box 9", "PO Box 9", "Dover 19901"]
        );
    }

    #[test]
    fn test_scalar_address_and_no_city() {
        let fm = front_matter(&[
            ("address", scalar("12 Elm St, Nowhere")),
            ("state", scalar("ignored without city")),
        ]);
        assert_eq!(address_lines(&fm), vec!["12 Elm St, Nowhere"]);
    }

    #[test]
    fn test_title_block_omitted_when_empty() {
        let fm = front_matter(&[("email", scalar("a@b.c"))]);
        let page = render_title_page(&fm, 0);
        assert_eq!(
            page,
            "a@b.c\nWord Count: 0\n\n\n\n<hr class=\"chapter-break\" />\n\n"
        );
    }

    #[test]
    fn test_approximate_word_count_rounding() {
        assert_eq!(approximate_word_count(0), "0");
        assert_eq!(approximate_word_count(499), "0");
        assert_eq!(approximate_word_count(1_501), "2,000");
        assert_eq!(approximate_word_count(2_500), "2,000");
        assert_eq!(approximate_word_count(3_500), "4,000");
        assert_eq!(approximate_word_count(1_234_567), "1,235,000");
    }
}
