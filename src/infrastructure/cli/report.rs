//! 字数报告输出

use std::fmt::Write;

use crate::application::WordCountReport;

/// 文本格式报告
pub fn render_text(report: &WordCountReport, show_paths: bool) -> String {
    let mut out = String::from("Scene counts:\n");

    for chapter in &report.chapters {
        for scene in &chapter.scenes {
            let _ = write!(
                out,
                "Chapter {:02} / Scene {:02}: {}",
                scene.chapter, scene.scene, scene.words
            );
            if show_paths {
                let _ = write!(out, "  -  {}", scene.path.display());
            }
            out.push('\n');
        }
        let _ = writeln!(out, "Chapter {:02} total: {}\n", chapter.chapter, chapter.words);
    }

    let _ = writeln!(out, "Manuscript total: {}", report.total);
    out
}

/// JSON 格式报告
pub fn render_json(report: &WordCountReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ChapterWordCount, SceneWordCount};
    use std::path::PathBuf;

    fn report() -> WordCountReport {
        let scenes = vec![
            SceneWordCount {
                chapter: 1,
                scene: 1,
                words: 120,
                path: PathBuf::from("manuscript/01-Start/ch01-sc01.md"),
            },
            SceneWordCount {
                chapter: 1,
                scene: 2,
                words: 80,
                path: PathBuf::from("manuscript/01-Start/ch01-sc02.md"),
            },
        ];
        WordCountReport {
            chapters: vec![ChapterWordCount {
                chapter: 1,
                words: 200,
                scenes,
            }],
            total: 200,
        }
    }

    #[test]
    fn test_text_report() {
        assert_eq!(
            render_text(&report(), false),
            "Scene counts:\n\
             Chapter 01 / Scene 01: 120\n\
             Chapter 01 / Scene 02: 80\n\
             Chapter 01 total: 200\n\n\
             Manuscript total: 200\n"
        );
    }

    #[test]
    fn test_text_report_with_paths() {
        let text = render_text(&report(), true);
        assert!(text.contains("Chapter 01 / Scene 02: 80  -  manuscript/01-Start/ch01-sc02.md\n"));
    }

    #[test]
    fn test_json_report() {
        let json = render_json(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total"], 200);
        assert_eq!(value["chapters"][0]["scenes"][1]["words"], 80);
        assert_eq!(
            value["chapters"][0]["scenes"][0]["path"],
            "manuscript/01-Start/ch01-sc01.md"
        );
    }
}
