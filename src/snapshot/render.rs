//! Renders a snapshot into the output document format.

use chrono::SecondsFormat;

use super::Snapshot;

/// Title line opening every snapshot document.
const TITLE: &str = "PROJECT SNAPSHOT";

/// Renders the snapshot as a single document string.
///
/// Layout: a three-line header (title, generation timestamp, file count),
/// a blank line, then one fenced block per file. Each file's contents are
/// trimmed of trailing whitespace and given exactly one trailing newline,
/// so an unchanged tree always renders byte-identically modulo the
/// `Generated:` line.
#[must_use]
pub fn render(snapshot: &Snapshot) -> String {
    let mut doc = String::new();
    doc.push_str(TITLE);
    doc.push('\n');
    doc.push_str(&format!(
        "Generated: {}\n",
        snapshot.generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    ));
    doc.push_str(&format!("Files: {}\n\n", snapshot.blocks.len()));

    for block in &snapshot.blocks {
        doc.push_str(&format!("===== FILE: {} =====\n", block.path));
        doc.push_str(&format!("```{}\n", block.language));
        doc.push_str(block.content.trim_end());
        doc.push('\n');
        doc.push_str("```\n\n");
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::FileBlock;
    use chrono::{DateTime, Utc};

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn renders_header_and_blocks() {
        let snapshot = Snapshot {
            generated_at: at("2025-06-15T10:00:00Z"),
            blocks: vec![
                FileBlock { path: "a.js".into(), language: "js".into(), content: "x".into() },
                FileBlock {
                    path: "sub/c.py".into(),
                    language: "py".into(),
                    content: "y\n".into(),
                },
            ],
        };

        let doc = render(&snapshot);
        assert_eq!(
            doc,
            "PROJECT SNAPSHOT\n\
             Generated: 2025-06-15T10:00:00.000Z\n\
             Files: 2\n\
             \n\
             ===== FILE: a.js =====\n\
             ```js\n\
             x\n\
             ```\n\
             \n\
             ===== FILE: sub/c.py =====\n\
             ```py\n\
             y\n\
             ```\n\
             \n"
        );
    }

    #[test]
    fn trailing_whitespace_is_trimmed_to_one_newline() {
        let snapshot = Snapshot {
            generated_at: at("2025-06-15T10:00:00Z"),
            blocks: vec![FileBlock {
                path: "a.rs".into(),
                language: "rs".into(),
                content: "fn main() {}\n\n\n   \n".into(),
            }],
        };

        let doc = render(&snapshot);
        assert!(doc.contains("fn main() {}\n```\n"));
    }

    #[test]
    fn empty_tree_renders_header_only() {
        let snapshot = Snapshot { generated_at: at("2025-06-15T10:00:00Z"), blocks: vec![] };
        let doc = render(&snapshot);
        assert_eq!(doc, "PROJECT SNAPSHOT\nGenerated: 2025-06-15T10:00:00.000Z\nFiles: 0\n\n");
    }

    #[test]
    fn file_without_extension_gets_bare_fence() {
        let snapshot = Snapshot {
            generated_at: at("2025-06-15T10:00:00Z"),
            blocks: vec![FileBlock {
                path: "Makefile".into(),
                language: String::new(),
                content: "all:\n".into(),
            }],
        };
        let doc = render(&snapshot);
        assert!(doc.contains("===== FILE: Makefile =====\n```\nall:\n```\n"));
    }
}
