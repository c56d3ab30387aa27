//! Plain-text summary rendering.

use crate::diff::{ChangeTag, DiffEntry, DiffResult};

/// Render a terminal-friendly summary of `result`.
///
/// Header lines carry the document labels, the similarity percentage, and
/// the aggregate counts; each non-unchanged entry then gets one line with a
/// `+`/`-`/`~` marker, its line number(s), the text, and any tags.
pub fn render_summary(result: &DiffResult, old_label: &str, new_label: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("Comparing {old_label} -> {new_label}\n"));
    out.push_str(&format!("Similarity: {:.1}%\n", result.similarity));
    out.push_str(&format!("Added lines: {}\n", result.added));
    out.push_str(&format!("Deleted lines: {}\n", result.deleted));
    out.push_str(&format!("Modified lines: {}\n", result.modified));

    if result.is_identical() {
        out.push_str("\nNo differences found.\n");
        return out;
    }

    out.push('\n');
    for entry in result.changes() {
        match entry {
            DiffEntry::Added { new_line, text } => {
                out.push_str(&format!("+ {new_line}: {text}\n"));
            }
            DiffEntry::Deleted { old_line, text } => {
                out.push_str(&format!("- {old_line}: {text}\n"));
            }
            DiffEntry::Modified {
                old_line,
                new_line,
                old_text,
                new_text,
                tags,
            } => {
                out.push_str(&format!(
                    "~ {old_line}->{new_line}: {old_text} => {new_text}{}\n",
                    tag_suffix(tags)
                ));
            }
            DiffEntry::Unchanged { .. } => {}
        }
    }

    out
}

fn tag_suffix(tags: &[ChangeTag]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let labels: Vec<&str> = tags.iter().map(|t| t.label()).collect();
    format!("  [{}]", labels.join(", "))
}
