//! Self-contained HTML report rendering.
//!
//! One buffer, embedded stylesheet, no external assets. Output is fully
//! determined by the `DiffResult` and the two labels; rendering the same
//! result twice produces identical bytes.

use crate::diff::{ChangeTag, DiffEntry, DiffResult};

const STYLE: &str = "\
body { font-family: Arial, sans-serif; background: #f5f5f5; color: #333; margin: 0; padding: 20px; }
h1 { color: #2c3e50; }
section { background: #fff; border-radius: 8px; padding: 15px 20px; margin-bottom: 20px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
table { width: 100%; border-collapse: collapse; margin-top: 10px; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; vertical-align: top; }
th { background: #3498db; color: #fff; }
tr.added td { background: #e6ffed; }
tr.deleted td { background: #ffeef0; }
tr.modified td { background: #fff8c5; }
span.tag { background: #3498db; color: #fff; border-radius: 4px; padding: 1px 6px; margin-left: 4px; font-size: 0.85em; }
td.num { width: 4em; white-space: nowrap; }";

/// Render `result` as a single standalone HTML document.
pub fn render_html(result: &DiffResult, old_label: &str, new_label: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\" />\n<title>Document Comparison Report</title>\n");
    out.push_str(&format!("<style>\n{STYLE}\n</style>\n</head>\n<body>\n"));
    out.push_str("<h1>Document Comparison Report</h1>\n");

    out.push_str("<section>\n");
    out.push_str(&format!(
        "<p><strong>Old:</strong> {} | <strong>New:</strong> {}</p>\n",
        escape(old_label),
        escape(new_label)
    ));
    out.push_str(&format!(
        "<p><strong>Similarity:</strong> {:.1}%</p>\n",
        result.similarity
    ));
    out.push_str(&format!(
        "<p><strong>Added:</strong> {} | <strong>Deleted:</strong> {} | <strong>Modified:</strong> {} | <strong>Unchanged:</strong> {}</p>\n",
        result.added, result.deleted, result.modified, result.unchanged
    ));
    out.push_str("</section>\n");

    if result.is_identical() {
        out.push_str("<section><p>No differences found.</p></section>\n");
    } else {
        out.push_str("<section>\n<h3>Changed Lines</h3>\n<table>\n<thead>\n");
        out.push_str(
            "<tr><th>Old</th><th>New</th><th>Change</th><th>Text</th><th>Tags</th></tr>\n",
        );
        out.push_str("</thead>\n<tbody>\n");
        for entry in result.changes() {
            out.push_str(&entry_row(entry));
        }
        out.push_str("</tbody>\n</table>\n</section>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn entry_row(entry: &DiffEntry) -> String {
    match entry {
        DiffEntry::Added { new_line, text } => format!(
            "<tr class=\"added\"><td class=\"num\"></td><td class=\"num\">{new_line}</td><td>added</td><td>{}</td><td></td></tr>\n",
            escape(text)
        ),
        DiffEntry::Deleted { old_line, text } => format!(
            "<tr class=\"deleted\"><td class=\"num\">{old_line}</td><td class=\"num\"></td><td>deleted</td><td>{}</td><td></td></tr>\n",
            escape(text)
        ),
        DiffEntry::Modified {
            old_line,
            new_line,
            old_text,
            new_text,
            tags,
        } => format!(
            "<tr class=\"modified\"><td class=\"num\">{old_line}</td><td class=\"num\">{new_line}</td><td>modified</td><td>{} &rarr; {}</td><td>{}</td></tr>\n",
            escape(old_text),
            escape(new_text),
            tag_badges(tags)
        ),
        DiffEntry::Unchanged { .. } => String::new(),
    }
}

fn tag_badges(tags: &[ChangeTag]) -> String {
    tags.iter()
        .map(|tag| format!("<span class=\"tag\">{}</span>", tag.label()))
        .collect::<Vec<_>>()
        .join("")
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
