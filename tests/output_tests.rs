use doc_diff::{
    compare, diff_result_from_json, render, render_html, render_summary, serialize_diff_result,
    DiffConfig, RenderMode,
};
use serde_json::Value;

fn invoice_result() -> doc_diff::DiffResult {
    let old = "Invoice #001\nDate: 2025-01-01\nTotal: $100";
    let new = "Invoice #001\nDate: 2025-01-02\nTotal: $150";
    compare(old, new, &DiffConfig::default())
}

#[test]
fn summary_lists_header_and_markers() {
    let result = invoice_result();
    let summary = render_summary(&result, "old.pdf", "new.pdf");

    assert!(summary.starts_with("Comparing old.pdf -> new.pdf\n"));
    assert!(summary.contains("Similarity: 33.3%\n"));
    assert!(summary.contains("Added lines: 0\n"));
    assert!(summary.contains("Deleted lines: 0\n"));
    assert!(summary.contains("Modified lines: 2\n"));
    assert!(summary.contains("~ 2->2: Date: 2025-01-01 => Date: 2025-01-02  [date]\n"));
    assert!(summary.contains("~ 3->3: Total: $100 => Total: $150  [currency]\n"));
}

#[test]
fn summary_shows_added_and_deleted_markers() {
    let result = compare("A\nB\nC", "A\nC\nD", &DiffConfig::default());
    let summary = render_summary(&result, "a", "b");

    assert!(summary.contains("- 2: B\n"));
    assert!(summary.contains("+ 3: D\n"));
}

#[test]
fn summary_reports_identical_documents() {
    let result = compare("same\ntext", "same\ntext", &DiffConfig::default());
    let summary = render_summary(&result, "a", "b");

    assert!(summary.contains("Similarity: 100.0%\n"));
    assert!(summary.contains("No differences found.\n"));
    assert!(!summary.contains('~'));
}

#[test]
fn html_report_is_standalone_and_deterministic() {
    let result = invoice_result();
    let first = render_html(&result, "old.pdf", "new.pdf");
    let second = render_html(&result, "old.pdf", "new.pdf");

    assert_eq!(first, second);
    assert!(first.starts_with("<!DOCTYPE html>"));
    assert!(first.ends_with("</html>\n"));
    assert!(first.contains("<style>"));
    assert!(first.contains("old.pdf"));
    assert!(first.contains("new.pdf"));
    assert!(first.contains("<strong>Similarity:</strong> 33.3%"));
}

#[test]
fn html_escapes_document_content() {
    let result = compare("", "<script>alert('x')</script>", &DiffConfig::default());
    let html = render_html(&result, "a", "<b>b</b>");

    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    assert!(html.contains("&lt;b&gt;b&lt;/b&gt;"));
    assert!(!html.contains("<script>alert"));
}

#[test]
fn renderers_agree_on_changed_lines_and_tags() {
    let old = "keep\nDate: 2025-01-01\ngone\nkeep2";
    let new = "keep\nDate: 2025-02-02\nkeep2\nfresh";
    let result = compare(old, new, &DiffConfig::default());

    let summary = render_summary(&result, "a", "b");
    let html = render_html(&result, "a", "b");

    for entry in result.changes() {
        if let Some(old_line) = entry.old_line() {
            assert!(summary.contains(&format!("{old_line}")));
            assert!(html.contains(&format!("{old_line}")));
        }
        if let Some(new_line) = entry.new_line() {
            assert!(summary.contains(&format!("{new_line}")));
            assert!(html.contains(&format!("{new_line}")));
        }
        for tag in entry.tags() {
            assert!(summary.contains(tag.label()));
            assert!(html.contains(&format!("<span class=\"tag\">{}</span>", tag.label())));
        }
    }
}

#[test]
fn render_dispatches_on_mode() {
    let result = invoice_result();
    assert_eq!(
        render(&result, RenderMode::Summary, "a", "b"),
        render_summary(&result, "a", "b")
    );
    assert_eq!(
        render(&result, RenderMode::Html, "a", "b"),
        render_html(&result, "a", "b")
    );
}

#[test]
fn render_mode_parses_from_selector_strings() {
    assert_eq!("summary".parse::<RenderMode>(), Ok(RenderMode::Summary));
    assert_eq!("html".parse::<RenderMode>(), Ok(RenderMode::Html));
    assert!("markdown".parse::<RenderMode>().is_err());
}

#[test]
fn json_round_trips_the_full_result() {
    let result = invoice_result();
    let json = serialize_diff_result(&result).expect("serialization should succeed");
    let restored = diff_result_from_json(&json).expect("json should parse");
    assert_eq!(restored, result);
}

#[test]
fn json_uses_tagged_entry_kinds() {
    let result = invoice_result();
    let json = serialize_diff_result(&result).expect("serialization should succeed");
    let value: Value = serde_json::from_str(&json).expect("json should parse");

    assert_eq!(value["similarity"], Value::from(33.3));
    assert_eq!(value["modified"], Value::from(2));

    let entries = value["entries"]
        .as_array()
        .expect("entries should be an array");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["kind"], Value::from("unchanged"));
    assert_eq!(entries[1]["kind"], Value::from("modified"));
    assert_eq!(entries[1]["tags"], serde_json::json!(["date"]));
    assert_eq!(entries[2]["tags"], serde_json::json!(["currency"]));
}

#[test]
fn empty_tag_lists_are_omitted_from_json() {
    let result = compare("Page 1", "Page 2", &DiffConfig::default());
    let json = serialize_diff_result(&result).expect("serialization should succeed");
    let value: Value = serde_json::from_str(&json).expect("json should parse");

    let entries = value["entries"]
        .as_array()
        .expect("entries should be an array");
    assert_eq!(entries[0]["kind"], Value::from("modified"));
    assert!(entries[0].get("tags").is_none());
}
