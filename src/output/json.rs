//! JSON serialization of diff results.

use crate::diff::DiffResult;

pub fn serialize_diff_result(result: &DiffResult) -> serde_json::Result<String> {
    serde_json::to_string(result)
}

pub fn serialize_diff_result_pretty(result: &DiffResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

pub fn diff_result_from_json(json: &str) -> serde_json::Result<DiffResult> {
    serde_json::from_str(json)
}
