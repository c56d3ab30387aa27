//! Normalization of raw extracted text into numbered lines.

use serde::{Deserialize, Serialize};

/// A single normalized line of extracted text.
///
/// Line numbers are 1-based and refer to the original body before boundary
/// blanks were dropped, so they stay meaningful in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub number: u32,
    pub text: String,
}

impl Line {
    pub fn new(number: u32, text: impl Into<String>) -> Line {
        Line {
            number,
            text: text.into(),
        }
    }
}

/// Split a raw text body into trailing-trimmed, numbered lines.
///
/// Purely empty lines at either boundary are dropped; interior blanks are
/// kept as real lines. `trim_end` also strips a `\r` left over from CRLF
/// input. Empty input yields an empty sequence; there are no failure modes.
pub fn normalize(body: &str) -> Vec<Line> {
    if body.is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<Line> = body
        .split('\n')
        .enumerate()
        .map(|(idx, raw)| Line {
            number: idx as u32 + 1,
            text: raw.trim_end().to_string(),
        })
        .collect();

    let first = match lines.iter().position(|l| !l.text.is_empty()) {
        Some(idx) => idx,
        None => return Vec::new(),
    };
    let last = lines
        .iter()
        .rposition(|l| !l.text.is_empty())
        .unwrap_or(first);

    lines.truncate(last + 1);
    lines.drain(..first);
    lines
}
