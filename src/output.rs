//! Rendering of diff results.
//!
//! All renderers are pure functions from a [`DiffResult`] to an in-memory
//! buffer; persisting the output is the caller's job. The summary and HTML
//! renderers share one input contract and list the same changed lines and
//! tags, differing only in encoding.

pub mod html;
pub mod json;
pub mod summary;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::diff::DiffResult;

/// Output encoding for a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    Summary,
    Html,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Summary => f.write_str("summary"),
            RenderMode::Html => f.write_str("html"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown render mode '{input}' (expected 'summary' or 'html')")]
pub struct RenderModeParseError {
    pub input: String,
}

impl FromStr for RenderMode {
    type Err = RenderModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(RenderMode::Summary),
            "html" => Ok(RenderMode::Html),
            other => Err(RenderModeParseError {
                input: other.to_string(),
            }),
        }
    }
}

/// Render `result` in the requested mode.
///
/// The labels identify the two documents in report headers and carry no
/// other meaning.
pub fn render(result: &DiffResult, mode: RenderMode, old_label: &str, new_label: &str) -> String {
    match mode {
        RenderMode::Summary => summary::render_summary(result, old_label, new_label),
        RenderMode::Html => html::render_html(result, old_label, new_label),
    }
}
