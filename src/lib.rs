//! Doc Diff: a library for comparing extracted document text.
//!
//! This crate provides functionality for:
//! - Normalizing raw extracted text (e.g. from PDFs) into numbered lines
//! - Computing a minimal line-level alignment between two text bodies
//! - Classifying modified lines by semantic category (dates, currency, ...)
//! - Rendering results as a plain-text summary, an HTML report, or JSON
//!
//! Text extraction, file I/O, and CLI handling live with the callers; this
//! core is a total function from two text bodies to a [`DiffResult`].
//!
//! # Quick Start
//!
//! ```
//! use doc_diff::{compare, DiffConfig};
//!
//! let old = "Invoice #001\nDate: 2025-01-01\nTotal: $100";
//! let new = "Invoice #001\nDate: 2025-01-02\nTotal: $150";
//! let result = compare(old, new, &DiffConfig::default());
//!
//! assert_eq!(result.modified, 2);
//! for entry in result.changes() {
//!     println!("{:?}", entry);
//! }
//! ```

mod classify;
mod config;
mod diff;
mod engine;
mod normalize;
pub mod output;
pub(crate) mod score;

pub use classify::classify_pair;
pub use config::{ConfigError, DiffConfig, DiffConfigBuilder};
pub use diff::{ChangeTag, DiffEntry, DiffResult};
pub use engine::{compare, compare_lines};
pub use normalize::{normalize, Line};
pub use output::html::render_html;
pub use output::json::{
    diff_result_from_json, serialize_diff_result, serialize_diff_result_pretty,
};
pub use output::summary::render_summary;
pub use output::{render, RenderMode, RenderModeParseError};
