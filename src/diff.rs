//! Diff entries and results for document comparison.
//!
//! This module defines the types used to represent differences between two
//! text bodies:
//! - [`DiffEntry`]: a single aligned line (unchanged, added, deleted, or modified)
//! - [`DiffResult`]: the ordered entry sequence plus derived counts and similarity
//! - [`ChangeTag`]: semantic category attached to a modified line

use crate::score::similarity_percent;
use serde::{Deserialize, Serialize};

/// Semantic category describing what kind of content changed in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeTag {
    Date,
    Currency,
    Percentage,
    Identifier,
    Email,
    Phone,
}

impl ChangeTag {
    pub fn label(&self) -> &'static str {
        match self {
            ChangeTag::Date => "date",
            ChangeTag::Currency => "currency",
            ChangeTag::Percentage => "percentage",
            ChangeTag::Identifier => "identifier",
            ChangeTag::Email => "email",
            ChangeTag::Phone => "phone",
        }
    }
}

impl std::fmt::Display for ChangeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single aligned line between the old and new documents.
///
/// Line numbers are 1-based and refer to each document's own numbering.
/// Within the ordered entry sequence of a [`DiffResult`], `old_line` and
/// `new_line` are strictly increasing across the entries that carry them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffEntry {
    Unchanged {
        old_line: u32,
        new_line: u32,
        text: String,
    },
    Added {
        new_line: u32,
        text: String,
    },
    Deleted {
        old_line: u32,
        text: String,
    },
    /// A deleted line and an adjacent added line close enough in text to be
    /// reported as one edit. `tags` lists the semantic categories whose
    /// matches differ between the two texts (possibly empty).
    Modified {
        old_line: u32,
        new_line: u32,
        old_text: String,
        new_text: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        tags: Vec<ChangeTag>,
    },
}

impl DiffEntry {
    pub fn is_change(&self) -> bool {
        !matches!(self, DiffEntry::Unchanged { .. })
    }

    /// Semantic tags carried by this entry (non-empty only for `Modified`).
    pub fn tags(&self) -> &[ChangeTag] {
        match self {
            DiffEntry::Modified { tags, .. } => tags,
            _ => &[],
        }
    }

    pub fn old_line(&self) -> Option<u32> {
        match self {
            DiffEntry::Unchanged { old_line, .. }
            | DiffEntry::Deleted { old_line, .. }
            | DiffEntry::Modified { old_line, .. } => Some(*old_line),
            DiffEntry::Added { .. } => None,
        }
    }

    pub fn new_line(&self) -> Option<u32> {
        match self {
            DiffEntry::Unchanged { new_line, .. }
            | DiffEntry::Added { new_line, .. }
            | DiffEntry::Modified { new_line, .. } => Some(*new_line),
            DiffEntry::Deleted { .. } => None,
        }
    }
}

/// The full line-level comparison of two documents.
///
/// Counts and `similarity` are derived from `entries` by
/// [`DiffResult::from_entries`] and are never set independently, so
/// `added + deleted + modified + unchanged == entries.len()` always holds.
/// A result is constructed once per comparison and read-only afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffResult {
    /// Entries in document order, interleaving changes as they occur.
    pub entries: Vec<DiffEntry>,
    pub added: usize,
    pub deleted: usize,
    pub modified: usize,
    pub unchanged: usize,
    /// Percentage of lines common to both documents relative to the larger
    /// one, in `[0.0, 100.0]`, rounded to one decimal place.
    pub similarity: f64,
}

impl DiffResult {
    /// Build a result from an ordered entry sequence, deriving all counts
    /// and the similarity score.
    ///
    /// Every old line appears in exactly one `Unchanged`/`Deleted`/`Modified`
    /// entry and every new line in exactly one `Unchanged`/`Added`/`Modified`
    /// entry, so the per-document totals fall out of the counts.
    pub fn from_entries(entries: Vec<DiffEntry>) -> DiffResult {
        let mut added = 0;
        let mut deleted = 0;
        let mut modified = 0;
        let mut unchanged = 0;
        for entry in &entries {
            match entry {
                DiffEntry::Unchanged { .. } => unchanged += 1,
                DiffEntry::Added { .. } => added += 1,
                DiffEntry::Deleted { .. } => deleted += 1,
                DiffEntry::Modified { .. } => modified += 1,
            }
        }

        let old_total = unchanged + deleted + modified;
        let new_total = unchanged + added + modified;
        let similarity = similarity_percent(unchanged, old_total, new_total);

        DiffResult {
            entries,
            added,
            deleted,
            modified,
            unchanged,
            similarity,
        }
    }

    pub fn is_identical(&self) -> bool {
        self.added == 0 && self.deleted == 0 && self.modified == 0
    }

    /// Iterator over the non-`Unchanged` entries in document order.
    pub fn changes(&self) -> impl Iterator<Item = &DiffEntry> {
        self.entries.iter().filter(|e| e.is_change())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_derived_from_entries() {
        let entries = vec![
            DiffEntry::Unchanged {
                old_line: 1,
                new_line: 1,
                text: "a".into(),
            },
            DiffEntry::Deleted {
                old_line: 2,
                text: "b".into(),
            },
            DiffEntry::Added {
                new_line: 2,
                text: "c".into(),
            },
            DiffEntry::Modified {
                old_line: 3,
                new_line: 3,
                old_text: "d".into(),
                new_text: "e".into(),
                tags: Vec::new(),
            },
        ];
        let result = DiffResult::from_entries(entries);
        assert_eq!(result.added, 1);
        assert_eq!(result.deleted, 1);
        assert_eq!(result.modified, 1);
        assert_eq!(result.unchanged, 1);
        assert_eq!(
            result.added + result.deleted + result.modified + result.unchanged,
            result.entries.len()
        );
        // one of three old lines survives unchanged
        assert_eq!(result.similarity, 33.3);
    }

    #[test]
    fn empty_entry_list_is_fully_similar() {
        let result = DiffResult::from_entries(Vec::new());
        assert!(result.is_identical());
        assert_eq!(result.similarity, 100.0);
    }

    #[test]
    fn tag_labels_are_lowercase() {
        assert_eq!(ChangeTag::Date.to_string(), "date");
        assert_eq!(ChangeTag::Identifier.to_string(), "identifier");
    }
}
