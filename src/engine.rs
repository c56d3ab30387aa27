//! Line alignment between two normalized documents.
//!
//! The core is a classic O(n*m) LCS over whole-line equality, traced back so
//! the earliest possible match wins among minimal alignments (on a tie the
//! old side is consumed first). A post-pass collapses adjacent delete/add
//! pairs that are textually close into `Modified` entries; pairing is local
//! and never crosses an unchanged line.

use crate::classify::classify_pair;
use crate::config::DiffConfig;
use crate::diff::{DiffEntry, DiffResult};
use crate::normalize::{normalize, Line};
use crate::score::levenshtein_ratio;

/// Compare two raw text bodies.
///
/// Total over any pair of inputs, including empty ones: two empty bodies
/// produce an empty result with 100% similarity.
pub fn compare(old_body: &str, new_body: &str, config: &DiffConfig) -> DiffResult {
    let old = normalize(old_body);
    let new = normalize(new_body);
    compare_lines(&old, &new, config)
}

/// Compare two already-normalized line sequences.
pub fn compare_lines(old: &[Line], new: &[Line], config: &DiffConfig) -> DiffResult {
    let ops = align(old, new);
    let entries = pair_adjacent_changes(&ops, old, new, config);

    debug_assert!(
        is_monotonic(&entries),
        "line numbers must be strictly increasing within each document"
    );

    DiffResult::from_entries(entries)
}

/// One step of the raw alignment, before modified-pair collapsing.
/// Indices refer into the old/new line slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AlignOp {
    Match(usize, usize),
    Delete(usize),
    Insert(usize),
}

/// Minimal-edit alignment over whole-line equality.
///
/// Suffix DP table plus a forward traceback: equal lines are always matched
/// immediately (matching is never suboptimal when texts are equal), and DP
/// ties prefer consuming the old side, which keeps the output deterministic.
fn align(old: &[Line], new: &[Line]) -> Vec<AlignOp> {
    let m = old.len();
    let n = new.len();

    let mut dp = vec![vec![0u32; n + 1]; m + 1];
    for i in (0..m).rev() {
        for j in (0..n).rev() {
            if old[i].text == new[j].text {
                dp[i][j] = dp[i + 1][j + 1] + 1;
            } else {
                dp[i][j] = dp[i + 1][j].max(dp[i][j + 1]);
            }
        }
    }

    let mut ops = Vec::with_capacity(m.max(n));
    let mut i = 0usize;
    let mut j = 0usize;
    while i < m && j < n {
        if old[i].text == new[j].text {
            ops.push(AlignOp::Match(i, j));
            i += 1;
            j += 1;
        } else if dp[i + 1][j] >= dp[i][j + 1] {
            ops.push(AlignOp::Delete(i));
            i += 1;
        } else {
            ops.push(AlignOp::Insert(j));
            j += 1;
        }
    }
    while i < m {
        ops.push(AlignOp::Delete(i));
        i += 1;
    }
    while j < n {
        ops.push(AlignOp::Insert(j));
        j += 1;
    }

    ops
}

/// Collapse adjacent delete/add runs into `Modified` entries.
///
/// Within each maximal run of non-matching ops, the k-th deleted line is
/// paired with the k-th added line; a pair collapses only when its
/// Levenshtein ratio clears the configured threshold. Runs are bounded by
/// matches, so pairing never reaches across an unchanged line.
fn pair_adjacent_changes(
    ops: &[AlignOp],
    old: &[Line],
    new: &[Line],
    config: &DiffConfig,
) -> Vec<DiffEntry> {
    let mut entries = Vec::with_capacity(ops.len());
    let mut deletes: Vec<usize> = Vec::new();
    let mut inserts: Vec<usize> = Vec::new();

    for op in ops {
        match *op {
            AlignOp::Match(i, j) => {
                flush_region(&mut deletes, &mut inserts, old, new, config, &mut entries);
                entries.push(DiffEntry::Unchanged {
                    old_line: old[i].number,
                    new_line: new[j].number,
                    text: old[i].text.clone(),
                });
            }
            AlignOp::Delete(i) => deletes.push(i),
            AlignOp::Insert(j) => inserts.push(j),
        }
    }
    flush_region(&mut deletes, &mut inserts, old, new, config, &mut entries);

    entries
}

fn flush_region(
    deletes: &mut Vec<usize>,
    inserts: &mut Vec<usize>,
    old: &[Line],
    new: &[Line],
    config: &DiffConfig,
    entries: &mut Vec<DiffEntry>,
) {
    let pairs = deletes.len().min(inserts.len());
    for k in 0..pairs {
        let old_line = &old[deletes[k]];
        let new_line = &new[inserts[k]];
        let ratio = levenshtein_ratio(&old_line.text, &new_line.text);
        if ratio >= config.modified_similarity_threshold {
            let tags = if config.enable_classification {
                classify_pair(&old_line.text, &new_line.text)
            } else {
                Vec::new()
            };
            entries.push(DiffEntry::Modified {
                old_line: old_line.number,
                new_line: new_line.number,
                old_text: old_line.text.clone(),
                new_text: new_line.text.clone(),
                tags,
            });
        } else {
            entries.push(DiffEntry::Deleted {
                old_line: old_line.number,
                text: old_line.text.clone(),
            });
            entries.push(DiffEntry::Added {
                new_line: new_line.number,
                text: new_line.text.clone(),
            });
        }
    }
    for &i in &deletes[pairs..] {
        entries.push(DiffEntry::Deleted {
            old_line: old[i].number,
            text: old[i].text.clone(),
        });
    }
    for &j in &inserts[pairs..] {
        entries.push(DiffEntry::Added {
            new_line: new[j].number,
            text: new[j].text.clone(),
        });
    }
    deletes.clear();
    inserts.clear();
}

fn is_monotonic(entries: &[DiffEntry]) -> bool {
    let mut last_old = 0u32;
    let mut last_new = 0u32;
    for entry in entries {
        if let Some(old_line) = entry.old_line() {
            if old_line <= last_old {
                return false;
            }
            last_old = old_line;
        }
        if let Some(new_line) = entry.new_line() {
            if new_line <= last_new {
                return false;
            }
            last_new = new_line;
        }
    }
    true
}
