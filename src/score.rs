//! Similarity scoring.

/// Percentage of lines common to both documents relative to the larger
/// document's line count, rounded to one decimal place.
///
/// Modified lines are partial matches and count toward neither side of the
/// ratio. Two empty documents are fully similar by definition.
pub(crate) fn similarity_percent(unchanged: usize, old_total: usize, new_total: usize) -> f64 {
    let denom = old_total.max(new_total);
    if denom == 0 {
        return 100.0;
    }
    round1(unchanged as f64 / denom as f64 * 100.0)
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Normalized Levenshtein ratio between two lines, in `[0.0, 1.0]`.
///
/// `1.0` means identical text; `0.0` means no shared content at all.
pub(crate) fn levenshtein_ratio(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(&a, &b) as f64 / max_len as f64
}

fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two-row DP; rows indexed over b.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
