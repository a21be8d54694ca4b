//! Token-level page similarity
//!
//! Compares two page bodies by splitting them on whitespace and computing
//! a matching-blocks ratio over the token sequences. Tokens, not lines:
//! plenty of HTML pages contain hardly any line breaks, which makes a
//! line-based diff degenerate.
//!
//! The ratio is 2·M / T, where M is the total length of matching
//! contiguous token runs found by recursively taking the longest common
//! run, and T is the combined length of both sequences. It is a similarity
//! measure in [0, 1], not an edit distance.

use std::collections::HashMap;

/// Returns true if the two bodies are at least `min_ratio` similar
///
/// # Examples
///
/// ```
/// use soft404::similarity::almost_identical;
///
/// let a = "a b c d e f g h i j k l m n o p q r s t u v w x y z";
/// let b = "a b c d e f g h i j k l m n o p q r s t u v w y z";
/// assert!(almost_identical(a, a, 0.95));
/// assert!(almost_identical(a, b, 0.95));
/// ```
pub fn almost_identical(body_a: &str, body_b: &str, min_ratio: f64) -> bool {
    let tokens_a: Vec<&str> = body_a.split_whitespace().collect();
    let tokens_b: Vec<&str> = body_b.split_whitespace().collect();
    ratio(&tokens_a, &tokens_b) >= min_ratio
}

/// Similarity ratio between two token sequences, in [0, 1]
///
/// Two empty sequences are identical (ratio 1.0). Deterministic, and
/// symmetric in practice: swapping the arguments yields the same value.
pub fn ratio(a: &[&str], b: &[&str]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * total_matching(a, b) as f64 / total as f64
}

/// Sum of the lengths of all matching blocks
///
/// Finds the longest matching run, then recurses (via an explicit work
/// list) into the regions left and right of it.
fn total_matching(a: &[&str], b: &[&str]) -> usize {
    let mut b_index: HashMap<&str, Vec<usize>> = HashMap::new();
    for (j, &token) in b.iter().enumerate() {
        b_index.entry(token).or_default().push(j);
    }

    let mut regions = vec![(0usize, a.len(), 0usize, b.len())];
    let mut matched = 0;

    while let Some((a_lo, a_hi, b_lo, b_hi)) = regions.pop() {
        let (i, j, size) = longest_match(a, &b_index, a_lo, a_hi, b_lo, b_hi);
        if size > 0 {
            matched += size;
            regions.push((a_lo, i, b_lo, j));
            regions.push((i + size, a_hi, j + size, b_hi));
        }
    }

    matched
}

/// Longest matching block within `a[a_lo..a_hi]` and `b[b_lo..b_hi]`
///
/// Returns `(i, j, size)` with `a[i..i+size] == b[j..j+size]`. Ties go to
/// the earliest block in `a`, then the earliest in `b`, which keeps the
/// result deterministic.
fn longest_match(
    a: &[&str],
    b_index: &HashMap<&str, Vec<usize>>,
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
) -> (usize, usize, usize) {
    let mut best_i = a_lo;
    let mut best_j = b_lo;
    let mut best_size = 0;

    // run_ends[j] = length of the matching run ending at (i-1, j)
    let mut run_ends: HashMap<usize, usize> = HashMap::new();

    for i in a_lo..a_hi {
        let mut new_runs: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b_index.get(a[i]) {
            for &j in positions {
                if j < b_lo {
                    continue;
                }
                if j >= b_hi {
                    break;
                }
                let size = match j.checked_sub(1) {
                    Some(prev) => run_ends.get(&prev).copied().unwrap_or(0) + 1,
                    None => 1,
                };
                new_runs.insert(j, size);
                if size > best_size {
                    best_i = i + 1 - size;
                    best_j = j + 1 - size;
                    best_size = size;
                }
            }
        }
        run_ends = new_runs;
    }

    (best_i, best_j, best_size)
}
