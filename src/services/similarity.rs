//! Text similarity primitives.
//!
//! Edit distance is kept separate from item search: `CachedItemStore::fuzzy_find`
//! filters by substring containment and does not rank by distance.

/// Levenshtein edit distance over Unicode scalar values.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityMatcher;

impl SimilarityMatcher {
    /// Create a matcher.
    pub const fn new() -> Self {
        Self
    }

    /// Minimum number of single-character insertions, deletions and
    /// substitutions turning `source` into `target`. Case-sensitive.
    pub fn distance(&self, source: &str, target: &str) -> usize {
        let source: Vec<char> = source.chars().collect();
        let target: Vec<char> = target.chars().collect();

        if source.is_empty() {
            return target.len();
        }
        if target.is_empty() {
            return source.len();
        }

        // Two rows of the (source+1) x (target+1) table are enough.
        let mut prev: Vec<usize> = (0..=target.len()).collect();
        let mut curr = vec![0; target.len() + 1];

        for (i, &s) in source.iter().enumerate() {
            curr[0] = i + 1;
            for (j, &t) in target.iter().enumerate() {
                let cost = usize::from(s != t);
                let deletion = prev[j + 1] + 1;
                let insertion = curr[j] + 1;
                let substitution = prev[j] + cost;
                curr[j + 1] = deletion.min(insertion).min(substitution);
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        prev[target.len()]
    }
}
