//! Lexical similarity primitives
//!
//! All scoring here is whitespace-token based: lower-case the input and
//! split on whitespace runs. Jaccard compares unique-token sets; cosine
//! compares token frequency vectors; tag similarity is Jaccard over
//! case-folded tag sets with defined values for empty inputs.

use std::collections::{HashMap, HashSet};

/// Lower-cased whitespace tokens, repeats preserved.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Lower-cased whitespace tokens, collapsed to a set.
fn token_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Jaccard similarity over unique tokens: |intersection| / |union|.
///
/// Two strings with no tokens at all (empty or whitespace-only) score 0.0,
/// never NaN.
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    let set_a = token_set(a);
    let set_b = token_set(b);

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = set_a.intersection(&set_b).count();

    intersection as f64 / union as f64
}

/// Cosine similarity over token frequency vectors.
///
/// The vocabulary is the union of both token lists; each string maps to a
/// frequency vector over it. Token repetition matters here, unlike Jaccard.
/// Returns exactly 0.0 when either side has no tokens (zero magnitude).
pub fn cosine_similarity(a: &str, b: &str) -> f64 {
    let words_a = tokenize(a);
    let words_b = tokenize(b);

    let mut freq_a: HashMap<&str, f64> = HashMap::new();
    for word in &words_a {
        *freq_a.entry(word).or_insert(0.0) += 1.0;
    }
    let mut freq_b: HashMap<&str, f64> = HashMap::new();
    for word in &words_b {
        *freq_b.entry(word).or_insert(0.0) += 1.0;
    }

    // Terms absent from either side contribute nothing to the dot product,
    // so iterating one map covers the whole joint vocabulary.
    let dot: f64 = freq_a
        .iter()
        .map(|(word, &fa)| fa * freq_b.get(word).copied().unwrap_or(0.0))
        .sum();

    let magnitude_a = freq_a.values().map(|f| f * f).sum::<f64>().sqrt();
    let magnitude_b = freq_b.values().map(|f| f * f).sum::<f64>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    dot / (magnitude_a * magnitude_b)
}

/// Tag-set similarity: Jaccard over case-folded tag sets.
///
/// Both collections empty is a vacuous match (1.0); exactly one empty is
/// 0.0. Duplicate tags within a collection collapse because comparison is
/// set-based.
pub fn tag_similarity<A: AsRef<str>, B: AsRef<str>>(tags_a: &[A], tags_b: &[B]) -> f64 {
    if tags_a.is_empty() && tags_b.is_empty() {
        return 1.0;
    }
    if tags_a.is_empty() || tags_b.is_empty() {
        return 0.0;
    }

    let set_a: HashSet<String> = tags_a.iter().map(|t| t.as_ref().to_lowercase()).collect();
    let set_b: HashSet<String> = tags_b.iter().map(|t| t.as_ref().to_lowercase()).collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── jaccard_similarity tests ─────────────────────────────────

    #[test]
    fn test_jaccard_identical() {
        assert_eq!(jaccard_similarity("hello world", "hello world"), 1.0);
    }

    #[test]
    fn test_jaccard_disjoint() {
        assert_eq!(jaccard_similarity("hello world", "foo bar"), 0.0);
    }

    #[test]
    fn test_jaccard_partial_overlap() {
        // {hello, world} vs {hello, there}: 1 shared of 3 total
        let score = jaccard_similarity("hello world", "hello there");
        assert!((score - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_jaccard_case_insensitive() {
        assert_eq!(jaccard_similarity("Hello World", "hello WORLD"), 1.0);
    }

    #[test]
    fn test_jaccard_repeats_collapse() {
        assert_eq!(jaccard_similarity("go go go", "go"), 1.0);
    }

    #[test]
    fn test_jaccard_empty_is_zero_not_nan() {
        assert_eq!(jaccard_similarity("", ""), 0.0);
        assert_eq!(jaccard_similarity("   ", "\t\n"), 0.0);
    }

    #[test]
    fn test_jaccard_symmetric_and_bounded() {
        let pairs = [
            ("react state hooks", "react hooks"),
            ("a b c", "c d e"),
            ("", "something"),
        ];
        for (a, b) in pairs {
            let ab = jaccard_similarity(a, b);
            let ba = jaccard_similarity(b, a);
            assert_eq!(ab, ba, "jaccard({a:?}, {b:?}) not symmetric");
            assert!((0.0..=1.0).contains(&ab));
        }
    }

    // ── cosine_similarity tests ──────────────────────────────────

    #[test]
    fn test_cosine_self_is_one() {
        let score = cosine_similarity("react hooks state", "react hooks state");
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_empty_is_zero() {
        assert_eq!(cosine_similarity("hello", ""), 0.0);
        assert_eq!(cosine_similarity("", "hello"), 0.0);
        assert_eq!(cosine_similarity("", ""), 0.0);
    }

    #[test]
    fn test_cosine_disjoint_is_zero() {
        assert_eq!(cosine_similarity("alpha beta", "gamma delta"), 0.0);
    }

    #[test]
    fn test_cosine_symmetric_and_bounded() {
        let pairs = [
            ("how to join columns in sql", "sql join two columns"),
            ("react useState", "react hooks"),
            ("x y z", "x x y"),
        ];
        for (a, b) in pairs {
            let ab = cosine_similarity(a, b);
            let ba = cosine_similarity(b, a);
            assert!((ab - ba).abs() < 1e-12, "cosine({a:?}, {b:?}) not symmetric");
            assert!((0.0..=1.0 + 1e-12).contains(&ab));
        }
    }

    #[test]
    fn test_cosine_frequency_sensitive() {
        // Unlike Jaccard, repeated tokens change the vector
        let repeated = cosine_similarity("go go stop", "go stop");
        let flat = cosine_similarity("go stop", "go stop");
        assert!(repeated < flat);
        assert_eq!(jaccard_similarity("go go stop", "go stop"), 1.0);
    }

    #[test]
    fn test_cosine_case_insensitive() {
        let score = cosine_similarity("React Hooks", "react hooks");
        assert!((score - 1.0).abs() < 1e-12);
    }

    // ── tag_similarity tests ─────────────────────────────────────

    #[test]
    fn test_tag_similarity_both_empty_is_vacuous_match() {
        let none: &[&str] = &[];
        assert_eq!(tag_similarity(none, none), 1.0);
    }

    #[test]
    fn test_tag_similarity_one_empty_is_zero() {
        let none: &[&str] = &[];
        assert_eq!(tag_similarity(&["a"], none), 0.0);
        assert_eq!(tag_similarity(none, &["a"]), 0.0);
    }

    #[test]
    fn test_tag_similarity_case_insensitive() {
        assert_eq!(tag_similarity(&["A", "b"], &["a", "B"]), 1.0);
    }

    #[test]
    fn test_tag_similarity_partial_overlap() {
        // {react, hooks} vs {react, redux}: 1 of 3
        let score = tag_similarity(&["react", "hooks"], &["react", "redux"]);
        assert!((score - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_tag_similarity_duplicates_collapse() {
        assert_eq!(tag_similarity(&["sql", "sql"], &["sql"]), 1.0);
    }
}
