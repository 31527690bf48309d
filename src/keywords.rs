//! Keyword extraction via frequency analysis
//!
//! Input text is lower-cased, stripped of punctuation, and split on
//! whitespace. Very short tokens and common English stop words are dropped;
//! what survives is ranked by frequency.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

/// Common English words excluded from keyword extraction: articles,
/// prepositions, pronouns, and auxiliary verbs.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "up", "about", "into", "through", "during", "before", "after", "above", "below",
        "between", "among", "is", "are", "was", "were", "be", "been", "being", "have", "has",
        "had", "do", "does", "did", "will", "would", "could", "should", "may", "might", "must",
        "can", "this", "that", "these", "those", "i", "you", "he", "she", "it", "we", "they",
        "me", "him", "her", "us", "them",
    ]
    .into_iter()
    .collect()
});

/// Everything that is neither a word character nor whitespace.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Minimum token length (in chars) for a word to count as a keyword.
const MIN_KEYWORD_CHARS: usize = 3;

/// Extract up to `max_keywords` keywords from `text`, most frequent first.
///
/// Tokens shorter than three characters and stop words are dropped before
/// counting. Frequency ties keep first-occurrence order so the output is
/// reproducible for identical input.
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<String> {
    if max_keywords == 0 {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, "");

    let mut frequency: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();
    for word in cleaned.split_whitespace() {
        if word.chars().count() < MIN_KEYWORD_CHARS || STOP_WORDS.contains(word) {
            continue;
        }
        if !frequency.contains_key(word) {
            first_seen.push(word.to_string());
        }
        *frequency.entry(word.to_string()).or_insert(0) += 1;
    }

    // Stable sort over first-seen order: equal frequencies keep the order
    // the words first appeared in the text.
    let mut keywords = first_seen;
    keywords.sort_by(|a, b| frequency[b.as_str()].cmp(&frequency[a.as_str()]));
    keywords.truncate(max_keywords);
    keywords
}
