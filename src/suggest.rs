//! Autocomplete suggestions
//!
//! Suggestions are title phrases (contiguous word n-grams of one to four
//! words) and tags that contain the partial query, shortest first.

use std::collections::HashSet;

use crate::models::Question;

/// Shortest partial query (in chars) that produces suggestions.
const MIN_QUERY_CHARS: usize = 2;
/// Longest title phrase considered, in words.
const MAX_PHRASE_WORDS: usize = 4;

/// Default cap on suggestions returned.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Suggest completions for a partial query.
///
/// A phrase qualifies when it contains the lower-cased query and is
/// strictly longer than it. Matching is case-insensitive; suggestions come
/// back lower-cased, deduplicated, sorted by ascending character length
/// (stable, so equal lengths keep corpus order), and truncated to
/// `max_suggestions`.
pub fn search_suggestions(
    partial_query: &str,
    questions: &[Question],
    max_suggestions: usize,
) -> Vec<String> {
    let query_chars = partial_query.chars().count();
    if query_chars < MIN_QUERY_CHARS {
        return Vec::new();
    }
    let query = partial_query.to_lowercase();

    let mut seen: HashSet<String> = HashSet::new();
    let mut suggestions: Vec<String> = Vec::new();

    for question in questions {
        let title = question.title.to_lowercase();
        let words: Vec<&str> = title.split_whitespace().collect();

        for start in 0..words.len() {
            let end_max = (start + MAX_PHRASE_WORDS).min(words.len());
            for end in (start + 1)..=end_max {
                let phrase = words[start..end].join(" ");
                if phrase.contains(&query)
                    && phrase.chars().count() > query_chars
                    && seen.insert(phrase.clone())
                {
                    suggestions.push(phrase);
                }
            }
        }

        for tag in &question.tags {
            let tag = tag.to_lowercase();
            if tag.contains(&query) && seen.insert(tag.clone()) {
                suggestions.push(tag);
            }
        }
    }

    suggestions.sort_by_key(|s| s.chars().count());
    suggestions.truncate(max_suggestions);
    suggestions
}
