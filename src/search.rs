//! Query search and ranking
//!
//! Each question is scored as a weighted sum of title, description, and tag
//! cosine similarity against the query, plus a keyword-overlap bonus. The
//! components carry their weights, so the total is a direct sum rather than
//! a re-weighted average and can exceed 1.0.

use crate::keywords::extract_keywords;
use crate::models::{Question, SearchHit, SearchOptions, SearchResults};
use crate::similarity::cosine_similarity;

/// Title cosine weight (highest — titles dominate relevance).
const TITLE_WEIGHT: f64 = 0.4;
/// Description cosine weight.
const DESC_WEIGHT: f64 = 0.3;
/// Tag-text cosine weight, applied only when `include_tags` is set.
const TAG_WEIGHT: f64 = 0.2;
/// Weight of the keyword-overlap bonus.
const KEYWORD_BONUS_WEIGHT: f64 = 0.1;

/// Keywords extracted from the query.
const QUERY_KEYWORDS: usize = 5;
/// Keywords extracted from each question's title + description.
const QUESTION_KEYWORDS: usize = 10;

/// Search the corpus for `query`, best hits first.
///
/// An empty or whitespace-only query returns the first
/// `options.max_results` questions untouched as [`SearchResults::Browse`] —
/// no scores are computed. Otherwise hits scoring at least
/// `options.min_score` are ranked by score, then votes, then `created_at`
/// recency, and truncated to `options.max_results`.
pub fn search_questions(
    query: &str,
    questions: &[Question],
    options: &SearchOptions,
) -> SearchResults {
    if query.trim().is_empty() {
        return SearchResults::Browse(
            questions.iter().take(options.max_results).cloned().collect(),
        );
    }

    #[cfg(feature = "perf-log")]
    let t0 = std::time::Instant::now();

    let query_keywords = extract_keywords(query, QUERY_KEYWORDS);

    let mut hits: Vec<SearchHit> = questions
        .iter()
        .filter(|q| options.include_answered || q.answers == 0)
        .map(|q| score_question(query, &query_keywords, q, options))
        .filter(|hit| hit.search_score >= options.min_score)
        .collect();

    // Score, then votes, then recency. created_at is a real timestamp;
    // records without one sort last among ties (None < Some).
    hits.sort_by(|a, b| {
        b.search_score
            .total_cmp(&a.search_score)
            .then_with(|| b.question.votes.cmp(&a.question.votes))
            .then_with(|| b.question.created_at.cmp(&a.question.created_at))
    });
    hits.truncate(options.max_results);

    #[cfg(feature = "perf-log")]
    eprintln!(
        "[perf] search corpus={} hits={} took={:.2}ms",
        questions.len(),
        hits.len(),
        t0.elapsed().as_secs_f64() * 1000.0,
    );

    SearchResults::Ranked(hits)
}

/// Score one question against the query.
fn score_question(
    query: &str,
    query_keywords: &[String],
    question: &Question,
    options: &SearchOptions,
) -> SearchHit {
    let title_score = cosine_similarity(query, &question.title) * TITLE_WEIGHT;
    let desc_score = cosine_similarity(query, question.description_text()) * DESC_WEIGHT;

    let tag_score = if options.include_tags {
        cosine_similarity(query, &question.tags.join(" ")) * TAG_WEIGHT
    } else {
        0.0
    };

    // Keyword bonus: fraction of query keywords that substring-overlap
    // (either direction) with the question's own keywords.
    let question_keywords = extract_keywords(
        &format!("{} {}", question.title, question.description_text()),
        QUESTION_KEYWORDS,
    );
    let keyword_matches = query_keywords
        .iter()
        .filter(|kw| {
            question_keywords
                .iter()
                .any(|qk| qk.contains(kw.as_str()) || kw.contains(qk.as_str()))
        })
        .count();
    let keyword_bonus =
        keyword_matches as f64 / query_keywords.len().max(1) as f64 * KEYWORD_BONUS_WEIGHT;

    SearchHit {
        question: question.clone(),
        search_score: title_score + desc_score + tag_score + keyword_bonus,
        title_score,
        desc_score,
        keyword_matches,
    }
}
