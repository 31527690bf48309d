//! Core data models for the StackIt search engine
//!
//! `Question` is the caller-owned input record. The engine never mutates
//! one; search and similarity calls return new records that pair the
//! original question with its computed scores. Field names serialize in
//! camelCase to match the JSON shape the front-end ships.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// INPUT RECORD
// ─────────────────────────────────────────────────────────────────────────────

/// A question record as supplied by the caller.
///
/// `description` and `tags` may be absent in source data; the engine reads
/// a missing description as the empty string and missing tags as an empty
/// set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub votes: u32,
    #[serde(default)]
    pub answers: u32,
    #[serde(default)]
    pub views: u32,
    /// Human-readable relative age ("2 hours ago"). Display only, never
    /// parsed for ordering.
    #[serde(default)]
    pub time_ago: String,
    /// Real creation timestamp, used as the final recency tie-break when
    /// ranking. Records without one sort last among otherwise-equal hits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Question {
    /// The description text, with a missing description read as empty.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SEARCH OPTIONS
// ─────────────────────────────────────────────────────────────────────────────

/// Options for [`search_questions`](crate::search::search_questions).
///
/// Every field has a default. Deserializing ignores unknown keys and fills
/// missing ones, so a partial or over-specified options object is never an
/// error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    /// When false, questions that already have answers are dropped before
    /// scoring. The name reads like a "search answer bodies" toggle, but it
    /// has always meant "keep answered questions in the result set".
    pub include_answered: bool,
    /// Score the question's tag text against the query (0.2 weight
    /// component).
    pub include_tags: bool,
    /// Minimum search score for a hit to be kept.
    pub min_score: f64,
    /// Maximum number of results returned.
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            include_answered: true,
            include_tags: true,
            min_score: 0.1,
            max_results: 20,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SCORED OUTPUT RECORDS
// ─────────────────────────────────────────────────────────────────────────────

/// A ranked search result: the original record plus its score breakdown.
///
/// `title_score`, `desc_score`, and the keyword bonus already carry their
/// weights, so `search_score` is their direct sum (it can exceed 1.0).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    #[serde(flatten)]
    pub question: Question,
    pub search_score: f64,
    pub title_score: f64,
    pub desc_score: f64,
    /// How many query keywords overlapped the question's own keywords.
    pub keyword_matches: usize,
}

/// A related-question result with its similarity breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarQuestion {
    #[serde(flatten)]
    pub question: Question,
    /// Weighted blend: 0.5 title + 0.3 description + 0.2 tags.
    pub similarity: f64,
    pub title_similarity: f64,
    pub desc_similarity: f64,
    pub tag_similarity: f64,
}

/// Search output.
///
/// An empty or whitespace-only query browses the corpus unscored; anything
/// else produces ranked hits. The two shapes are distinct on purpose — a
/// browse carries no score fields at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchResults {
    Browse(Vec<Question>),
    Ranked(Vec<SearchHit>),
}

impl SearchResults {
    pub fn len(&self) -> usize {
        match self {
            SearchResults::Browse(questions) => questions.len(),
            SearchResults::Ranked(hits) => hits.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CORPUS LOADING
// ─────────────────────────────────────────────────────────────────────────────

/// Error type for corpus loading.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("invalid corpus JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a JSON array of question records (the shape the front-end ships as
/// mock data).
pub fn parse_corpus(json: &str) -> Result<Vec<Question>, CorpusError> {
    Ok(serde_json::from_str(json)?)
}
