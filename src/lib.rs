//! StackIt Core - question search and similarity engine
//!
//! Pure, stateless scoring over an in-memory question corpus: lexical
//! similarity primitives (Jaccard and cosine), keyword extraction, weighted
//! query search, related-question discovery, and autocomplete suggestions.
//!
//! The caller owns the corpus and supplies it on every call. No function
//! here holds state between calls or mutates its inputs; every result is a
//! fresh record carrying the original question plus its computed scores.

pub mod demo_data;
pub mod keywords;
pub mod models;
pub mod search;
pub mod similar;
pub mod suggest;

mod similarity;

pub use keywords::extract_keywords;
pub use models::{
    parse_corpus, CorpusError, Question, SearchHit, SearchOptions, SearchResults, SimilarQuestion,
};
pub use search::search_questions;
pub use similar::find_similar_questions;
pub use similarity::{cosine_similarity, jaccard_similarity, tag_similarity};
pub use suggest::search_suggestions;
