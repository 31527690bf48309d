//! Related-question discovery
//!
//! Blends title, description, and tag similarity between two questions into
//! a single score. Titles dominate, mirroring the search path's weighting.

use crate::models::{Question, SimilarQuestion};
use crate::similarity::{cosine_similarity, tag_similarity};

/// Title cosine weight in the blended similarity.
const TITLE_WEIGHT: f64 = 0.5;
/// Description cosine weight.
const DESC_WEIGHT: f64 = 0.3;
/// Tag-set Jaccard weight.
const TAG_WEIGHT: f64 = 0.2;

/// Default minimum blended similarity for a question to count as related.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.3;
/// Default cap on related questions returned.
pub const DEFAULT_MAX_SIMILAR: usize = 5;

/// Find questions related to `target` within `corpus`, best first.
///
/// The target itself is excluded by id. Results below `threshold` are
/// dropped; ordering is stable, so equal scores keep corpus order; at most
/// `max_results` are returned.
pub fn find_similar_questions(
    target: &Question,
    corpus: &[Question],
    threshold: f64,
    max_results: usize,
) -> Vec<SimilarQuestion> {
    let mut similar: Vec<SimilarQuestion> = corpus
        .iter()
        .filter(|q| q.id != target.id)
        .map(|q| {
            let title_similarity = cosine_similarity(&target.title, &q.title);
            let desc_similarity =
                cosine_similarity(target.description_text(), q.description_text());
            let tag_similarity = tag_similarity(&target.tags, &q.tags);
            let similarity = TITLE_WEIGHT * title_similarity
                + DESC_WEIGHT * desc_similarity
                + TAG_WEIGHT * tag_similarity;
            SimilarQuestion {
                question: q.clone(),
                similarity,
                title_similarity,
                desc_similarity,
                tag_similarity,
            }
        })
        .filter(|s| s.similarity >= threshold)
        .collect();

    similar.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    similar.truncate(max_results);
    similar
}
