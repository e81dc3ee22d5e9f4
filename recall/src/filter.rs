use serde::Serialize;

use crate::similarity::cosine_similarity;
use memory::Experience;

/// An experience paired with its similarity to the query. Lives only for the
/// duration of one retrieval request.
#[derive(Clone, Debug, Serialize)]
pub struct Candidate {
    pub experience: Experience,
    pub score: f32,
}

/// Score candidates against the query embedding, drop everything under
/// `threshold`, and sort the survivors by descending score. The sort is
/// stable, so ties keep their retrieval order. Zero survivors is a normal
/// outcome; the caller proceeds with an empty context.
pub fn filter_relevant(
    query_embedding: &[f32],
    experiences: Vec<Experience>,
    threshold: f32,
) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = experiences
        .into_iter()
        .map(|experience| {
            let score = cosine_similarity(query_embedding, &experience.embedding);
            Candidate { experience, score }
        })
        .filter(|candidate| candidate.score >= threshold)
        .collect();
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates
}
