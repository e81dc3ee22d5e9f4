//! Similarity scoring, shared with the store layer so a single definition
//! ranks documents everywhere.

pub use memory::similarity::cosine_similarity;
