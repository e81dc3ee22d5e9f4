//! Experience documents and the stores that hold them.
//!
//! [`ExperienceStore`] abstracts the document store's three query
//! capabilities (vector index, keyword index, unfiltered sample) behind one
//! trait. [`QdrantStore`] is the production backend; [`InMemoryStore`] backs
//! tests and offline runs.

pub mod experience;
pub mod qdrant;
pub mod similarity;
pub mod store;

pub use experience::{Experience, ExperienceMetadata};
pub use qdrant::QdrantStore;
pub use similarity::cosine_similarity;
pub use store::{ExperienceStore, InMemoryStore, MemoryError};
