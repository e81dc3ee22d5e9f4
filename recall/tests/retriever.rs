use async_trait::async_trait;
use std::sync::Arc;

use memory::{Experience, ExperienceMetadata, ExperienceStore, MemoryError};
use recall::{RecallQuery, Retriever};

/// Store whose tiers can be taken down individually.
struct TieredStore {
    vector_up: bool,
    keyword_up: bool,
    sample_up: bool,
    docs: Vec<Experience>,
}

impl TieredStore {
    fn new(vector_up: bool, keyword_up: bool, sample_up: bool, docs: Vec<Experience>) -> Arc<Self> {
        Arc::new(Self {
            vector_up,
            keyword_up,
            sample_up,
            docs,
        })
    }
}

fn down() -> MemoryError {
    MemoryError::Store("index unavailable".into())
}

#[async_trait]
impl ExperienceStore for TieredStore {
    async fn vector_search(
        &self,
        _embedding: &[f32],
        limit: usize,
    ) -> Result<Vec<Experience>, MemoryError> {
        if self.vector_up {
            Ok(self.docs.iter().take(limit).cloned().collect())
        } else {
            Err(down())
        }
    }

    async fn keyword_search(
        &self,
        _text: &str,
        limit: usize,
    ) -> Result<Vec<Experience>, MemoryError> {
        if self.keyword_up {
            Ok(self.docs.iter().take(limit).cloned().collect())
        } else {
            Err(down())
        }
    }

    async fn sample(&self, limit: usize) -> Result<Vec<Experience>, MemoryError> {
        if self.sample_up {
            Ok(self.docs.iter().take(limit).cloned().collect())
        } else {
            Err(down())
        }
    }

    async fn store(&self, _experience: &Experience) -> Result<(), MemoryError> {
        Ok(())
    }

    async fn delete(&self, _id: uuid::Uuid) -> Result<(), MemoryError> {
        Ok(())
    }
}

fn query() -> RecallQuery {
    RecallQuery {
        text: "tell me about a conflict".into(),
        embedding: vec![1.0, 0.0, 0.0],
    }
}

fn doc() -> Experience {
    Experience::new(
        "Conflict",
        "Disagreed with my lead about rollout order.",
        vec![1.0, 0.0, 0.0],
        ExperienceMetadata::default(),
    )
}

#[tokio::test]
async fn healthy_vector_tier_is_terminal() {
    let store = TieredStore::new(true, true, true, vec![doc()]);
    let retriever = Retriever::new(store);

    let retrieval = retriever.retrieve(&query(), 5).await.unwrap();
    assert_eq!(retrieval.tier, "vector");
    assert!(!retrieval.used_fallback);
    assert_eq!(retrieval.experiences.len(), 1);
}

#[tokio::test]
async fn empty_vector_result_does_not_trigger_fallback() {
    // Keyword search would find documents, but a healthy empty answer from
    // the vector index is accepted as-is.
    let store = TieredStore::new(true, true, true, Vec::new());
    let retriever = Retriever::new(store);

    let retrieval = retriever.retrieve(&query(), 5).await.unwrap();
    assert_eq!(retrieval.tier, "vector");
    assert!(!retrieval.used_fallback);
    assert!(retrieval.experiences.is_empty());
}

#[tokio::test]
async fn vector_failure_falls_back_to_keyword() {
    let store = TieredStore::new(false, true, true, vec![doc()]);
    let retriever = Retriever::new(store);

    let retrieval = retriever.retrieve(&query(), 5).await.unwrap();
    assert_eq!(retrieval.tier, "keyword");
    assert!(retrieval.used_fallback);
    assert_eq!(retrieval.experiences.len(), 1);
}

#[tokio::test]
async fn double_failure_lands_on_sample_even_when_empty() {
    let store = TieredStore::new(false, false, true, Vec::new());
    let retriever = Retriever::new(store);

    let retrieval = retriever.retrieve(&query(), 5).await.unwrap();
    assert_eq!(retrieval.tier, "sample");
    assert!(retrieval.used_fallback);
    assert!(retrieval.experiences.is_empty());
}

#[tokio::test]
async fn all_tiers_failing_is_an_error() {
    let store = TieredStore::new(false, false, false, vec![doc()]);
    let retriever = Retriever::new(store);

    assert!(retriever.retrieve(&query(), 5).await.is_err());
}

#[tokio::test]
async fn limit_caps_each_tier() {
    let store = TieredStore::new(true, true, true, vec![doc(), doc(), doc()]);
    let retriever = Retriever::new(store);

    let retrieval = retriever.retrieve(&query(), 2).await.unwrap();
    assert_eq!(retrieval.experiences.len(), 2);
}
