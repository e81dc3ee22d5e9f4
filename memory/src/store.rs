use async_trait::async_trait;
use std::sync::Mutex;
use thiserror::Error;
use uuid::Uuid;

use crate::similarity::cosine_similarity;
use crate::Experience;

#[derive(Debug, Error)]
pub enum MemoryError {
    #[error("store error: {0}")]
    Store(String),
    #[error("malformed document payload")]
    Payload,
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// The three query capabilities of the document store, plus persistence.
///
/// `vector_search` is the native nearest-neighbour index, `keyword_search`
/// the alternate full-text index, and `sample` an unfiltered "first N"
/// fetch. The retrieval cascade leans on exactly these three.
#[async_trait]
pub trait ExperienceStore: Send + Sync {
    async fn vector_search(
        &self,
        embedding: &[f32],
        limit: usize,
    ) -> Result<Vec<Experience>, MemoryError>;

    async fn keyword_search(&self, text: &str, limit: usize)
        -> Result<Vec<Experience>, MemoryError>;

    async fn sample(&self, limit: usize) -> Result<Vec<Experience>, MemoryError>;

    /// Upsert by id.
    async fn store(&self, experience: &Experience) -> Result<(), MemoryError>;

    /// Hard delete. Unknown ids are not an error.
    async fn delete(&self, id: Uuid) -> Result<(), MemoryError>;
}

/// Simple in-memory store used for tests and offline runs.
#[derive(Default)]
pub struct InMemoryStore {
    experiences: Mutex<Vec<Experience>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look a document up by id, mostly for assertions in tests.
    pub fn fetch(&self, id: Uuid) -> Option<Experience> {
        let docs = self.experiences.lock().unwrap();
        docs.iter().find(|e| e.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.experiences.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ExperienceStore for InMemoryStore {
    async fn vector_search(
        &self,
        embedding: &[f32],
        limit: usize,
    ) -> Result<Vec<Experience>, MemoryError> {
        let docs = self.experiences.lock().unwrap();
        let mut scored: Vec<(f32, Experience)> = docs
            .iter()
            .map(|e| (cosine_similarity(embedding, &e.embedding), e.clone()))
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        Ok(scored.into_iter().take(limit).map(|(_, e)| e).collect())
    }

    async fn keyword_search(
        &self,
        text: &str,
        limit: usize,
    ) -> Result<Vec<Experience>, MemoryError> {
        let needle = text.to_lowercase();
        let docs = self.experiences.lock().unwrap();
        Ok(docs
            .iter()
            .filter(|e| {
                e.title.to_lowercase().contains(&needle)
                    || e.content.to_lowercase().contains(&needle)
            })
            .take(limit)
            .cloned()
            .collect())
    }

    async fn sample(&self, limit: usize) -> Result<Vec<Experience>, MemoryError> {
        let docs = self.experiences.lock().unwrap();
        Ok(docs.iter().take(limit).cloned().collect())
    }

    async fn store(&self, experience: &Experience) -> Result<(), MemoryError> {
        let mut docs = self.experiences.lock().unwrap();
        match docs.iter_mut().find(|e| e.id == experience.id) {
            Some(existing) => *existing = experience.clone(),
            None => docs.push(experience.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), MemoryError> {
        let mut docs = self.experiences.lock().unwrap();
        docs.retain(|e| e.id != id);
        Ok(())
    }
}
