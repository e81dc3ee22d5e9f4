use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Descriptive fields attached to an experience. Editing only these does not
/// invalidate the stored embedding.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceMetadata {
    pub category: String,
    pub tags: Vec<String>,
    pub role: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// A stored personal story used as grounding context for generated answers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Embedding of title + content. A single-element `[0.0]` vector marks
    /// a document that has not been embedded yet; it never survives
    /// similarity filtering.
    pub embedding: Vec<f32>,
    pub metadata: ExperienceMetadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Experience {
    /// Create a new experience with a fresh id and current timestamps.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        embedding: Vec<f32>,
        metadata: ExperienceMetadata,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            embedding,
            metadata,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sentinel embedding for documents awaiting embedding.
    pub fn placeholder_embedding() -> Vec<f32> {
        vec![0.0]
    }

    /// Whether the stored embedding matches the configured dimensionality.
    pub fn is_embedded(&self, dimension: usize) -> bool {
        self.embedding.len() == dimension
    }

    /// Text fed to the embedder for this document.
    pub fn embedding_text(&self) -> String {
        format!("{}\n\n{}", self.title, self.content)
    }
}
