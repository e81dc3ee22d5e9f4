//! Experience lifecycle: embed on create, re-embed on content edits.

use chrono::Utc;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::embed::embed_text;
use crate::pipeline::RecallError;
use llm::LLMClient;
use memory::{Experience, ExperienceMetadata, ExperienceStore};

/// Field updates for [`Ingestor::revise`]. `None` leaves a field untouched.
#[derive(Debug, Default)]
pub struct ExperienceEdit {
    pub title: Option<String>,
    pub content: Option<String>,
    pub metadata: Option<ExperienceMetadata>,
}

pub struct Ingestor {
    client: Arc<dyn LLMClient>,
    store: Arc<dyn ExperienceStore>,
    embed_model: String,
}

impl Ingestor {
    pub fn new(
        client: Arc<dyn LLMClient>,
        store: Arc<dyn ExperienceStore>,
        embed_model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            store,
            embed_model: embed_model.into(),
        }
    }

    /// Embed and persist a new experience. The embedding is generated
    /// synchronously before the write completes, so a stored document is
    /// never left with the placeholder.
    pub async fn remember(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
        metadata: ExperienceMetadata,
    ) -> Result<Experience, RecallError> {
        let mut experience = Experience::new(
            title,
            content,
            Experience::placeholder_embedding(),
            metadata,
        );
        experience.embedding =
            embed_text(self.client.as_ref(), &self.embed_model, &experience.embedding_text())
                .await?;
        self.store.store(&experience).await?;
        debug!(id = %experience.id, "remembered experience");
        Ok(experience)
    }

    /// Apply an edit. Title or content changes invalidate the embedding and
    /// trigger a re-embed; metadata-only edits keep the existing one.
    pub async fn revise(
        &self,
        mut experience: Experience,
        edit: ExperienceEdit,
    ) -> Result<Experience, RecallError> {
        let mut reembed = false;
        if let Some(title) = edit.title {
            if title != experience.title {
                experience.title = title;
                reembed = true;
            }
        }
        if let Some(content) = edit.content {
            if content != experience.content {
                experience.content = content;
                reembed = true;
            }
        }
        if let Some(metadata) = edit.metadata {
            experience.metadata = metadata;
        }
        if reembed {
            experience.embedding = embed_text(
                self.client.as_ref(),
                &self.embed_model,
                &experience.embedding_text(),
            )
            .await?;
        }
        experience.updated_at = Utc::now();
        self.store.store(&experience).await?;
        Ok(experience)
    }

    /// Hard delete; the record is gone, not tombstoned.
    pub async fn forget(&self, id: Uuid) -> Result<(), RecallError> {
        self.store.delete(id).await?;
        Ok(())
    }
}
