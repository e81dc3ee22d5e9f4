//! Qdrant-backed experience store.
//!
//! One collection with cosine distance. The payload carries the whole
//! serialized experience in a `json` field plus `title`/`content`/`category`
//! for indexing; a full-text index on `content` backs the keyword tier and
//! an unfiltered scroll backs the sample tier.

use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use qdrant_client::qdrant::{
    value::Kind, Condition, CreateCollectionBuilder, CreateFieldIndexCollectionBuilder,
    DeletePointsBuilder, Distance, FieldType, Filter, PointStruct, PointsIdsList,
    ScrollPointsBuilder, SearchPointsBuilder, UpsertPointsBuilder, Value, VectorParamsBuilder,
};
use qdrant_client::{Payload, Qdrant, QdrantError};

use crate::{Experience, ExperienceStore, MemoryError};

impl From<QdrantError> for MemoryError {
    fn from(err: QdrantError) -> Self {
        MemoryError::Store(err.to_string())
    }
}

pub struct QdrantStore {
    client: Qdrant,
    collection: String,
    dimension: usize,
}

impl QdrantStore {
    pub fn new(
        url: &str,
        collection: impl Into<String>,
        dimension: usize,
    ) -> Result<Self, MemoryError> {
        let client = Qdrant::from_url(url).build()?;
        Ok(Self {
            client,
            collection: collection.into(),
            dimension,
        })
    }

    /// Create the collection and the full-text index on first run.
    pub async fn ensure_collection(&self) -> Result<(), MemoryError> {
        if self.client.collection_exists(&self.collection).await? {
            return Ok(());
        }
        self.client
            .create_collection(
                CreateCollectionBuilder::new(&self.collection).vectors_config(
                    VectorParamsBuilder::new(self.dimension as u64, Distance::Cosine),
                ),
            )
            .await?;
        self.client
            .create_field_index(CreateFieldIndexCollectionBuilder::new(
                &self.collection,
                "content",
                FieldType::Text,
            ))
            .await?;
        debug!(collection = %self.collection, dimension = self.dimension, "created collection");
        Ok(())
    }
}

/// Build the point payload for an experience.
pub fn payload_for(experience: &Experience) -> Result<Payload, MemoryError> {
    let mut payload = Payload::new();
    payload.insert("json", serde_json::to_string(experience)?);
    payload.insert("title", experience.title.clone());
    payload.insert("content", experience.content.clone());
    payload.insert("category", experience.metadata.category.clone());
    Ok(payload)
}

/// Recover an experience from a point payload.
pub fn experience_from_payload(
    payload: &HashMap<String, Value>,
) -> Result<Experience, MemoryError> {
    let raw = match payload.get("json").and_then(|v| v.kind.as_ref()) {
        Some(Kind::StringValue(s)) => s,
        _ => return Err(MemoryError::Payload),
    };
    Ok(serde_json::from_str(raw)?)
}

#[async_trait]
impl ExperienceStore for QdrantStore {
    async fn vector_search(
        &self,
        embedding: &[f32],
        limit: usize,
    ) -> Result<Vec<Experience>, MemoryError> {
        let res = self
            .client
            .search_points(
                SearchPointsBuilder::new(&self.collection, embedding.to_vec(), limit as u64)
                    .with_payload(true),
            )
            .await?;
        res.result
            .iter()
            .map(|point| experience_from_payload(&point.payload))
            .collect()
    }

    async fn keyword_search(
        &self,
        text: &str,
        limit: usize,
    ) -> Result<Vec<Experience>, MemoryError> {
        let res = self
            .client
            .scroll(
                ScrollPointsBuilder::new(&self.collection)
                    .filter(Filter::must([Condition::matches_text("content", text)]))
                    .limit(limit as u32)
                    .with_payload(true),
            )
            .await?;
        res.result
            .iter()
            .map(|point| experience_from_payload(&point.payload))
            .collect()
    }

    async fn sample(&self, limit: usize) -> Result<Vec<Experience>, MemoryError> {
        let res = self
            .client
            .scroll(
                ScrollPointsBuilder::new(&self.collection)
                    .limit(limit as u32)
                    .with_payload(true),
            )
            .await?;
        res.result
            .iter()
            .map(|point| experience_from_payload(&point.payload))
            .collect()
    }

    async fn store(&self, experience: &Experience) -> Result<(), MemoryError> {
        let payload = payload_for(experience)?;
        let point = PointStruct::new(
            experience.id.to_string(),
            experience.embedding.clone(),
            payload,
        );
        self.client
            .upsert_points(UpsertPointsBuilder::new(&self.collection, vec![point]).wait(true))
            .await?;
        debug!(id = %experience.id, title = %experience.title, "stored experience");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), MemoryError> {
        self.client
            .delete_points(
                DeletePointsBuilder::new(&self.collection)
                    .points(PointsIdsList {
                        ids: vec![id.to_string().into()],
                    })
                    .wait(true),
            )
            .await?;
        Ok(())
    }
}
