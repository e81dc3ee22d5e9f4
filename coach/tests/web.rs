use async_trait::async_trait;
use std::sync::Arc;

use coach::{app, AppState};
use llm::{LLMClient, LLMError};
use memory::{Experience, ExperienceMetadata, ExperienceStore, InMemoryStore, MemoryError};
use recall::{AnswerPipeline, PipelineConfig};

struct CannedLLM {
    embedding: Vec<f32>,
    reply: &'static str,
}

#[async_trait]
impl LLMClient for CannedLLM {
    async fn chat(&self, _model: &str, _system: &str, _prompt: &str) -> Result<String, LLMError> {
        Ok(self.reply.to_string())
    }

    async fn embed(&self, _model: &str, _input: &str) -> Result<Vec<f32>, LLMError> {
        Ok(self.embedding.clone())
    }
}

/// Store where every tier is down.
struct DownStore;

#[async_trait]
impl ExperienceStore for DownStore {
    async fn vector_search(
        &self,
        _embedding: &[f32],
        _limit: usize,
    ) -> Result<Vec<Experience>, MemoryError> {
        Err(MemoryError::Store("down".into()))
    }

    async fn keyword_search(
        &self,
        _text: &str,
        _limit: usize,
    ) -> Result<Vec<Experience>, MemoryError> {
        Err(MemoryError::Store("down".into()))
    }

    async fn sample(&self, _limit: usize) -> Result<Vec<Experience>, MemoryError> {
        Err(MemoryError::Store("down".into()))
    }

    async fn store(&self, _experience: &Experience) -> Result<(), MemoryError> {
        Err(MemoryError::Store("down".into()))
    }

    async fn delete(&self, _id: uuid::Uuid) -> Result<(), MemoryError> {
        Err(MemoryError::Store("down".into()))
    }
}

fn config() -> PipelineConfig {
    PipelineConfig {
        chat_model: "chat-model".into(),
        embed_model: "embed-model".into(),
        context_limit: 5,
        context_threshold: 0.3,
        match_threshold: 0.8,
    }
}

async fn serve(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app(state);
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn serve_canned() -> String {
    let client = Arc::new(CannedLLM {
        embedding: vec![1.0, 0.0, 0.0],
        reply: "I led the rollback. [1]",
    });
    let store = Arc::new(InMemoryStore::new());
    store
        .store(&Experience::new(
            "Outage",
            "Led the rollback.",
            vec![1.0, 0.0, 0.0],
            ExperienceMetadata::default(),
        ))
        .await
        .unwrap();
    let pipeline = Arc::new(AnswerPipeline::new(client, store, config()));
    serve(AppState { pipeline }).await
}

#[tokio::test]
async fn post_generate_returns_answer_and_context() {
    let base = serve_canned().await;
    let res = reqwest::Client::new()
        .post(format!("{base}/generate"))
        .json(&serde_json::json!({ "question": "Tell me about an outage" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["answer"]
        .as_str()
        .unwrap()
        .starts_with("I led the rollback. [1]"));
    assert!(body["answer"].as_str().unwrap().contains("**References:**"));
    assert_eq!(body["context"].as_array().unwrap().len(), 1);
    assert_eq!(body["used_fallback"], serde_json::Value::Bool(false));
    assert_eq!(body["tier"], "vector");
}

#[tokio::test]
async fn missing_question_is_bad_request() {
    let base = serve_canned().await;
    let res = reqwest::Client::new()
        .post(format!("{base}/generate"))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Missing question in body");
}

#[tokio::test]
async fn non_string_question_is_bad_request() {
    let base = serve_canned().await;
    let res = reqwest::Client::new()
        .post(format!("{base}/generate"))
        .json(&serde_json::json!({ "question": 42 }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
}

#[tokio::test]
async fn wrong_method_is_not_allowed() {
    let base = serve_canned().await;
    let res = reqwest::Client::new()
        .get(format!("{base}/generate"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 405);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Method not allowed");
}

#[tokio::test]
async fn store_outage_is_internal_error() {
    let client = Arc::new(CannedLLM {
        embedding: vec![1.0, 0.0, 0.0],
        reply: "unused",
    });
    let pipeline = Arc::new(AnswerPipeline::new(client, Arc::new(DownStore), config()));
    let base = serve(AppState { pipeline }).await;

    let res = reqwest::Client::new()
        .post(format!("{base}/generate"))
        .json(&serde_json::json!({ "question": "anything" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 500);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Internal server error");
}
