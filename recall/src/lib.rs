//! Retrieval-augmented answer generation over stored experiences.
//!
//! The pipeline runs embed → tiered retrieval → relevance filter → answer
//! synthesis → reference formatting as one sequential chain per request.
//! [`AnswerPipeline`] is the assembled whole; the pieces are exported for
//! callers that need them individually.

pub mod embed;
pub mod filter;
pub mod ingest;
pub mod pipeline;
pub mod prompt;
pub mod references;
pub mod retriever;
pub mod similarity;
pub mod synthesize;

pub use embed::{embed_text, EMPTY_INPUT_PLACEHOLDER};
pub use filter::{filter_relevant, Candidate};
pub use ingest::{ExperienceEdit, Ingestor};
pub use pipeline::{AnswerPipeline, GeneratedAnswer, PipelineConfig, RecallError};
pub use prompt::{build_context, AnswerPrompt, PromptFragment, SYSTEM_PROMPT};
pub use references::append_references;
pub use retriever::{
    KeywordStrategy, RecallQuery, RecallStrategy, Retrieval, Retriever, SampleStrategy,
    VectorStrategy,
};
pub use similarity::cosine_similarity;
pub use synthesize::Synthesizer;
