//! Abstractions for interacting with large language model servers.
//!
//! The `llm` crate defines a [`LLMClient`] trait along with the concrete
//! [`OllamaClient`] implementation used in production. Everything downstream
//! of this crate holds the trait, never the concrete client.

pub mod client;
pub mod runner;
pub mod traits;

pub use client::OllamaClient;
pub use runner::{chat_model_from_env, client_from_env, embed_model_from_env};
pub use traits::{LLMClient, LLMError};
