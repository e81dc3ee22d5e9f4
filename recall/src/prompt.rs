//! Prompt building for answer synthesis.
//!
//! Prompt wording is centralized here so it can be tweaked consistently.

use crate::filter::Candidate;

/// Common interface for constructing prompts.
pub trait PromptFragment {
    /// Build a prompt from `input`.
    fn build_prompt(&self, input: &str) -> String;
}

/// System instructions for grounded first-person interview answers.
pub const SYSTEM_PROMPT: &str = "You are the candidate in a job interview. \
Answer the question in the first person, drawing only on the numbered \
experiences supplied as context. Cite each experience you use as [n]. \
If the context is empty or none of it is relevant, say that you do not \
have a relevant experience to share rather than inventing one.";

/// Join surviving candidates into the numbered context block, one
/// `(n) Title: Content` line per snippet. Empty when nothing survived.
pub fn build_context(candidates: &[Candidate]) -> String {
    candidates
        .iter()
        .enumerate()
        .map(|(i, c)| format!("({}) {}: {}", i + 1, c.experience.title, c.experience.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt builder for the answer synthesizer.
pub struct AnswerPrompt {
    context: String,
}

impl AnswerPrompt {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }
}

impl PromptFragment for AnswerPrompt {
    fn build_prompt(&self, input: &str) -> String {
        if self.context.is_empty() {
            format!("Question: {input}\n\nContext: (none)")
        } else {
            format!("Question: {input}\n\nContext:\n{}", self.context)
        }
    }
}
