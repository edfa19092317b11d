//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// A single completion call: optional system message plus user prompt
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// System message framing the model's role
    pub system: Option<String>,

    /// User prompt
    pub prompt: String,

    /// Upper bound on generated tokens
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,
}

impl CompletionRequest {
    /// Create a request with no system message and neutral sampling
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
            max_tokens: 1024,
            temperature: 0.7,
        }
    }

    /// Set the system message
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set the token limit
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (enmaster-llm). Both article
/// generation and translation grading go through this one capability, so
/// the parsing and coverage code can run against canned responses.
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a completion for the request
    fn generate(&self, request: &CompletionRequest) -> Result<String, Self::Error>;

    /// Model identifier, recorded in evaluation reports
    fn model_name(&self) -> &str;
}
