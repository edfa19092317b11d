//! LLM prompt engineering for article generation

use crate::config::GenerationConfig;
use crate::types::GenerationRequest;
use enmaster_domain::CompletionRequest;

/// System message for the generation call
pub const GENERATION_SYSTEM_PROMPT: &str = "You are an expert English teacher. Create educational articles that naturally incorporate the specified vocabulary words with bold formatting. Follow the exact format requested.";

/// Builds the article generation prompt
pub struct GenerationPromptBuilder<'a> {
    request: &'a GenerationRequest,
}

impl<'a> GenerationPromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(request: &'a GenerationRequest) -> Self {
        Self { request }
    }

    /// Build the user prompt
    pub fn build(&self) -> String {
        let req = self.request;
        let count = req.count;
        let mut prompt = String::new();

        // 1. Task and parameters
        prompt.push_str(&format!(
            "Please write {} English articles based on the following requirements:\n\n",
            count
        ));
        prompt.push_str(&format!(
            "Target words that MUST be included: {}\n",
            req.words.join(", ")
        ));
        prompt.push_str(&format!("Topic: {}\n", req.topic));
        prompt.push_str(&format!("Genre: {}\n", req.genre));
        prompt.push_str(&format!("Difficulty: {}\n\n", req.difficulty));

        // 2. Rules
        prompt.push_str("Requirements:\n");
        prompt.push_str(&format!(
            "1. Across ALL {} articles, each target word must appear at least {} times total\n",
            count, req.min_occurrences
        ));
        prompt.push_str("2. Write in clear, educational English\n");
        prompt.push_str("3. Make the target words BOLD using **word** format in the content\n");
        prompt.push_str("4. Ensure incorporating all target words\n\n");

        // 3. Delimiter grammar, one template per requested article
        prompt.push_str("Output format (VERY IMPORTANT):\n");
        prompt.push_str("Please use this EXACT format for each article:\n\n");
        for n in 1..=count {
            prompt.push_str(&article_template(n));
            prompt.push('\n');
        }

        prompt.push_str(FORMAT_REMINDER);
        prompt
    }

    /// Build the completion request, taking sampling settings from `config`
    pub fn completion(&self, config: &GenerationConfig) -> CompletionRequest {
        CompletionRequest::new(self.build())
            .with_system(GENERATION_SYSTEM_PROMPT)
            .with_max_tokens(config.max_tokens)
            .with_temperature(config.temperature)
    }
}

fn article_template(n: usize) -> String {
    format!(
        "=== ARTICLE {n} ===\n\
         Title: [Article title here]\n\
         Abstract: [Brief summary in 30-50 words]\n\
         ---\n\
         [Article content here with **target words** in bold]\n\
         === END ARTICLE {n} ===\n"
    )
}

const FORMAT_REMINDER: &str =
    "Make sure to use **bold** formatting for all target words when they appear in the content.";
