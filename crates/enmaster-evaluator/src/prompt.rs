//! LLM prompt engineering for translation evaluation

use crate::config::EvaluationConfig;
use crate::types::SentencePair;
use enmaster_domain::CompletionRequest;

/// Builds the evaluation prompt
pub struct EvaluationPromptBuilder<'a> {
    pairs: &'a [SentencePair],
    target_language: &'a str,
}

impl<'a> EvaluationPromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(pairs: &'a [SentencePair], target_language: &'a str) -> Self {
        Self {
            pairs,
            target_language,
        }
    }

    /// System message for the evaluation call
    pub fn system(&self) -> String {
        format!(
            "You are a senior English-to-{} translation assessor with extensive teaching experience. \
             Evaluate translation quality objectively and give constructive suggestions. \
             Use markdown emphasis for key points.",
            self.target_language
        )
    }

    /// Build the user prompt
    pub fn build(&self) -> String {
        let lang = self.target_language;
        let mut prompt = format!(
            "Please act as a professional translation assessor and evaluate the following English-to-{} translation in detail:\n",
            lang
        );

        // 1. Sentence pairs
        for pair in self.pairs {
            prompt.push_str(&format!(
                "\nSentence {}:\nOriginal: {}\nUser translation: {}\n",
                pair.index, pair.original, pair.translation
            ));
        }

        // 2. Per-sentence rubric
        prompt.push_str(
            "\nEvaluate every sentence using exactly this format. If the user most likely \
             skipped, added or shifted a sentence, realign the pairs yourself.\n\n",
        );
        prompt.push_str("## **SENTENCE 1**\n\n");
        prompt.push_str("**Original**: [English sentence]\n");
        prompt.push_str("**User translation**: [the user's translation]\n");
        prompt.push_str(&format!("**Reference translation**: [your reference {} translation]\n", lang));
        prompt.push_str(&format!("***Fluent translation***: [a more natural, idiomatic {} rendering]\n", lang));
        prompt.push_str("**Score**: [1-10]\n");
        prompt.push_str("**Comments**: [detailed feedback on ***vocabulary***, ~~grammar~~ and *fluency*]\n\n");
        prompt.push_str("## **SENTENCE 2**\n\n[same format...]\n\n");

        // 3. Overall assessment
        prompt.push_str("Finally, give an overall assessment:\n\n");
        prompt.push_str("## **OVERALL ASSESSMENT**\n\n");
        prompt.push_str("**Overall score**: [1-10]\n");
        prompt.push_str("**Summary**: [overall quality of the translation]\n");
        prompt.push_str("***Strengths***: [main strengths]\n");
        prompt.push_str("~~Problems~~: [main problems to fix]\n");
        prompt.push_str("***Suggestions***: [concrete next steps]\n\n");

        // 4. Scoring bands
        prompt.push_str("**Scoring bands**:\n");
        prompt.push_str(&format!(
            "- **9-10**: accurate and fluent, fully natural {}\n",
            lang
        ));
        prompt.push_str("- **7-8**: mostly accurate and fluent, minor issues\n");
        prompt.push_str("- **5-6**: meaning correct but clear vocabulary or grammar problems\n");
        prompt.push_str("- **3-4**: partly correct with many errors\n");
        prompt.push_str("- **1-2**: many errors that seriously affect understanding\n\n");

        prompt.push_str(
            "Use markdown emphasis for key points: **bold**, ***bold italic***, ~~strikethrough~~, *italic*.",
        );
        prompt
    }

    /// Build the completion request, taking sampling settings from `config`
    pub fn completion(&self, config: &EvaluationConfig) -> CompletionRequest {
        CompletionRequest::new(self.build())
            .with_system(self.system())
            .with_max_tokens(config.max_tokens)
            .with_temperature(config.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs() -> Vec<SentencePair> {
        vec![
            SentencePair {
                index: 1,
                original: "The market opened early".to_string(),
                translation: "市场很早就开门了".to_string(),
            },
            SentencePair {
                index: 2,
                original: "Everyone was hungry".to_string(),
                translation: "大家都饿了".to_string(),
            },
        ]
    }

    #[test]
    fn test_prompt_lists_every_pair() {
        let pairs = pairs();
        let prompt = EvaluationPromptBuilder::new(&pairs, "Chinese").build();

        assert!(prompt.contains("Sentence 1:\nOriginal: The market opened early\nUser translation: 市场很早就开门了"));
        assert!(prompt.contains("Sentence 2:\nOriginal: Everyone was hungry"));
        assert!(prompt.contains("## **OVERALL ASSESSMENT**"));
        assert!(prompt.contains("- **1-2**"));
    }

    #[test]
    fn test_target_language_is_configurable() {
        let pairs = pairs();
        let builder = EvaluationPromptBuilder::new(&pairs, "Spanish");
        assert!(builder.build().contains("English-to-Spanish"));
        assert!(builder.system().contains("English-to-Spanish"));
    }

    #[test]
    fn test_completion_carries_sampling_settings() {
        let pairs = pairs();
        let config = EvaluationConfig::default();
        let request = EvaluationPromptBuilder::new(&pairs, &config.target_language).completion(&config);

        assert_eq!(request.max_tokens, 4000);
        assert!((request.temperature - 0.3).abs() < f32::EPSILON);
        assert!(request.system.is_some());
    }
}
