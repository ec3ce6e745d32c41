//! Span extraction stage: tokenize, infer, decode

use std::sync::Arc;

use candle_core::Device;
use hf_hub::{api::sync::Api, Repo, RepoType};
use tokenizers::{Tokenizer, TruncationParams, TruncationStrategy};

use crate::errors::{QaError, Result};
use crate::extract::model::{BertSpanModel, SpanModel};
use crate::extract::span::best_span;

/// Stage boundary for answer extraction; the engine only sees this.
pub trait ExtractAnswer: Send + Sync {
    /// Extract the best answer span for `question` from `context`.
    /// An empty string is a valid outcome meaning "no answer found".
    fn extract(&self, question: &str, context: &str) -> Result<String>;
}

/// Extractor that pairs a tokenizer with a span-scoring model.
///
/// The (question, context) pair is encoded jointly; truncation removes
/// context tokens only, so the question always survives in full.
pub struct SpanExtractor {
    tokenizer: Tokenizer,
    model: Arc<dyn SpanModel>,
}

impl SpanExtractor {
    /// Build an extractor from already-loaded parts.
    pub fn new(
        mut tokenizer: Tokenizer,
        model: Arc<dyn SpanModel>,
        max_seq_len: usize,
    ) -> Result<Self> {
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: max_seq_len,
                strategy: TruncationStrategy::OnlySecond,
                ..Default::default()
            }))
            .map_err(|e| QaError::Tokenization(e.to_string()))?;

        Ok(Self { tokenizer, model })
    }

    /// Download (if needed) the tokenizer and weights of `model_id`
    /// and load them onto `device`.
    pub fn load(model_id: &str, device: &Device, max_seq_len: usize) -> Result<Self> {
        let api = Api::new()
            .map_err(|e| QaError::ModelLoad(format!("HuggingFace API init failed: {e}")))?;
        let repo = api.repo(Repo::new(model_id.to_string(), RepoType::Model));
        let tokenizer_path = repo
            .get("tokenizer.json")
            .map_err(|e| QaError::ModelLoad(format!("{model_id}: tokenizer.json: {e}")))?;
        let tokenizer = Tokenizer::from_file(tokenizer_path)
            .map_err(|e| QaError::ModelLoad(format!("{model_id}: tokenizer load: {e}")))?;

        let model = BertSpanModel::load(model_id, device)?;
        Self::new(tokenizer, Arc::new(model), max_seq_len)
    }
}

impl ExtractAnswer for SpanExtractor {
    fn extract(&self, question: &str, context: &str) -> Result<String> {
        let encoding = self
            .tokenizer
            .encode((question, context), true)
            .map_err(|e| QaError::Tokenization(e.to_string()))?;

        let ids = encoding.get_ids();
        if ids.is_empty() {
            return Ok(String::new());
        }

        let (start_logits, end_logits) = self.model.span_logits(
            ids,
            encoding.get_type_ids(),
            encoding.get_attention_mask(),
        )?;

        let span = match best_span(&start_logits, &end_logits) {
            Some(span) => span,
            None => return Ok(String::new()),
        };

        // Stay inside the encoded sequence even if a model reports
        // logits longer than the input
        let end = span.end.min(ids.len() - 1);
        let start = span.start.min(end);

        let answer = self
            .tokenizer
            .decode(&ids[start..=end], true)
            .map_err(|e| QaError::Tokenization(e.to_string()))?;

        Ok(answer.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokenizers::models::wordlevel::WordLevel;
    use tokenizers::pre_tokenizers::whitespace::Whitespace;
    use tokenizers::pre_tokenizers::PreTokenizerWrapper;

    const WORDS: &[&str] = &[
        "[UNK]", "the", "sky", "is", "blue", "grass", "green", "what", "color", "water",
    ];

    fn tiny_tokenizer() -> Tokenizer {
        let vocab: HashMap<String, u32> = WORDS
            .iter()
            .enumerate()
            .map(|(i, w)| (w.to_string(), i as u32))
            .collect();
        let model = WordLevel::builder()
            .vocab(vocab)
            .unk_token("[UNK]".to_string())
            .build()
            .unwrap();
        let mut tokenizer = Tokenizer::new(model);
        let pre: PreTokenizerWrapper = Whitespace {}.into();
        tokenizer.with_pre_tokenizer(pre);
        tokenizer
    }

    /// Model with a single spike in each logit distribution
    struct PeakModel {
        start: usize,
        end: usize,
    }

    impl SpanModel for PeakModel {
        fn span_logits(
            &self,
            input_ids: &[u32],
            _type_ids: &[u32],
            _attention_mask: &[u32],
        ) -> Result<(Vec<f32>, Vec<f32>)> {
            let mut start = vec![0.0; input_ids.len()];
            let mut end = vec![0.0; input_ids.len()];
            start[self.start] = 10.0;
            end[self.end] = 10.0;
            Ok((start, end))
        }
    }

    /// Model whose inference always fails
    struct BrokenModel;

    impl SpanModel for BrokenModel {
        fn span_logits(&self, _: &[u32], _: &[u32], _: &[u32]) -> Result<(Vec<f32>, Vec<f32>)> {
            Err(QaError::Inference(candle_core::Error::Msg(
                "buffer exhausted".to_string(),
            )))
        }
    }

    const QUESTION: &str = "what color is grass";
    const CONTEXT: &str = "the sky is blue grass is green";
    // Encoded pair = 4 question tokens then 7 context tokens

    #[test]
    fn test_extract_decodes_predicted_span() {
        // "grass is green" inside the context portion
        let extractor =
            SpanExtractor::new(tiny_tokenizer(), Arc::new(PeakModel { start: 8, end: 10 }), 512)
                .unwrap();
        let answer = extractor.extract(QUESTION, CONTEXT).unwrap();
        assert_eq!(answer, "grass is green");
    }

    #[test]
    fn test_extract_clamps_degenerate_span() {
        // End spike before the start spike: single-token answer
        let extractor =
            SpanExtractor::new(tiny_tokenizer(), Arc::new(PeakModel { start: 10, end: 5 }), 512)
                .unwrap();
        let answer = extractor.extract(QUESTION, CONTEXT).unwrap();
        assert_eq!(answer, "green");
    }

    #[test]
    fn test_extract_propagates_inference_failure() {
        let extractor = SpanExtractor::new(tiny_tokenizer(), Arc::new(BrokenModel), 512).unwrap();
        let result = extractor.extract(QUESTION, CONTEXT);
        assert!(matches!(result, Err(QaError::Inference(_))));
    }

    #[test]
    fn test_truncation_keeps_question() {
        // Ceiling below question+context length: context tokens are
        // dropped, the full question is kept.
        let extractor =
            SpanExtractor::new(tiny_tokenizer(), Arc::new(PeakModel { start: 0, end: 3 }), 6)
                .unwrap();
        let answer = extractor.extract(QUESTION, CONTEXT).unwrap();
        assert_eq!(answer, "what color is grass");
    }
}
