//! Answering engine orchestrator
//!
//! One request = Translator in -> Relevance Selector -> Span Extractor
//! -> Translator out. The engine is built once at process start, owns
//! its stages behind `Arc`, and never mutates them, so a single
//! instance can serve concurrent requests.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::device::best_device;
use crate::embedding::{Embed, EmbeddingEngine};
use crate::errors::Result;
use crate::extract::{ExtractAnswer, SpanExtractor};
use crate::language::Language;
use crate::relevance::RelevanceSelector;
use crate::translate::{GoogleTranslator, Translate};

/// Extractive QA engine over a text passage
pub struct AnsweringEngine {
    translator: Arc<dyn Translate>,
    selector: RelevanceSelector,
    extractor: Arc<dyn ExtractAnswer>,
    translation_enabled: bool,
}

impl AnsweringEngine {
    /// Build the full engine from configuration: downloads/loads both
    /// models onto the best available device and wires up the
    /// translation client. Call once at process start.
    pub fn new(config: &Config) -> Result<Self> {
        let device = best_device();

        let embedder = EmbeddingEngine::load(&config.engine.embedding_model, &device)?;
        let extractor =
            SpanExtractor::load(&config.engine.qa_model, &device, config.engine.max_seq_len)?;
        let translator =
            GoogleTranslator::new(Duration::from_secs(config.translation.timeout_secs))?;

        Ok(Self::with_components(
            Arc::new(translator),
            Arc::new(embedder),
            Arc::new(extractor),
            config.engine.top_k,
            config.translation.enabled,
        ))
    }

    /// Assemble an engine from explicit components. This is the
    /// injection seam for tests and alternative backends.
    pub fn with_components(
        translator: Arc<dyn Translate>,
        embedder: Arc<dyn Embed>,
        extractor: Arc<dyn ExtractAnswer>,
        top_k: usize,
        translation_enabled: bool,
    ) -> Self {
        Self {
            translator,
            selector: RelevanceSelector::new(embedder, top_k),
            extractor,
            translation_enabled,
        }
    }

    /// Answer `question` from `context`, translating in and out of
    /// English when `target` is not English.
    ///
    /// Returns an empty string when the model finds no answer; errors
    /// only on tokenization/inference failure.
    pub async fn get_answer(
        &self,
        context: &str,
        question: &str,
        target: Language,
    ) -> Result<String> {
        let translating = self.translation_enabled && !target.is_english();

        let (context_en, question_en) = if translating {
            (
                self.to_english_or_original(context).await,
                self.to_english_or_original(question).await,
            )
        } else {
            (context.to_string(), question.to_string())
        };

        let focused = self.selector.select(&context_en, &question_en);
        let answer = self.extractor.extract(&question_en, &focused)?;

        if translating && !answer.is_empty() {
            return Ok(self.from_english_or_original(&answer, target).await);
        }

        Ok(answer)
    }

    /// Translation failure degrades to the untranslated text.
    async fn to_english_or_original(&self, text: &str) -> String {
        match self.translator.to_english(text).await {
            Ok(translated) if !translated.is_empty() => translated,
            Ok(_) => text.to_string(),
            Err(err) => {
                tracing::warn!("Translation to English failed ({err}), using original text");
                text.to_string()
            }
        }
    }

    async fn from_english_or_original(&self, text: &str, target: Language) -> String {
        match self.translator.from_english(text, target).await {
            Ok(translated) if !translated.is_empty() => translated,
            Ok(_) => text.to_string(),
            Err(err) => {
                tracing::warn!("Translation to {target} failed ({err}), returning English answer");
                text.to_string()
            }
        }
    }
}
