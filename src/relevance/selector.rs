//! Top-k sentence selection by embedding similarity

use std::cmp::Ordering;
use std::sync::Arc;

use crate::embedding::Embed;
use crate::relevance::split_sentences;

/// Reduces a context to its `top_k` most question-relevant sentences.
///
/// Every failure path falls back to the full, unfiltered context: an
/// unanswerable model input is worse than an unfocused one.
pub struct RelevanceSelector {
    embedder: Arc<dyn Embed>,
    top_k: usize,
}

impl RelevanceSelector {
    pub fn new(embedder: Arc<dyn Embed>, top_k: usize) -> Self {
        Self { embedder, top_k }
    }

    /// Build the focused context for `question`.
    pub fn select(&self, context: &str, question: &str) -> String {
        let sentences = split_sentences(context);
        if sentences.is_empty() {
            tracing::warn!("Segmentation produced no sentences, using full context");
            return context.to_string();
        }

        let question_vec = match self.embedder.embed(question) {
            Ok(v) => v,
            Err(err) => {
                tracing::warn!("Question embedding failed ({err}), using full context");
                return context.to_string();
            }
        };

        let scores: Vec<f32> = sentences
            .iter()
            .map(|sentence| match self.embedder.embed(sentence) {
                Ok(v) => cosine(&question_vec, &v),
                Err(err) => {
                    tracing::warn!("Sentence embedding failed ({err}), scoring 0.0");
                    0.0
                }
            })
            .collect();

        let picked = top_k_by_score(&scores, self.top_k);
        tracing::debug!(
            "Selected {}/{} sentences for focused context",
            picked.len(),
            sentences.len()
        );

        let focused = picked
            .iter()
            .map(|&i| sentences[i].as_str())
            .collect::<Vec<_>>()
            .join(" ");

        if focused.is_empty() {
            context.to_string()
        } else {
            focused
        }
    }
}

/// Indices of the `k` highest scores, returned in ascending index
/// order so the focused context reads in document order.
///
/// Ties break toward the earlier sentence; NaN compares equal to
/// everything, which keeps the result deterministic.
pub(crate) fn top_k_by_score(scores: &[f32], k: usize) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    ranked.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });
    ranked.truncate(k.min(scores.len()));
    ranked.sort_unstable();
    ranked
}

/// Cosine similarity; 0.0 for empty, mismatched, or zero-norm vectors.
pub(crate) fn cosine(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a <= 0.0 || norm_b <= 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}
