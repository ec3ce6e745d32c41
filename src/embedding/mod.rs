//! Sentence embeddings for relevance scoring
//!
//! The selector only needs a vector per text; `Embed` is the seam
//! between it and the concrete candle-backed engine so tests can
//! substitute deterministic embedders.

pub mod engine;

pub use engine::EmbeddingEngine;

use crate::errors::Result;

/// Produces a fixed-dimension embedding vector for a text
pub trait Embed: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>>;
}
