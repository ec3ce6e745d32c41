//! Error types for the docqa answering engine
//!
//! Recoverable degradations (failed translation, failed similarity
//! scoring, empty segmentation) are absorbed at their call sites and
//! never appear here; this enum covers the failures that propagate
//! out of the core.

use thiserror::Error;

/// Main error type for the answering engine
#[derive(Error, Debug)]
pub enum QaError {
    /// Model or tokenizer could not be fetched/loaded at startup
    #[error("Model load failed: {0}")]
    ModelLoad(String),

    /// Tokenization of a (question, context) pair failed
    #[error("Tokenization failed: {0}")]
    Tokenization(String),

    /// Tensor computation failed during inference
    #[error("Inference failed: {0}")]
    Inference(#[from] candle_core::Error),

    /// Translation HTTP request failed
    #[error("Translation request failed: {0}")]
    Translation(#[from] reqwest::Error),

    /// Translation endpoint returned a payload we could not interpret
    #[error("Translation response had an unexpected shape")]
    TranslationFormat,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, QaError>;
