//! docqa - extractive question answering over text passages
//!
//! Answers natural-language questions against a supplied plain-text
//! context, optionally translating question and answer between English
//! and a small set of target languages.
//!
//! # Architecture
//!
//! - **Translator**: normalizes input to English and localizes the
//!   answer; failures degrade silently to untranslated text
//! - **Relevance Selector**: embedding-similarity top-k sentence
//!   filtering so long contexts fit the model's token ceiling
//! - **Span Extractor**: extractive-QA inference and argmax span
//!   decoding
//!
//! All model resources are loaded once into an [`AnsweringEngine`]
//! and shared read-only across requests.

pub mod config;
pub mod device;
pub mod embedding;
pub mod engine;
pub mod errors;
pub mod extract;
pub mod language;
pub mod relevance;
pub mod translate;

pub mod cli;

// Re-export commonly used types
pub use config::Config;
pub use engine::AnsweringEngine;
pub use errors::{QaError, Result};
pub use language::Language;
