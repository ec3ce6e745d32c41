//! Extractive answer span prediction
//!
//! Components:
//! - Span: argmax decoding over start/end logits with degenerate-span
//!   clamping
//! - Model: candle BERT encoder plus the SQuAD-style qa_outputs head
//! - Extractor: joint tokenization, inference, and token-to-text decode

pub mod extractor;
pub mod model;
pub mod span;

pub use extractor::{ExtractAnswer, SpanExtractor};
pub use model::{BertSpanModel, SpanModel};
pub use span::TokenSpan;
