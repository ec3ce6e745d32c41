//! Relevance filtering for long contexts
//!
//! The span-extraction model has a hard input ceiling; instead of
//! blind positional truncation, the context is segmented into
//! sentences and the top-k most question-similar ones are kept, in
//! original document order.

pub mod segmenter;
pub mod selector;

pub use segmenter::split_sentences;
pub use selector::RelevanceSelector;
