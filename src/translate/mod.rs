//! Translation boundary
//!
//! The extraction model only understands English; non-English requests
//! pass through a translator on the way in and out. Failures here are
//! expected (network, unsupported input) and the engine degrades to
//! the untranslated text, so implementations report errors honestly
//! and leave the fallback decision to the caller.

pub mod google;

pub use google::GoogleTranslator;

use async_trait::async_trait;

use crate::errors::Result;
use crate::language::Language;

/// Two-way translation between the working language (English) and a
/// target language
#[async_trait]
pub trait Translate: Send + Sync {
    /// Translate text of any (auto-detected) language to English
    async fn to_english(&self, text: &str) -> Result<String>;

    /// Translate English text to the target language
    async fn from_english(&self, text: &str, target: Language) -> Result<String>;
}
