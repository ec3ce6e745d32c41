//! Supported output languages
//!
//! The extraction model operates in English; Hindi and Kannada are
//! supported at the boundary through translation. Anything outside
//! the allow-list is normalized to English.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target language for question/answer translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Kn,
}

impl Language {
    /// Normalize a raw language string to a supported language.
    ///
    /// Input is lowercased and trimmed; unrecognized values map to
    /// English rather than erroring.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "hi" => Language::Hi,
            "kn" => Language::Kn,
            _ => Language::En,
        }
    }

    /// ISO 639-1 code used on the translation wire
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Kn => "kn",
        }
    }

    /// True when no translation is needed
    pub fn is_english(&self) -> bool {
        matches!(self, Language::En)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported() {
        assert_eq!(Language::parse("en"), Language::En);
        assert_eq!(Language::parse("hi"), Language::Hi);
        assert_eq!(Language::parse("kn"), Language::Kn);
    }

    #[test]
    fn test_parse_case_and_whitespace() {
        assert_eq!(Language::parse(" HI "), Language::Hi);
        assert_eq!(Language::parse("Kn"), Language::Kn);
    }

    #[test]
    fn test_parse_unrecognized_defaults_to_english() {
        assert_eq!(Language::parse("fr"), Language::En);
        assert_eq!(Language::parse(""), Language::En);
        assert_eq!(Language::parse("hindi"), Language::En);
    }

    #[test]
    fn test_code_roundtrip() {
        for lang in [Language::En, Language::Hi, Language::Kn] {
            assert_eq!(Language::parse(lang.code()), lang);
        }
    }
}
