use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::errors::{QaError, Result};

/// Default extractive-QA checkpoint (SQuAD2-tuned BERT)
pub const DEFAULT_QA_MODEL: &str = "deepset/bert-base-cased-squad2";
/// Default sentence-embedding checkpoint for relevance scoring
pub const DEFAULT_EMBEDDING_MODEL: &str = "sentence-transformers/all-MiniLM-L6-v2";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// HuggingFace model id for span extraction
    #[serde(default = "default_qa_model")]
    pub qa_model: String,
    /// HuggingFace model id for sentence embeddings
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,
    /// Number of sentences kept by the relevance selector
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Token ceiling for the joint (question, context) encoding
    #[serde(default = "default_max_seq_len")]
    pub max_seq_len: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Enable translation for non-English target languages
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Per-request timeout for the translation endpoint
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_qa_model() -> String {
    DEFAULT_QA_MODEL.to_string()
}

fn default_embedding_model() -> String {
    DEFAULT_EMBEDDING_MODEL.to_string()
}

fn default_top_k() -> usize {
    3
}

fn default_max_seq_len() -> usize {
    512
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            qa_model: default_qa_model(),
            embedding_model: default_embedding_model(),
            top_k: default_top_k(),
            max_seq_len: default_max_seq_len(),
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            translation: TranslationConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating the default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&contents)
            .map_err(|e| QaError::Config(format!("Failed to parse config file: {e}")))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| QaError::Config(format!("Failed to serialize config: {e}")))?;
        fs::write(&config_path, toml_string)?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| QaError::Config("Could not determine home directory".to_string()))?;

        Ok(home.join(".docqa").join("config.toml"))
    }
}
