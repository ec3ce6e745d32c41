//! Candle-backed sentence embedding engine

use candle_core::{Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config as BertConfig, DTYPE};
use hf_hub::{api::sync::Api, Repo, RepoType};
use tokenizers::Tokenizer;

use crate::embedding::Embed;
use crate::errors::{QaError, Result};

/// Sentence embedder built on a BERT-family checkpoint.
///
/// Weights and tokenizer are fetched from the HuggingFace Hub once at
/// construction; after that the engine is immutable and safe to share
/// across concurrent requests.
pub struct EmbeddingEngine {
    model: BertModel,
    tokenizer: Tokenizer,
    device: Device,
}

impl EmbeddingEngine {
    /// Download (if needed) and load the embedding model onto `device`.
    pub fn load(model_id: &str, device: &Device) -> Result<Self> {
        let api = Api::new()
            .map_err(|e| QaError::ModelLoad(format!("HuggingFace API init failed: {e}")))?;
        let repo = api.repo(Repo::new(model_id.to_string(), RepoType::Model));

        let config_path = repo
            .get("config.json")
            .map_err(|e| QaError::ModelLoad(format!("{model_id}: config.json: {e}")))?;
        let tokenizer_path = repo
            .get("tokenizer.json")
            .map_err(|e| QaError::ModelLoad(format!("{model_id}: tokenizer.json: {e}")))?;
        let weights_path = repo
            .get("model.safetensors")
            .map_err(|e| QaError::ModelLoad(format!("{model_id}: model.safetensors: {e}")))?;

        let config_contents = std::fs::read_to_string(config_path)?;
        let config: BertConfig = serde_json::from_str(&config_contents)?;

        let tokenizer = Tokenizer::from_file(tokenizer_path)
            .map_err(|e| QaError::ModelLoad(format!("{model_id}: tokenizer load: {e}")))?;

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], DTYPE, device)?
        };
        let model = BertModel::load(vb, &config)?;

        tracing::info!("Embedding model {model_id} loaded");

        Ok(Self {
            model,
            tokenizer,
            device: device.clone(),
        })
    }

    /// Mean-pool token embeddings under the attention mask, then
    /// L2-normalize so cosine similarity reduces to a dot product.
    fn pool_and_normalize(&self, hidden: &Tensor, mask: &Tensor) -> Result<Vec<f32>> {
        let mask = mask.unsqueeze(2)?.to_dtype(hidden.dtype())?;
        let summed = hidden.broadcast_mul(&mask)?.sum(1)?;
        let counts = mask.sum(1)?.clamp(1e-9, f64::MAX)?;
        let mean = summed.broadcast_div(&counts)?;

        let norm = mean.sqr()?.sum_keepdim(1)?.sqrt()?.clamp(1e-9, f64::MAX)?;
        let normalized = mean.broadcast_div(&norm)?;

        Ok(normalized.squeeze(0)?.to_vec1::<f32>()?)
    }
}

impl Embed for EmbeddingEngine {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| QaError::Tokenization(e.to_string()))?;

        let len = encoding.get_ids().len();
        let input_ids = Tensor::from_vec(encoding.get_ids().to_vec(), (1, len), &self.device)?;
        let type_ids = Tensor::from_vec(encoding.get_type_ids().to_vec(), (1, len), &self.device)?;
        let attention: Vec<u32> = encoding.get_attention_mask().to_vec();
        let attention = Tensor::from_vec(attention, (1, len), &self.device)?;

        let hidden = self
            .model
            .forward(&input_ids, &type_ids, Some(&attention))?;

        self.pool_and_normalize(&hidden, &attention)
    }
}
