//! Candle-backed extractive-QA model

use candle_core::{Device, Tensor};
use candle_nn::{Linear, Module, VarBuilder};
use candle_transformers::models::bert::{BertModel, Config as BertConfig, DTYPE};
use hf_hub::{api::sync::Api, Repo, RepoType};

use crate::errors::{QaError, Result};

/// Produces start/end position logits for an encoded
/// (question, context) sequence.
///
/// Inference-level failures propagate; unlike translation or
/// relevance scoring there is no safe degraded answer here.
pub trait SpanModel: Send + Sync {
    fn span_logits(
        &self,
        input_ids: &[u32],
        type_ids: &[u32],
        attention_mask: &[u32],
    ) -> Result<(Vec<f32>, Vec<f32>)>;
}

/// BERT encoder with the SQuAD-style `qa_outputs` linear head that
/// maps each token's hidden state to a (start, end) score pair.
pub struct BertSpanModel {
    model: BertModel,
    qa_outputs: Linear,
    device: Device,
}

impl BertSpanModel {
    /// Download (if needed) and load a squad2-style checkpoint onto
    /// `device`.
    pub fn load(model_id: &str, device: &Device) -> Result<Self> {
        let api = Api::new()
            .map_err(|e| QaError::ModelLoad(format!("HuggingFace API init failed: {e}")))?;
        let repo = api.repo(Repo::new(model_id.to_string(), RepoType::Model));

        let config_path = repo
            .get("config.json")
            .map_err(|e| QaError::ModelLoad(format!("{model_id}: config.json: {e}")))?;
        let weights_path = repo
            .get("model.safetensors")
            .map_err(|e| QaError::ModelLoad(format!("{model_id}: model.safetensors: {e}")))?;

        let config_contents = std::fs::read_to_string(config_path)?;
        let config: BertConfig = serde_json::from_str(&config_contents)?;

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], DTYPE, device)?
        };
        // BertModel::load resolves the checkpoint's "bert." prefix itself
        let model = BertModel::load(vb.clone(), &config)?;
        let qa_outputs = candle_nn::linear(config.hidden_size, 2, vb.pp("qa_outputs"))?;

        tracing::info!("QA model {model_id} loaded");

        Ok(Self {
            model,
            qa_outputs,
            device: device.clone(),
        })
    }
}

impl SpanModel for BertSpanModel {
    fn span_logits(
        &self,
        input_ids: &[u32],
        type_ids: &[u32],
        attention_mask: &[u32],
    ) -> Result<(Vec<f32>, Vec<f32>)> {
        let len = input_ids.len();
        let input_ids = Tensor::from_vec(input_ids.to_vec(), (1, len), &self.device)?;
        let type_ids = Tensor::from_vec(type_ids.to_vec(), (1, len), &self.device)?;
        let attention = Tensor::from_vec(attention_mask.to_vec(), (1, len), &self.device)?;

        let hidden = self.model.forward(&input_ids, &type_ids, Some(&attention))?;
        let logits = self.qa_outputs.forward(&hidden)?; // (1, len, 2)

        let start = logits.narrow(2, 0, 1)?.squeeze(2)?.squeeze(0)?.to_vec1::<f32>()?;
        let end = logits.narrow(2, 1, 1)?.squeeze(2)?.squeeze(0)?.to_vec1::<f32>()?;

        Ok((start, end))
    }
}
