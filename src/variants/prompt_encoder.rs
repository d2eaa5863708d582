//! P-tuning prompt encoder config

use super::prompt_learning::PromptLearningConfig;
use crate::config::{BaseConfig, PeftConfig};
use crate::schema::{FieldKind, FieldSpec};
use crate::types::{EncoderReparameterization, PeftType};
use serde::{Deserialize, Serialize};

/// Prompt encoder (P-tuning) configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptEncoderConfig {
    #[serde(flatten)]
    pub base: BaseConfig,
    #[serde(flatten)]
    pub prompt: PromptLearningConfig,
    pub encoder_reparameterization_type: EncoderReparameterization,
    /// Hidden size of the reparameterization network
    pub encoder_hidden_size: Option<usize>,
    pub encoder_num_layers: usize,
    pub encoder_dropout: f64,
}

impl Default for PromptEncoderConfig {
    fn default() -> Self {
        Self {
            base: BaseConfig::new(PeftType::PTuning),
            prompt: PromptLearningConfig::default(),
            encoder_reparameterization_type: EncoderReparameterization::Mlp,
            encoder_hidden_size: None,
            encoder_num_layers: 2,
            encoder_dropout: 0.0,
        }
    }
}

impl PromptEncoderConfig {
    pub fn with_num_virtual_tokens(mut self, tokens: usize) -> Self {
        self.prompt.num_virtual_tokens = Some(tokens);
        self
    }

    pub fn with_reparameterization(mut self, kind: EncoderReparameterization) -> Self {
        self.encoder_reparameterization_type = kind;
        self
    }

    pub fn with_encoder_hidden_size(mut self, hidden: usize) -> Self {
        self.encoder_hidden_size = Some(hidden);
        self
    }
}

impl PeftConfig for PromptEncoderConfig {
    const FIELDS: &'static [FieldSpec] = &[
        BaseConfig::FIELDS[0],
        BaseConfig::FIELDS[1],
        BaseConfig::FIELDS[2],
        BaseConfig::FIELDS[3],
        PromptLearningConfig::FIELDS[0],
        PromptLearningConfig::FIELDS[1],
        PromptLearningConfig::FIELDS[2],
        PromptLearningConfig::FIELDS[3],
        PromptLearningConfig::FIELDS[4],
        FieldSpec::required(
            "encoder_reparameterization_type",
            FieldKind::Choice(EncoderReparameterization::NAMES),
        ),
        FieldSpec::optional("encoder_hidden_size", FieldKind::Integer),
        FieldSpec::required("encoder_num_layers", FieldKind::Integer),
        FieldSpec::required("encoder_dropout", FieldKind::Float),
    ];

    fn base(&self) -> &BaseConfig {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseConfig {
        &mut self.base
    }
}
