//! Prefix tuning config

use super::prompt_learning::PromptLearningConfig;
use crate::config::{BaseConfig, PeftConfig};
use crate::schema::{FieldKind, FieldSpec};
use crate::types::PeftType;
use serde::{Deserialize, Serialize};

/// Prefix tuning configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefixTuningConfig {
    #[serde(flatten)]
    pub base: BaseConfig,
    #[serde(flatten)]
    pub prompt: PromptLearningConfig,
    /// Hidden size of the prefix projection
    pub encoder_hidden_size: Option<usize>,
    /// Reparameterize the prefix through an MLP
    pub prefix_projection: bool,
}

impl Default for PrefixTuningConfig {
    fn default() -> Self {
        Self {
            base: BaseConfig::new(PeftType::PrefixTuning),
            prompt: PromptLearningConfig::default(),
            encoder_hidden_size: None,
            prefix_projection: false,
        }
    }
}

impl PrefixTuningConfig {
    pub fn with_num_virtual_tokens(mut self, tokens: usize) -> Self {
        self.prompt.num_virtual_tokens = Some(tokens);
        self
    }

    pub fn with_prefix_projection(mut self, hidden: usize) -> Self {
        self.prefix_projection = true;
        self.encoder_hidden_size = Some(hidden);
        self
    }
}

impl PeftConfig for PrefixTuningConfig {
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
        FieldSpec::optional("encoder_hidden_size", FieldKind::Integer),
        FieldSpec::required("prefix_projection", FieldKind::Bool),
    ];

    fn base(&self) -> &BaseConfig {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseConfig {
        &mut self.base
    }
}
