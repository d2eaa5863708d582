//! Prompt tuning config

use super::prompt_learning::PromptLearningConfig;
use crate::config::{BaseConfig, PeftConfig};
use crate::schema::{FieldKind, FieldSpec};
use crate::types::{PeftType, PromptTuningInit};
use serde::{Deserialize, Serialize};

/// Prompt tuning configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptTuningConfig {
    #[serde(flatten)]
    pub base: BaseConfig,
    #[serde(flatten)]
    pub prompt: PromptLearningConfig,
    pub prompt_tuning_init: PromptTuningInit,
    /// Text whose embedding seeds the virtual tokens when init is `TEXT`
    pub prompt_tuning_init_text: Option<String>,
    /// Tokenizer used to embed `prompt_tuning_init_text`
    pub tokenizer_name_or_path: Option<String>,
}

impl Default for PromptTuningConfig {
    fn default() -> Self {
        Self {
            base: BaseConfig::new(PeftType::PromptTuning),
            prompt: PromptLearningConfig::default(),
            prompt_tuning_init: PromptTuningInit::Random,
            prompt_tuning_init_text: None,
            tokenizer_name_or_path: None,
        }
    }
}

impl PromptTuningConfig {
    pub fn with_num_virtual_tokens(mut self, tokens: usize) -> Self {
        self.prompt.num_virtual_tokens = Some(tokens);
        self
    }

    /// Initialise virtual tokens from the embedding of `text`
    pub fn with_init_text(mut self, text: impl Into<String>, tokenizer: impl Into<String>) -> Self {
        self.prompt_tuning_init = PromptTuningInit::Text;
        self.prompt_tuning_init_text = Some(text.into());
        self.tokenizer_name_or_path = Some(tokenizer.into());
        self
    }
}

impl PeftConfig for PromptTuningConfig {
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
        FieldSpec::required("prompt_tuning_init", FieldKind::Choice(PromptTuningInit::NAMES)),
        FieldSpec::optional("prompt_tuning_init_text", FieldKind::String),
        FieldSpec::optional("tokenizer_name_or_path", FieldKind::String),
    ];

    fn base(&self) -> &BaseConfig {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseConfig {
        &mut self.base
    }
}
