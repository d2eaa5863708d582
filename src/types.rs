//! Adapter method identifiers and enumerated field values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Adapter method, as written in the `peft_type` discriminator.
///
/// Configs store the discriminator as a plain string so that unrecognised
/// values survive a save/load cycle; this enum is what the registry
/// dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeftType {
    /// Low-rank adaptation
    Lora,
    /// Prompt encoder (P-tuning)
    PTuning,
    PrefixTuning,
    PromptTuning,
}

impl PeftType {
    pub const ALL: [PeftType; 4] =
        [Self::Lora, Self::PTuning, Self::PrefixTuning, Self::PromptTuning];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lora => "LORA",
            Self::PTuning => "P_TUNING",
            Self::PrefixTuning => "PREFIX_TUNING",
            Self::PromptTuning => "PROMPT_TUNING",
        }
    }
}

impl fmt::Display for PeftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PeftType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "LORA" => Ok(Self::Lora),
            "P_TUNING" => Ok(Self::PTuning),
            "PREFIX_TUNING" => Ok(Self::PrefixTuning),
            "PROMPT_TUNING" => Ok(Self::PromptTuning),
            _ => Err(format!(
                "Unknown peft_type: {s}. Use: LORA, P_TUNING, PREFIX_TUNING, PROMPT_TUNING"
            )),
        }
    }
}

/// Downstream task an adapter is trained for.
///
/// Like `peft_type`, configs keep `task_type` as a free string; this enum is
/// a convenience for callers building configs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskType {
    SeqCls,
    #[serde(rename = "SEQ_2_SEQ_LM")]
    Seq2SeqLm,
    CausalLm,
    TokenCls,
}

impl TaskType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SeqCls => "SEQ_CLS",
            Self::Seq2SeqLm => "SEQ_2_SEQ_LM",
            Self::CausalLm => "CAUSAL_LM",
            Self::TokenCls => "TOKEN_CLS",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Network used to reparameterize prompt-encoder virtual tokens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncoderReparameterization {
    #[default]
    #[serde(rename = "MLP")]
    Mlp,
    #[serde(rename = "LSTM")]
    Lstm,
}

impl EncoderReparameterization {
    pub const NAMES: &'static [&'static str] = &["MLP", "LSTM"];
}

/// How prompt-tuning virtual tokens are initialised
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PromptTuningInit {
    /// From the embedding of `prompt_tuning_init_text`
    Text,
    #[default]
    Random,
}

impl PromptTuningInit {
    pub const NAMES: &'static [&'static str] = &["TEXT", "RANDOM"];
}
