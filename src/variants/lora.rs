//! LoRA (Low-Rank Adaptation) adapter config
//!
//! Serializes to the `adapter_config.json` layout read by
//! `peft.PeftModel.from_pretrained()`.

use crate::config::{BaseConfig, PeftConfig};
use crate::schema::{FieldKind, FieldSpec};
use crate::types::PeftType;
use serde::{Deserialize, Serialize};

/// LoRA adapter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoraConfig {
    #[serde(flatten)]
    pub base: BaseConfig,
    /// LoRA rank
    pub r: usize,
    /// Module names to adapt; `None` lets the consumer pick per architecture
    pub target_modules: Option<Vec<String>>,
    /// LoRA alpha scaling parameter
    pub lora_alpha: usize,
    /// LoRA dropout probability
    pub lora_dropout: f64,
    /// Merge adapter weights into the base weights in eval mode
    pub merge_weights: bool,
    /// Set when the target layer stores weights as (fan_in, fan_out)
    pub fan_in_fan_out: bool,
    /// Per-projection enable flags for fused qkv layers
    pub enable_lora: Option<Vec<bool>>,
    /// Bias handling: "none", "all", or "lora_only"
    pub bias: String,
    /// Extra modules trained and saved alongside the adapter
    pub modules_to_save: Option<Vec<String>>,
}

impl Default for LoraConfig {
    fn default() -> Self {
        Self {
            base: BaseConfig::new(PeftType::Lora),
            r: 8,
            target_modules: None,
            lora_alpha: 8,
            lora_dropout: 0.0,
            merge_weights: false,
            fan_in_fan_out: false,
            enable_lora: None,
            bias: "none".to_string(),
            modules_to_save: None,
        }
    }
}

impl LoraConfig {
    pub fn new(r: usize, lora_alpha: usize) -> Self {
        Self { r, lora_alpha, ..Self::default() }
    }

    /// Set LoRA rank
    pub fn with_r(mut self, r: usize) -> Self {
        self.r = r;
        self
    }

    /// Set alpha scaling
    pub fn with_lora_alpha(mut self, lora_alpha: usize) -> Self {
        self.lora_alpha = lora_alpha;
        self
    }

    /// Set dropout rate
    pub fn with_dropout(mut self, dropout: f64) -> Self {
        self.lora_dropout = dropout;
        self
    }

    pub fn with_target_modules<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_modules = Some(modules.into_iter().map(Into::into).collect());
        self
    }

    /// Set bias handling mode
    pub fn with_bias(mut self, bias: impl Into<String>) -> Self {
        self.bias = bias.into();
        self
    }

    pub fn with_modules_to_save<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modules_to_save = Some(modules.into_iter().map(Into::into).collect());
        self
    }

    /// Effective scale applied to the low-rank update (alpha / r)
    pub fn scaling(&self) -> f64 {
        if self.r == 0 {
            return 0.0;
        }
        self.lora_alpha as f64 / self.r as f64
    }
}

impl PeftConfig for LoraConfig {
    const FIELDS: &'static [FieldSpec] = &[
        BaseConfig::FIELDS[0],
        BaseConfig::FIELDS[1],
        BaseConfig::FIELDS[2],
        BaseConfig::FIELDS[3],
        FieldSpec::required("r", FieldKind::Integer),
        FieldSpec::optional("target_modules", FieldKind::StringList),
        FieldSpec::required("lora_alpha", FieldKind::Integer),
        FieldSpec::required("lora_dropout", FieldKind::Float),
        FieldSpec::required("merge_weights", FieldKind::Bool),
        FieldSpec::required("fan_in_fan_out", FieldKind::Bool),
        FieldSpec::optional("enable_lora", FieldKind::BoolList),
        FieldSpec::required("bias", FieldKind::String),
        FieldSpec::optional("modules_to_save", FieldKind::StringList),
    ];

    fn base(&self) -> &BaseConfig {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseConfig {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = LoraConfig::default();
        assert_eq!(config.peft_type(), "LORA");
        assert_eq!(config.r, 8);
        assert_eq!(config.lora_alpha, 8);
        assert_eq!(config.lora_dropout, 0.0);
        assert_eq!(config.bias, "none");
        assert!(config.target_modules.is_none());
    }

    #[test]
    fn test_builder_methods() {
        let config = LoraConfig::new(16, 32)
            .with_dropout(0.1)
            .with_target_modules(["q_proj", "v_proj"])
            .with_bias("lora_only")
            .with_modules_to_save(["classifier"]);

        assert_eq!(config.r, 16);
        assert_eq!(config.lora_alpha, 32);
        assert_eq!(config.lora_dropout, 0.1);
        assert_eq!(config.target_modules, Some(vec!["q_proj".to_string(), "v_proj".to_string()]));
        assert_eq!(config.bias, "lora_only");
        assert_eq!(config.modules_to_save, Some(vec!["classifier".to_string()]));
    }

    #[test]
    fn test_scaling() {
        assert_eq!(LoraConfig::new(8, 16).scaling(), 2.0);
        assert_eq!(LoraConfig::new(0, 16).scaling(), 0.0);
    }

    #[test]
    fn test_to_dict_is_flat() {
        let dict = LoraConfig::new(8, 16).with_dropout(0.1).to_dict().unwrap();
        assert_eq!(dict.get("peft_type"), Some(&json!("LORA")));
        assert_eq!(dict.get("r"), Some(&json!(8)));
        assert_eq!(dict.get("lora_alpha"), Some(&json!(16)));
        assert_eq!(dict.get("lora_dropout"), Some(&json!(0.1)));
        assert_eq!(dict.get("target_modules"), Some(&json!(null)));
        assert!(!dict.contains("base"));
    }

    #[test]
    fn test_json_schema_keys() {
        let json = LoraConfig::default().to_dict().unwrap().to_json_pretty().unwrap();
        for key in ["\"peft_type\"", "\"r\"", "\"lora_alpha\"", "\"target_modules\"", "\"bias\""] {
            assert!(json.contains(key), "missing {key}");
        }
    }
}
