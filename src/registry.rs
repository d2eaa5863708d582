//! Closed set of adapter config variants.
//!
//! [`AdapterConfig`] is the type to use when the method is only known from
//! the saved document: loading dispatches on `peft_type`. Loading through a
//! concrete variant's [`PeftConfig::from_pretrained`] never consults the
//! discriminator.

use crate::config::PeftConfig;
use crate::error::{PeftError, Result};
use crate::record::{json_kind, AttributeRecord};
use crate::resolve::{self, ConfigResolver, ResolveOptions};
use crate::schema::FieldSpec;
use crate::types::PeftType;
use crate::variants::{LoraConfig, PrefixTuningConfig, PromptEncoderConfig, PromptTuningConfig};
use std::path::Path;

/// Any supported adapter config
#[derive(Debug, Clone, PartialEq)]
pub enum AdapterConfig {
    Lora(LoraConfig),
    PromptEncoder(PromptEncoderConfig),
    PrefixTuning(PrefixTuningConfig),
    PromptTuning(PromptTuningConfig),
}

impl AdapterConfig {
    /// Default config for a method
    pub fn default_for(method: PeftType) -> Self {
        match method {
            PeftType::Lora => Self::Lora(LoraConfig::default()),
            PeftType::PTuning => Self::PromptEncoder(PromptEncoderConfig::default()),
            PeftType::PrefixTuning => Self::PrefixTuning(PrefixTuningConfig::default()),
            PeftType::PromptTuning => Self::PromptTuning(PromptTuningConfig::default()),
        }
    }

    /// Method this variant implements, independent of the stored discriminator
    pub fn method(&self) -> PeftType {
        match self {
            Self::Lora(_) => PeftType::Lora,
            Self::PromptEncoder(_) => PeftType::PTuning,
            Self::PrefixTuning(_) => PeftType::PrefixTuning,
            Self::PromptTuning(_) => PeftType::PromptTuning,
        }
    }

    pub fn peft_type(&self) -> &str {
        match self {
            Self::Lora(c) => c.peft_type(),
            Self::PromptEncoder(c) => c.peft_type(),
            Self::PrefixTuning(c) => c.peft_type(),
            Self::PromptTuning(c) => c.peft_type(),
        }
    }

    /// Declared fields of the wrapped variant
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Self::Lora(_) => LoraConfig::FIELDS,
            Self::PromptEncoder(_) => PromptEncoderConfig::FIELDS,
            Self::PrefixTuning(_) => PrefixTuningConfig::FIELDS,
            Self::PromptTuning(_) => PromptTuningConfig::FIELDS,
        }
    }

    pub fn to_dict(&self) -> Result<AttributeRecord> {
        match self {
            Self::Lora(c) => c.to_dict(),
            Self::PromptEncoder(c) => c.to_dict(),
            Self::PrefixTuning(c) => c.to_dict(),
            Self::PromptTuning(c) => c.to_dict(),
        }
    }

    pub fn save_pretrained(&self, save_directory: impl AsRef<Path>) -> Result<()> {
        match self {
            Self::Lora(c) => c.save_pretrained(save_directory),
            Self::PromptEncoder(c) => c.save_pretrained(save_directory),
            Self::PrefixTuning(c) => c.save_pretrained(save_directory),
            Self::PromptTuning(c) => c.save_pretrained(save_directory),
        }
    }

    /// Rebuild the variant named by the record's `peft_type`
    pub fn from_dict(record: &AttributeRecord) -> Result<Self> {
        let peft_type = match record.get("peft_type") {
            Some(value) => value.as_str().ok_or_else(|| PeftError::TypeMismatch {
                field: "peft_type".into(),
                expected: "string".into(),
                found: json_kind(value).into(),
            })?,
            None => {
                return Err(PeftError::TypeMismatch {
                    field: "peft_type".into(),
                    expected: "string".into(),
                    found: "missing field".into(),
                })
            }
        };
        let method: PeftType = peft_type
            .parse()
            .map_err(|_| PeftError::UnknownPeftType { peft_type: peft_type.to_string() })?;

        Ok(match method {
            PeftType::Lora => Self::Lora(LoraConfig::from_dict(record)?),
            PeftType::PTuning => Self::PromptEncoder(PromptEncoderConfig::from_dict(record)?),
            PeftType::PrefixTuning => Self::PrefixTuning(PrefixTuningConfig::from_dict(record)?),
            PeftType::PromptTuning => Self::PromptTuning(PromptTuningConfig::from_dict(record)?),
        })
    }

    /// Load whichever variant the saved document names
    pub fn from_pretrained(identifier: &str) -> Result<Self> {
        let resolver = resolve::default_resolver();
        Self::from_pretrained_with(identifier, &ResolveOptions::default(), resolver.as_ref())
    }

    pub fn from_pretrained_with(
        identifier: &str,
        options: &ResolveOptions,
        resolver: &dyn ConfigResolver,
    ) -> Result<Self> {
        let path = resolve::locate(identifier, options, resolver)?;
        let record = AttributeRecord::read_json_file(&path)?;
        Self::from_dict(&record)
    }
}

impl From<LoraConfig> for AdapterConfig {
    fn from(config: LoraConfig) -> Self {
        Self::Lora(config)
    }
}

impl From<PromptEncoderConfig> for AdapterConfig {
    fn from(config: PromptEncoderConfig) -> Self {
        Self::PromptEncoder(config)
    }
}

impl From<PrefixTuningConfig> for AdapterConfig {
    fn from(config: PrefixTuningConfig) -> Self {
        Self::PrefixTuning(config)
    }
}

impl From<PromptTuningConfig> for AdapterConfig {
    fn from(config: PromptTuningConfig) -> Self {
        Self::PromptTuning(config)
    }
}
