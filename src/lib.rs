//! PEFT adapter configuration persistence.
//!
//! Adapter configs (LoRA, prompt encoder, prefix tuning, prompt tuning)
//! share one save/load contract, [`PeftConfig`]:
//! - Save any config as `adapter_config.json` in a directory
//! - Reload it as the same variant from a directory or a Hub repository
//! - Parse a saved file into a plain [`AttributeRecord`]
//!
//! # Example
//!
//! ```no_run
//! use entrenar_peft::{LoraConfig, PeftConfig};
//!
//! let config = LoraConfig::new(8, 16).with_dropout(0.1);
//! config.save_pretrained("output/adapter").unwrap();
//!
//! let reloaded = LoraConfig::from_pretrained("output/adapter").unwrap();
//! assert_eq!(config.to_dict().unwrap(), reloaded.to_dict().unwrap());
//! ```

pub mod config;
pub mod error;
pub mod record;
pub mod registry;
pub mod resolve;
pub mod schema;
pub mod types;
pub mod variants;

pub use config::{BaseConfig, PeftConfig, CONFIG_NAME};
pub use error::{PeftError, Result};
pub use record::AttributeRecord;
pub use registry::AdapterConfig;
#[cfg(feature = "hub")]
pub use resolve::HubResolver;
pub use resolve::{ConfigResolver, NoRemoteResolver, ResolveError, ResolveOptions};
pub use schema::{FieldKind, FieldSpec};
pub use types::{EncoderReparameterization, PeftType, PromptTuningInit, TaskType};
pub use variants::{
    LoraConfig, PrefixTuningConfig, PromptEncoderConfig, PromptLearningConfig, PromptTuningConfig,
};
