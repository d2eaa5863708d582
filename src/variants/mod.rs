//! Adapter config variants
//!
//! Each variant adds its own fields and defaults; persistence comes from
//! [`PeftConfig`](crate::PeftConfig) unchanged.

mod lora;
mod prefix_tuning;
mod prompt_encoder;
mod prompt_learning;
mod prompt_tuning;

pub use lora::LoraConfig;
pub use prefix_tuning::PrefixTuningConfig;
pub use prompt_encoder::PromptEncoderConfig;
pub use prompt_learning::PromptLearningConfig;
pub use prompt_tuning::PromptTuningConfig;
