//! Fields shared by every adapter config

use crate::schema::{FieldKind, FieldSpec};
use crate::types::{PeftType, TaskType};
use serde::{Deserialize, Serialize};

/// Fields every variant carries, flattened into its JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseConfig {
    /// Base model the adapter was trained against
    pub base_model_name_or_path: Option<String>,
    /// Method discriminator; any string is accepted and preserved
    pub peft_type: String,
    /// Downstream task, e.g. `CAUSAL_LM`
    pub task_type: Option<String>,
    /// Whether the adapter is loaded for inference only
    pub inference_mode: bool,
}

impl BaseConfig {
    pub fn new(peft_type: PeftType) -> Self {
        Self {
            base_model_name_or_path: None,
            peft_type: peft_type.as_str().to_string(),
            task_type: None,
            inference_mode: false,
        }
    }

    /// Schema entries for the shared fields, in serialization order
    pub const FIELDS: [FieldSpec; 4] = [
        FieldSpec::optional("base_model_name_or_path", FieldKind::String),
        FieldSpec::required("peft_type", FieldKind::String),
        FieldSpec::optional("task_type", FieldKind::String),
        FieldSpec::required("inference_mode", FieldKind::Bool),
    ];

    /// Parse the discriminator as a known method, if it is one
    pub fn method(&self) -> Option<PeftType> {
        self.peft_type.parse().ok()
    }

    pub fn set_task_type(&mut self, task_type: TaskType) {
        self.task_type = Some(task_type.as_str().to_string());
    }
}
