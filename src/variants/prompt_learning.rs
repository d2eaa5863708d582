//! Fields shared by the virtual-token methods

use crate::schema::{FieldKind, FieldSpec};
use serde::{Deserialize, Serialize};

/// Virtual-token geometry shared by prompt encoder, prefix tuning and
/// prompt tuning. All fields are unset until the adapter is attached to a
/// model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptLearningConfig {
    /// Number of virtual tokens
    pub num_virtual_tokens: Option<usize>,
    /// Hidden embedding dimension of the base model
    pub token_dim: Option<usize>,
    pub num_transformer_submodules: Option<usize>,
    pub num_attention_heads: Option<usize>,
    pub num_layers: Option<usize>,
}

impl PromptLearningConfig {
    pub const FIELDS: [FieldSpec; 5] = [
        FieldSpec::optional("num_virtual_tokens", FieldKind::Integer),
        FieldSpec::optional("token_dim", FieldKind::Integer),
        FieldSpec::optional("num_transformer_submodules", FieldKind::Integer),
        FieldSpec::optional("num_attention_heads", FieldKind::Integer),
        FieldSpec::optional("num_layers", FieldKind::Integer),
    ];
}
