//! Error types with actionable diagnostics.
//!
//! Every error carries the path, identifier or field it concerns so callers
//! can diagnose a failed save/load without re-running it.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for adapter config operations.
pub type Result<T> = std::result::Result<T, PeftError>;

/// Errors raised while saving, resolving or loading an adapter config.
#[derive(Error, Debug)]
pub enum PeftError {
    /// No `adapter_config.json` could be resolved for the identifier.
    #[error("Adapter config not found for '{identifier}': {reason}\n  → Check the directory contains adapter_config.json or that the repository id is correct")]
    NotFound { identifier: String, reason: String },

    /// The located file is not valid JSON, or not a JSON object.
    #[error("Malformed adapter config at {path}: {message}\n  → The file must contain a single JSON object")]
    Malformed { path: PathBuf, message: String },

    /// A declared field holds a value of the wrong JSON type.
    #[error("Type mismatch for field '{field}': expected {expected}, found {found}\n  → Fix the value in adapter_config.json")]
    TypeMismatch { field: String, expected: String, found: String },

    /// `save_pretrained` was pointed at an existing regular file.
    #[error("Save target {path} is a file, not a directory\n  → Pass a directory path to save_pretrained")]
    NotADirectory { path: PathBuf },

    /// The discriminator does not name a known adapter method.
    #[error("Unknown peft_type '{peft_type}'\n  → Supported: LORA, P_TUNING, PREFIX_TUNING, PROMPT_TUNING")]
    UnknownPeftType { peft_type: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl PeftError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Create a not-found error for an identifier.
    pub fn not_found(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::NotFound { identifier: identifier.into(), reason: reason.into() }
    }

    /// Check if this error is caused by user input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::Malformed { .. }
                | Self::TypeMismatch { .. }
                | Self::NotADirectory { .. }
                | Self::UnknownPeftType { .. }
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "E001",
            Self::Malformed { .. } => "E002",
            Self::TypeMismatch { .. } => "E003",
            Self::NotADirectory { .. } => "E004",
            Self::UnknownPeftType { .. } => "E005",
            Self::Io { .. } => "E050",
            Self::Serialization { .. } => "E051",
        }
    }
}
