//! Errors raised by config resolvers

use thiserror::Error;

/// Why a resolver could not produce a local config file.
///
/// The loader reports every resolver failure as
/// [`PeftError::NotFound`](crate::PeftError::NotFound), carrying this
/// message as the reason.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Invalid repository ID format
    #[error("Invalid repository ID format (expected 'org/name'): {repo_id}")]
    InvalidRepoId { repo_id: String },

    /// File not found in repository
    #[error("File not found in {repo}: {file}")]
    FileNotFound { repo: String, file: String },

    /// Hub client or transfer failure
    #[error("Hub request failed: {message}")]
    Hub { message: String },

    /// No remote source is configured
    #[error("'{identifier}' is not a local directory and remote resolution is disabled")]
    RemoteDisabled { identifier: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
