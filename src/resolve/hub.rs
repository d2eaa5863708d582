//! HuggingFace Hub config resolver.
//!
//! Downloads `adapter_config.json` from a Hub repository with
//! authentication and caching.

use super::error::ResolveError;
use super::options::ResolveOptions;
use super::ConfigResolver;
use std::path::{Path, PathBuf};

/// Resolves remote identifiers through the HuggingFace Hub
#[derive(Debug, Clone)]
pub struct HubResolver {
    /// Authentication token
    pub(crate) token: Option<String>,
    /// Cache directory
    pub(crate) cache_dir: PathBuf,
}

impl HubResolver {
    /// Create a resolver using HF_TOKEN or the stored token, if any.
    ///
    /// Anonymous access is allowed when no token is found.
    #[must_use]
    pub fn new() -> Self {
        Self { token: Self::resolve_token(), cache_dir: Self::default_cache_dir() }
    }

    /// Create resolver with explicit token
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Some(token.into()), cache_dir: Self::default_cache_dir() }
    }

    /// Set cache directory
    #[must_use]
    pub fn cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }

    /// Resolve token from multiple sources
    ///
    /// Priority:
    /// 1. HF_TOKEN environment variable
    /// 2. ~/.huggingface/token file
    #[must_use]
    pub fn resolve_token() -> Option<String> {
        if let Ok(token) = std::env::var("HF_TOKEN") {
            if !token.is_empty() {
                return Some(token);
            }
        }

        let home = dirs::home_dir()?;
        let token = std::fs::read_to_string(home.join(".huggingface").join("token")).ok()?;
        let token = token.trim();
        (!token.is_empty()).then(|| token.to_string())
    }

    pub(crate) fn default_cache_dir() -> PathBuf {
        dirs::cache_dir().unwrap_or_else(|| PathBuf::from(".cache")).join("huggingface").join("hub")
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Parse and validate repository ID
    pub(crate) fn parse_repo_id(repo_id: &str) -> Result<(&str, &str), ResolveError> {
        match repo_id.split_once('/') {
            Some((org, name)) if !org.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok((org, name))
            }
            _ => Err(ResolveError::InvalidRepoId { repo_id: repo_id.to_string() }),
        }
    }

    /// Build the hf-hub sync API client with optional authentication
    fn build_api(&self, cache_path: &Path) -> Result<hf_hub::api::sync::Api, ResolveError> {
        let mut api_builder =
            hf_hub::api::sync::ApiBuilder::new().with_cache_dir(cache_path.to_path_buf());

        if let Some(token) = &self.token {
            api_builder = api_builder.with_token(Some(token.clone()));
        }

        api_builder
            .build()
            .map_err(|e| ResolveError::Hub { message: format!("Failed to initialize HF API: {e}") })
    }
}

impl Default for HubResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolver for HubResolver {
    fn resolve(
        &self,
        identifier: &str,
        filename: &str,
        options: &ResolveOptions,
    ) -> Result<PathBuf, ResolveError> {
        Self::parse_repo_id(identifier)?;

        let cache_path = options.cache_dir.clone().unwrap_or_else(|| self.cache_dir.clone());
        std::fs::create_dir_all(&cache_path)?;

        let api = self.build_api(&cache_path)?;
        let repo = api.repo(hf_hub::Repo::with_revision(
            identifier.to_string(),
            hf_hub::RepoType::Model,
            options.revision.clone(),
        ));

        let remote_path = options.remote_path(filename);
        tracing::debug!(
            repo = identifier,
            file = %remote_path,
            revision = %options.revision,
            "fetching adapter config from hub"
        );

        repo.get(&remote_path).map_err(|e| {
            let message = e.to_string();
            if message.contains("404") {
                ResolveError::FileNotFound {
                    repo: identifier.to_string(),
                    file: remote_path.clone(),
                }
            } else {
                ResolveError::Hub { message: format!("Download failed: {message}") }
            }
        })
    }
}
