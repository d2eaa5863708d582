//! Options controlling where an adapter config is looked up.

use std::path::PathBuf;

/// Options for config resolution
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Git revision (branch, tag, or commit) for remote lookups
    pub revision: String,
    /// Subdirectory holding `adapter_config.json`, locally and remotely
    pub subfolder: Option<String>,
    /// Cache directory for remote downloads
    pub cache_dir: Option<PathBuf>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self { revision: "main".into(), subfolder: None, cache_dir: None }
    }
}

impl ResolveOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set revision
    #[must_use]
    pub fn revision(mut self, rev: impl Into<String>) -> Self {
        self.revision = rev.into();
        self
    }

    #[must_use]
    pub fn subfolder(mut self, subfolder: impl Into<String>) -> Self {
        self.subfolder = Some(subfolder.into());
        self
    }

    /// Set cache directory
    #[must_use]
    pub fn cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    /// Path of `filename` relative to the repository root
    pub(crate) fn remote_path(&self, filename: &str) -> String {
        match self.subfolder.as_deref() {
            Some(sub) if !sub.is_empty() => format!("{}/{filename}", sub.trim_end_matches('/')),
            _ => filename.to_string(),
        }
    }
}
