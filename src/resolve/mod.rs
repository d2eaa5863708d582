//! Resolution of a config identifier to a local `adapter_config.json`.
//!
//! Resolution is two explicit steps: look for the file under the
//! identifier as a local directory, then fall back to a [`ConfigResolver`]
//! for anything that is not an existing directory.

mod error;
#[cfg(feature = "hub")]
mod hub;
mod options;

#[cfg(test)]
mod tests;

pub use error::ResolveError;
#[cfg(feature = "hub")]
pub use hub::HubResolver;
pub use options::ResolveOptions;

use crate::config::CONFIG_NAME;
use crate::error::{PeftError, Result};
use std::path::{Path, PathBuf};

/// Turns a non-local identifier into a local copy of a config file.
pub trait ConfigResolver {
    /// Return a local path holding `filename` from the source named by
    /// `identifier`.
    fn resolve(
        &self,
        identifier: &str,
        filename: &str,
        options: &ResolveOptions,
    ) -> std::result::Result<PathBuf, ResolveError>;
}

/// Resolver for offline use: every remote lookup fails
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRemoteResolver;

impl ConfigResolver for NoRemoteResolver {
    fn resolve(
        &self,
        identifier: &str,
        _filename: &str,
        _options: &ResolveOptions,
    ) -> std::result::Result<PathBuf, ResolveError> {
        Err(ResolveError::RemoteDisabled { identifier: identifier.to_string() })
    }
}

/// Resolver used by `from_pretrained` when none is given
pub fn default_resolver() -> Box<dyn ConfigResolver> {
    #[cfg(feature = "hub")]
    {
        Box::new(HubResolver::new())
    }
    #[cfg(not(feature = "hub"))]
    {
        Box::new(NoRemoteResolver)
    }
}

/// Locate the config file for `identifier`.
///
/// An existing directory never falls through to the resolver: if it lacks
/// the config file the lookup fails with [`PeftError::NotFound`].
pub fn locate(
    identifier: &str,
    options: &ResolveOptions,
    resolver: &dyn ConfigResolver,
) -> Result<PathBuf> {
    if identifier.trim().is_empty() {
        return Err(PeftError::not_found(identifier, "identifier is empty"));
    }

    let mut dir = PathBuf::from(identifier);
    if let Some(sub) = options.subfolder.as_deref() {
        dir.push(sub);
    }

    let local = dir.join(CONFIG_NAME);
    if local.is_file() {
        tracing::debug!(path = %local.display(), "resolved adapter config locally");
        return Ok(local);
    }
    if Path::new(identifier).is_dir() {
        return Err(PeftError::not_found(
            identifier,
            format!("{} does not exist", local.display()),
        ));
    }

    let path = resolver
        .resolve(identifier, CONFIG_NAME, options)
        .map_err(|e| PeftError::not_found(identifier, e.to_string()))?;
    tracing::debug!(identifier, path = %path.display(), "resolved adapter config remotely");
    Ok(path)
}
