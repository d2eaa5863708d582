//! Tests for config resolution

use super::*;
use std::cell::RefCell;
use tempfile::TempDir;

/// Records calls and serves a fixed file
struct StubResolver {
    path: PathBuf,
    calls: RefCell<Vec<(String, String, String)>>,
}

impl StubResolver {
    fn new(path: PathBuf) -> Self {
        Self { path, calls: RefCell::new(Vec::new()) }
    }
}

impl ConfigResolver for StubResolver {
    fn resolve(
        &self,
        identifier: &str,
        filename: &str,
        options: &ResolveOptions,
    ) -> std::result::Result<PathBuf, ResolveError> {
        self.calls.borrow_mut().push((
            identifier.to_string(),
            options.remote_path(filename),
            options.revision.clone(),
        ));
        Ok(self.path.clone())
    }
}

#[test]
fn test_local_directory_wins() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join(CONFIG_NAME), "{}").unwrap();
    let stub = StubResolver::new(PathBuf::from("/unused"));

    let path = locate(tmp.path().to_str().unwrap(), &ResolveOptions::default(), &stub).unwrap();

    assert_eq!(path, tmp.path().join(CONFIG_NAME));
    assert!(stub.calls.borrow().is_empty());
}

#[test]
fn test_empty_directory_is_not_found_without_remote_call() {
    let tmp = TempDir::new().unwrap();
    let stub = StubResolver::new(PathBuf::from("/unused"));

    let err = locate(tmp.path().to_str().unwrap(), &ResolveOptions::default(), &stub).unwrap_err();

    assert!(matches!(err, PeftError::NotFound { .. }));
    assert!(stub.calls.borrow().is_empty());
}

#[test]
fn test_empty_identifier_rejected() {
    let stub = StubResolver::new(PathBuf::from("/unused"));
    for identifier in ["", "  "] {
        let err = locate(identifier, &ResolveOptions::default(), &stub).unwrap_err();
        assert!(matches!(err, PeftError::NotFound { ref reason, .. } if reason.contains("empty")));
    }
    assert!(stub.calls.borrow().is_empty());
}

#[test]
fn test_subfolder_used_locally() {
    let tmp = TempDir::new().unwrap();
    let sub = tmp.path().join("adapters").join("sql");
    std::fs::create_dir_all(&sub).unwrap();
    std::fs::write(sub.join(CONFIG_NAME), "{}").unwrap();

    let options = ResolveOptions::new().subfolder("adapters/sql");
    let path = locate(tmp.path().to_str().unwrap(), &options, &NoRemoteResolver).unwrap();

    assert_eq!(path, sub.join(CONFIG_NAME));
}

#[test]
fn test_remote_identifier_goes_to_resolver() {
    let stub = StubResolver::new(PathBuf::from("/cache/adapter_config.json"));
    let options = ResolveOptions::new().revision("v2").subfolder("lora");

    let path = locate("org/adapter", &options, &stub).unwrap();

    assert_eq!(path, PathBuf::from("/cache/adapter_config.json"));
    let calls = stub.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        ("org/adapter".to_string(), "lora/adapter_config.json".to_string(), "v2".to_string())
    );
}

#[test]
fn test_resolver_failure_surfaces_as_not_found() {
    let err = locate("org/adapter", &ResolveOptions::default(), &NoRemoteResolver).unwrap_err();
    match err {
        PeftError::NotFound { identifier, reason } => {
            assert_eq!(identifier, "org/adapter");
            assert!(reason.contains("remote resolution is disabled"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_remote_path_with_subfolder() {
    let options = ResolveOptions::default();
    assert_eq!(options.remote_path(CONFIG_NAME), "adapter_config.json");
    assert_eq!(options.clone().subfolder("a/").remote_path(CONFIG_NAME), "a/adapter_config.json");
    assert_eq!(options.subfolder("").remote_path(CONFIG_NAME), "adapter_config.json");
}

#[test]
fn test_resolve_options_defaults() {
    let options = ResolveOptions::new();
    assert_eq!(options.revision, "main");
    assert!(options.subfolder.is_none());
    assert!(options.cache_dir.is_none());

    let options = options.cache_dir("/tmp/hub").revision("abc123");
    assert_eq!(options.cache_dir, Some(PathBuf::from("/tmp/hub")));
    assert_eq!(options.revision, "abc123");
}

#[cfg(feature = "hub")]
mod hub_resolver {
    use super::*;

    #[test]
    fn test_parse_repo_id() {
        assert_eq!(HubResolver::parse_repo_id("org/name").unwrap(), ("org", "name"));
        for bad in ["name", "/name", "org/", "a/b/c", ""] {
            assert!(
                matches!(HubResolver::parse_repo_id(bad), Err(ResolveError::InvalidRepoId { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_repo_id_rejected_before_network() {
        let tmp = TempDir::new().unwrap();
        let resolver = HubResolver::with_token("hf_test").cache_dir(tmp.path());
        let err = resolver
            .resolve("not-a-repo-id", CONFIG_NAME, &ResolveOptions::default())
            .unwrap_err();
        assert!(matches!(err, ResolveError::InvalidRepoId { .. }));
    }

    #[test]
    fn test_with_token_is_authenticated() {
        assert!(HubResolver::with_token("hf_test").is_authenticated());
    }

    #[test]
    fn test_cache_dir_override() {
        let resolver = HubResolver::with_token("t").cache_dir("/tmp/custom");
        assert_eq!(resolver.cache_dir, PathBuf::from("/tmp/custom"));
        assert!(HubResolver::default_cache_dir().ends_with("huggingface/hub"));
    }
}
