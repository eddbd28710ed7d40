//! Repository acquisition
//!
//! Remote analysis targets are cloned into the working directory before
//! discovery runs. Local paths pass through untouched.

use crate::discovery::DiscoveryError;
use git2::Repository;
use std::path::PathBuf;
use tracing::info;

/// True when the analysis target is a remote URL rather than a local path.
pub fn is_remote_url(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

/// Directory name a clone of `url` lands in: the URL's last path segment,
/// trailing slashes stripped.
pub fn repo_name_from_url(url: &str) -> &str {
    let trimmed = url.trim_end_matches('/');
    match trimmed.rsplit_once('/') {
        Some((_, name)) => name,
        None => trimmed,
    }
}

/// Clone `url` into the working directory and return the clone's path.
///
/// A non-empty directory already sitting at the target path fails the
/// clone; a stale checkout is never silently reused.
pub fn clone_repository(url: &str) -> Result<PathBuf, DiscoveryError> {
    let target = PathBuf::from(repo_name_from_url(url));
    info!("cloning {} into {}", url, target.display());

    Repository::clone(url, &target).map_err(|e| DiscoveryError::CloneFailed {
        url: url.to_string(),
        reason: e.message().to_string(),
    })?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_and_https_are_remote() {
        assert!(is_remote_url("https://github.com/example/repo"));
        assert!(is_remote_url("http://internal.host/repo"));
        assert!(!is_remote_url("path/to/local/codebase"));
        assert!(!is_remote_url("/absolute/path"));
        assert!(!is_remote_url("git@github.com:example/repo.git"));
    }

    #[test]
    fn test_repo_name_is_last_path_segment() {
        assert_eq!(repo_name_from_url("https://github.com/example/repo"), "repo");
        assert_eq!(repo_name_from_url("https://github.com/example/repo/"), "repo");
        assert_eq!(
            repo_name_from_url("https://github.com/example/repo.git"),
            "repo.git"
        );
    }

    #[test]
    fn test_https_clone_fails_at_the_connection_not_the_transport() {
        // Clear any leftover target dir so a re-run exercises the
        // transport, not the existing-directory check.
        let _ = std::fs::remove_dir_all("clone-refused-check");

        // Nothing listens on port 1. A clone with a working https
        // transport gets a refused connection; one without a TLS
        // backend fails before any I/O with a "no TLS stream" error.
        let err = clone_repository("https://127.0.0.1:1/example/clone-refused-check")
            .expect_err("clone of an unreachable host should fail");

        match err {
            DiscoveryError::CloneFailed { reason, .. } => {
                let reason = reason.to_lowercase();
                assert!(!reason.contains("tls"), "https transport unavailable: {reason}");
                assert!(reason.contains("connect"), "expected a connection failure: {reason}");
            }
            other => panic!("expected CloneFailed, got {other}"),
        }
    }
}
