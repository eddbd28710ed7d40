//! Source file discovery
//!
//! Recursively walks a root directory and returns every Python file in
//! traversal order. No ignore rules apply: hidden and vendored files
//! count toward the metrics like everything else.

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors while locating the code to analyze.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("root path does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("failed to clone {url}: {reason}")]
    CloneFailed { url: String, reason: String },
}

/// Collect every `.py` file under `root`, in directory-traversal order.
pub fn find_python_files(root: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !root.exists() {
        return Err(DiscoveryError::RootNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();

    // Filters off: gitignored and hidden files are still part of the
    // codebase being scored.
    let walker = WalkBuilder::new(root).standard_filters(false).build();

    for entry in walker.flatten() {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        // Match on the file name rather than the extension so a bare
        // ".py" still counts.
        let is_python = entry
            .file_name()
            .to_str()
            .map(|name| name.ends_with(".py"))
            .unwrap_or(false);

        if is_python {
            files.push(path.to_path_buf());
        }
    }

    debug!(count = files.len(), "discovered Python files");

    Ok(files)
}
