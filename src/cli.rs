//! CLI definition and run orchestration
//!
//! Drives one linear pass over the target:
//! 1. Clone the target if it is a remote URL
//! 2. Discover Python files
//! 3. Aggregate structural metrics
//! 4. Score and report
//!
//! No retries and no intermediate state; a run either completes or the
//! caller re-runs it from scratch.

use crate::ai::{self, Evaluator, StubEvaluator};
use crate::models::RepairabilityReport;
use crate::{discovery, git, pipeline, reporters, scoring};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Repairability - structural repairability scoring for Python codebases
#[derive(Parser, Debug)]
#[command(name = "repairability")]
#[command(
    version,
    about = "Score how easy a Python codebase would be to modify or fix"
)]
pub struct Cli {
    /// Local directory, or an http(s) repository URL to clone and analyze
    #[arg(default_value = ".")]
    pub target: String,
}

/// Entry point called from `main`.
pub fn run(cli: Cli) -> Result<()> {
    match analyze(&cli.target, &StubEvaluator)? {
        Some(report) => println!("{}", reporters::text::render(&report)),
        None => println!("No Python files found."),
    }

    Ok(())
}

/// Run the full pipeline against a local path or remote URL.
///
/// Returns `None` when the target contains no Python files, the one
/// early-exit path that produces no score.
pub fn analyze(target: &str, evaluator: &dyn Evaluator) -> Result<Option<RepairabilityReport>> {
    let root = if git::is_remote_url(target) {
        git::clone_repository(target)?
    } else {
        PathBuf::from(target)
    };

    let files = discovery::find_python_files(&root)?;
    if files.is_empty() {
        return Ok(None);
    }
    info!(files = files.len(), "analyzing {}", root.display());

    let summary = pipeline::aggregate(&files);
    let static_score = scoring::static_repairability(&summary);
    let qualitative_score = ai::evaluate(evaluator, &summary)?;
    let final_score = scoring::blend(static_score, qualitative_score);

    Ok(Some(RepairabilityReport {
        summary,
        static_score,
        qualitative_score,
        final_score,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_defaults_to_current_directory() {
        let cli = Cli::parse_from(["repairability"]);
        assert_eq!(cli.target, ".");

        let cli = Cli::parse_from(["repairability", "some/path"]);
        assert_eq!(cli.target, "some/path");
    }

    #[test]
    fn test_analyze_returns_none_without_python_files() {
        let dir = tempfile::tempdir().expect("should create tempdir");
        std::fs::write(dir.path().join("notes.txt"), "nothing here\n").expect("write");

        let target = dir.path().to_string_lossy().into_owned();
        let report = analyze(&target, &StubEvaluator).expect("analyze should succeed");
        assert!(report.is_none());
    }
}
