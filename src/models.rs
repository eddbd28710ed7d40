//! Core data models for the repairability pipeline
//!
//! These models carry structural metrics from extraction through
//! scoring and reporting.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Whole-codebase structural metrics, accumulated over every file that
/// parsed successfully.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Total `def` definitions, nested functions and methods included.
    pub functions: usize,
    /// Total class definitions.
    pub classes: usize,
    /// Total import statements, each counted once regardless of how many
    /// names it binds.
    pub imports: usize,
    /// Line count of every function, in discovery order then in-file
    /// definition order. Holds exactly `functions` entries.
    pub function_lengths: Vec<u32>,
    /// Import-statement count per file, keyed in discovery order.
    pub dependencies: IndexMap<PathBuf, usize>,
}

/// Final analysis result: the blended score plus everything needed to
/// explain it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepairabilityReport {
    pub summary: MetricsSummary,
    pub static_score: f64,
    pub qualitative_score: u8,
    pub final_score: f64,
}
