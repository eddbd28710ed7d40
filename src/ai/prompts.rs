//! Prompt construction for qualitative evaluation
//!
//! One builder: the codebase-summary prompt handed to an evaluator.

use crate::models::MetricsSummary;
use crate::scoring;

/// Build the codebase-summary prompt for a qualitative evaluator.
///
/// The average function length is the rounded display form, matching
/// what the explanation reports.
pub fn summary_prompt(summary: &MetricsSummary) -> String {
    format!(
        "Codebase summary:\n\
         - Functions: {}\n\
         - Classes: {}\n\
         - Average function length: {}\n\
         - Total dependencies: {}\n\
         \n\
         Rate repairability (0–100) based on modularity\n\
         and ease of change.",
        summary.functions,
        summary.classes,
        scoring::average(&summary.function_lengths),
        summary.imports
    )
}
