//! Plain-text report rendering

use crate::models::RepairabilityReport;
use crate::scoring;

/// Render the full console report: the score line, a blank line, then
/// the explanation block.
pub fn render(report: &RepairabilityReport) -> String {
    format!(
        "Repairability Score: {}\n\nExplanation:\n{}",
        report.final_score,
        explanation(report)
    )
}

/// The prose summary of what drove the score.
pub fn explanation(report: &RepairabilityReport) -> String {
    let summary = &report.summary;

    format!(
        "The analyzed codebase contains {} functions and {} classes.\n\
         Average function length is {} lines.\n\
         Total dependency count is {}.\n\
         \n\
         Static analysis repairability score: {}\n\
         AI-assisted repairability score: {}\n\
         \n\
         The final score combines static metrics and AI evaluation \
         to assess modularity and ease of change.",
        summary.functions,
        summary.classes,
        scoring::average(&summary.function_lengths),
        summary.imports,
        report.static_score,
        report.qualitative_score
    )
}
