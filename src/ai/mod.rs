//! Qualitative repairability evaluation
//!
//! The pipeline treats the qualitative judge as a pluggable collaborator:
//! anything that can turn a [`MetricsSummary`] into a 0-100 score. The
//! default implementation is a fixed-score stub standing in for a
//! model-backed evaluator; swapping in a real one means implementing
//! [`Evaluator`] and handing it to the pipeline.

mod prompts;

pub use prompts::summary_prompt;

use crate::models::MetricsSummary;
use thiserror::Error;
use tracing::debug;

/// Score returned by [`StubEvaluator`].
pub const STUB_SCORE: u8 = 75;

/// Errors from qualitative evaluation. Fatal to the run: no partial
/// score is defined.
#[derive(Error, Debug)]
pub enum EvaluationError {
    #[error("evaluator returned {0}, outside the 0-100 range")]
    ScoreOutOfRange(u8),

    #[error("evaluation failed: {0}")]
    Failed(String),
}

/// A holistic modularity and ease-of-change judge.
pub trait Evaluator {
    /// Rate the summarized codebase on a 0-100 scale.
    fn evaluate(&self, summary: &MetricsSummary) -> Result<u8, EvaluationError>;
}

/// Fixed-score evaluator used until a model-backed one is wired in. It
/// still builds the summary prompt so the evaluation input stays
/// inspectable under `RUST_LOG=debug`.
#[derive(Debug, Default)]
pub struct StubEvaluator;

impl Evaluator for StubEvaluator {
    fn evaluate(&self, summary: &MetricsSummary) -> Result<u8, EvaluationError> {
        let prompt = summary_prompt(summary);
        debug!("qualitative evaluation stubbed; prompt was:\n{prompt}");

        Ok(STUB_SCORE)
    }
}

/// Run an evaluator and enforce its output contract.
pub fn evaluate(
    evaluator: &dyn Evaluator,
    summary: &MetricsSummary,
) -> Result<u8, EvaluationError> {
    let score = evaluator.evaluate(summary)?;
    if score > 100 {
        return Err(EvaluationError::ScoreOutOfRange(score));
    }

    Ok(score)
}
