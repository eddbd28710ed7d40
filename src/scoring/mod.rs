//! Repairability scoring
//!
//! Pure functions turning a [`MetricsSummary`] into bounded scores:
//!
//! ```text
//! coupling = max(0, 100 - total_imports)
//! cohesion = max(0, 100 - mean_function_length)
//! static   = round(0.5 * coupling + 0.5 * cohesion, 2)
//! final    = round(0.7 * static + 0.3 * qualitative, 2)
//! ```

use crate::models::MetricsSummary;

/// Weight of the coupling sub-score within the static score.
pub const COUPLING_WEIGHT: f64 = 0.5;

/// Weight of the cohesion sub-score within the static score.
pub const COHESION_WEIGHT: f64 = 0.5;

/// Weight of the static score within the final blend.
pub const STATIC_WEIGHT: f64 = 0.7;

/// Weight of the qualitative score within the final blend.
pub const QUALITATIVE_WEIGHT: f64 = 0.3;

/// Inverse normalization with a floor at zero: 0 maps to 100 and values
/// of 100 or more map to 0. Not scaled by codebase size, so it saturates
/// once the raw value reaches 100.
pub fn normalize_inverse(value: f64) -> f64 {
    (100.0 - value).max(0.0)
}

/// Mean of the given lengths rounded to two decimals, or 0 when empty.
/// Display form used in prompts and explanations.
pub fn average(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let total: u64 = values.iter().map(|&v| u64::from(v)).sum();
    round2(total as f64 / values.len() as f64)
}

/// Static repairability: equal-weight blend of the coupling score
/// (inverse of total imports) and the cohesion score (inverse of the
/// unrounded mean function length, 0 when there are no functions).
pub fn static_repairability(summary: &MetricsSummary) -> f64 {
    let avg_function_length = if summary.function_lengths.is_empty() {
        0.0
    } else {
        let total: u64 = summary.function_lengths.iter().map(|&v| u64::from(v)).sum();
        total as f64 / summary.function_lengths.len() as f64
    };

    let coupling = normalize_inverse(summary.imports as f64);
    let cohesion = normalize_inverse(avg_function_length);

    round2(COUPLING_WEIGHT * coupling + COHESION_WEIGHT * cohesion)
}

/// Blend the static and qualitative scores into the final repairability
/// score. Both inputs are already bounded to [0, 100], so the blend is
/// too and no clamp is applied.
pub fn blend(static_score: f64, qualitative_score: u8) -> f64 {
    round2(STATIC_WEIGHT * static_score + QUALITATIVE_WEIGHT * f64::from(qualitative_score))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
