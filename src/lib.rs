//! Repairability - structural repairability scoring for Python codebases
//!
//! Estimates how easy a codebase would be to modify or fix. Every Python
//! file is parsed into structural facts and folded into one metrics
//! summary. Coupling and cohesion metrics make up the static score, which
//! is blended with a pluggable qualitative evaluation into the final
//! 0-100 repairability score.

pub mod ai;
pub mod cli;
pub mod discovery;
pub mod git;
pub mod models;
pub mod parsers;
pub mod pipeline;
pub mod reporters;
pub mod scoring;
