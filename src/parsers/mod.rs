//! Source parsing
//!
//! One submodule per supported language. Only Python is wired in today;
//! the shared fact types live here so the pipeline stays language-neutral.

pub mod python;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while turning one file into structural facts.
///
/// The aggregator treats every variant the same way: skip the file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to load grammar: {0}")]
    Grammar(String),

    #[error("parser produced no syntax tree")]
    NoTree,

    #[error("invalid syntax in {}", .0.display())]
    InvalidSyntax(PathBuf),
}

/// Line span of one function definition, 1-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSpan {
    pub line_start: u32,
    pub line_end: u32,
}

impl FunctionSpan {
    /// Inclusive line count; a one-line function has length 1.
    pub fn length(&self) -> u32 {
        self.line_end - self.line_start + 1
    }
}

/// Structural facts extracted from a single source file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuralFacts {
    /// Import statements, one per statement.
    pub imports: usize,
    /// Every plain `def` in source order, any nesting depth.
    pub functions: Vec<FunctionSpan>,
    /// Class definitions, any nesting depth.
    pub classes: usize,
}
