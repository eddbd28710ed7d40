//! Output reporters for analysis results
//!
//! Only plain text today; the console contract is a score line followed
//! by a prose explanation.

pub mod text;
