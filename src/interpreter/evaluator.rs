/// Core evaluation logic and context management.
///
/// Contains the evaluation engine, the constants table, and the
/// constant-definition step.
pub mod core;

/// Binary operator evaluation.
///
/// Implements checked integer arithmetic for the four operators.
pub mod binary;
