/// Core evaluation logic and context management.
///
/// Contains the evaluation entry point, the runtime context, the evaluation
/// limits and their defaults.
pub mod core;

/// Name resolution.
///
/// The global table and the rule that decides whether a write lands in it or
/// in the local table of the active call.
pub mod environment;

/// Text rewrites produced by placeholders and graphics.
pub mod replacement;

/// Binary operator evaluation logic.
///
/// Handles arithmetic with physical dimensions, matrix products, powers,
/// comparisons, placeholder capture and the logical connectives.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements identity, negation, logical NOT and transposition.
pub mod unary;

/// Assignment to names, matrix cells and function definitions.
pub mod assignment;

/// Subscripted reads of matrix variables.
pub mod index;

/// Function evaluation.
///
/// Handles user-defined closures, builtin keyword functions and constants.
pub mod function;

/// Conditionals, case blocks and the bounded loops.
pub mod control;

/// Ranges and sampled plots.
pub mod range;
