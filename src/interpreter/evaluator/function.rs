/// Builtin keyword functions.
///
/// Mathematical functions over scalars, grouped by how they treat the
/// physical dimension of their arguments.
pub mod builtin;

/// Builtin constants and SI units.
pub mod constant;

/// Keyword dispatch, user-defined function definition and calls.
pub mod core;
