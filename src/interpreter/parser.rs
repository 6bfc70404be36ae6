/// Parser state and the precedence-climbing core.
///
/// Contains the token cursor, the entry point [`core::parse`], and the
/// expression loop that reduces infix operators by binding power.
pub mod core;

/// Prefix-position rules.
///
/// Dispatches on the tag of the token that starts an operand: literals,
/// identifiers with subscripts and argument lists, grouping delimiters,
/// prefix operators and the fixed keyword forms.
pub mod unary;

/// Delimited constructs with their own inner grammar.
///
/// Parses statement blocks, case blocks and matrix literals.
pub mod block;

/// Shared helpers for the parser.
///
/// Argument lists, delimited arguments and token expectations.
pub mod utils;
