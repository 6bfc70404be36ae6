/// The scanner walks block text and tracks source positions.
///
/// A [`scanner::Block`] is a window into a whole document; every position the
/// scanner reports (line, column and byte offset) refers to the document, so
/// errors and replacements point at the right place.
pub mod scanner;
/// Token and node kinds, with their operator metadata.
///
/// Each [`tag::Tag`] carries a priority, its unary or binary alternative and,
/// for opening delimiters, the tag that closes it.
pub mod tag;
/// The lexer module tokenizes block text for further parsing.
///
/// The lexer reads the block window and produces a stream of tokens: numbers,
/// identifiers, operators, delimiters and LaTeX control words. Environments
/// it does not know are skipped along with their contents.
///
/// # Responsibilities
/// - Converts the input into tokens with tag, raw text and source positions.
/// - Reads the brace attribute of `\begin`, `\end` and `\placeholder`.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser processes the token stream produced by the lexer with
/// precedence climbing and stores the resulting nodes in an arena.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Node`]s addressed by id.
/// - Validates the grammar, reporting errors with their coordinate.
/// - Records the byte spans that placeholders and graphics rewrite.
pub mod parser;
/// The evaluator module executes syntax trees and computes results.
///
/// The evaluator walks the tree, evaluates expressions and statements,
/// performs dimensional arithmetic and matrix operations, manages variable
/// state, and records the replacements for the block text.
///
/// # Responsibilities
/// - Evaluates every node kind the parser produces.
/// - Handles variables, functions and control flow.
/// - Reports runtime errors such as division by zero or a dimension mismatch.
pub mod evaluator;
/// The value module defines the runtime data types for evaluation.
///
/// A value is a scalar with a physical dimension, a matrix of values or a
/// user-defined function. The module also renders values back to LaTeX.
pub mod value;
