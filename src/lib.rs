//! # texcalc
//!
//! texcalc is a small calculation language embedded in LaTeX documents.
//! Blocks of the document are lexed, parsed and evaluated; values computed
//! there, with SI units and matrices, are written back into the document in
//! place of `\placeholder{...}` markers and `\graphic` point lists.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::{debug, trace};

use crate::{
    error::Error,
    interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse, scanner::Block},
};

/// Defines the structure of parsed code.
///
/// This module declares the arena-backed syntax tree: [`ast::Node`], its
/// [`ast::NodeId`] handle and the [`ast::Ast`] arena. The tree is built by
/// the parser and traversed by the evaluator; function definitions copy
/// their body out of it.
///
/// # Responsibilities
/// - Stores nodes with their tag, label, children and source coordinate.
/// - Copies subtrees into private arenas.
/// - Dumps trees for tracing.
pub mod ast;
/// Document-level processing.
///
/// Finds the `\begin{preproc}` ... `\end{preproc}` blocks of a LaTeX
/// document, runs each through the interpreter with one shared context and
/// writes the rewritten document, rolling back on failure.
pub mod document;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while processing a
/// block or a document. Every error carries the line and column it refers
/// to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches coordinates and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the interpretation of a block.
///
/// This module ties together scanning, lexing, parsing, evaluation and value
/// representations to provide a complete runtime for one block of source.
///
/// # Responsibilities
/// - Coordinates all core components: scanner, lexer, parser, evaluator and
///   value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides conversion routines used throughout the evaluator:
/// numbers to matrix indices and to integer exponents, without silent data
/// loss.
pub mod util;

pub use crate::{
    document::{process_file, render},
    interpreter::evaluator::core::Settings,
};

/// Runs one block through the interpreter and returns its rewritten text.
///
/// The block's region is tokenized, parsed and evaluated at global scope in
/// `ctx`, so names defined here stay visible to later blocks. Every
/// placeholder captured by an equality and every graphic is then replaced in
/// the block text. The replacement map is cleared afterwards, on success and
/// on failure alike.
///
/// # Errors
/// Returns the first lexing, parsing or evaluation error. No partial text is
/// produced.
///
/// # Examples
/// ```
/// use texcalc::{interpreter::{evaluator::core::Context, scanner::Block}, process_block};
///
/// let mut ctx = Context::new();
/// let block = Block::from_source(r"x := 3 \\ 2 \cdot x = \placeholder{}");
/// assert_eq!(process_block(&mut ctx, &block).unwrap(), r"x := 3 \\ 2 \cdot x = \placeholder{6}");
///
/// // An undefined name is an error.
/// let block = Block::from_source(r"y + 1 = \placeholder{}");
/// assert!(process_block(&mut ctx, &block).is_err());
/// ```
pub fn process_block(ctx: &mut Context, block: &Block) -> Result<String, Error> {
    let result = evaluate_block(ctx, block);
    ctx.replacements.clear();
    result
}

fn evaluate_block(ctx: &mut Context, block: &Block) -> Result<String, Error> {
    let tokens = tokenize(block)?;
    let (ast, root) = parse(&tokens)?;
    trace!(tree = %ast.dump(root), "parsed block");

    ctx.eval(&ast, root, None)?;
    debug!(begin = %block.begin,
           tokens = tokens.len(),
           nodes = ast.len(),
           replacements = ctx.replacements.len(),
           "evaluated block");
    Ok(ctx.replacements.stitch(&block.text))
}
