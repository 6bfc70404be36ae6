use std::fmt;

use crate::interpreter::scanner::Coordinate;

/// Lexing errors.
///
/// Raised while turning block text into tokens: unknown symbols, control
/// words missing their `{...}` attribute and malformed `_\text{...}`
/// suffixes.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// tokens: unexpected tokens, unclosed delimiters and lists, malformed
/// matrices and case blocks.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while executing a syntax tree:
/// undefined names, dimension and shape mismatches, bad indices, exceeded
/// iteration or recursion bounds and values of the wrong kind.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::{EvalError, TypeError};

/// Any failure produced while processing a block or a document.
///
/// Every variant carries the coordinate of the offending source location.
#[derive(Debug)]
pub enum Error {
    /// The block could not be tokenized.
    Lex(LexError),
    /// The tokens do not form a valid program.
    Parse(ParseError),
    /// Execution failed.
    Eval(EvalError),
    /// A `\begin{preproc}` line has no matching `\end{preproc}`.
    UnterminatedBlock {
        /// Location of the opening line.
        coord: Coordinate,
    },
    /// Reading or writing a document failed.
    Io(std::io::Error),
}

impl Error {
    /// Returns the source location the error refers to.
    ///
    /// I/O failures have no location in the document and report line 1,
    /// column 1.
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        match self {
            Self::Lex(e) => e.coordinate(),
            Self::Parse(e) => e.coordinate(),
            Self::Eval(e) => e.coordinate(),
            Self::UnterminatedBlock { coord } => *coord,
            Self::Io(_) => Coordinate::default(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(e) => e.fmt(f),
            Self::Parse(e) => e.fmt(f),
            Self::Eval(e) => e.fmt(f),
            Self::UnterminatedBlock { coord } => {
                write!(f, "{coord}: Block opened here is never closed with \\end{{preproc}}.")
            },
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::UnterminatedBlock { .. } => None,
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
