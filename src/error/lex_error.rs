use crate::interpreter::scanner::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing a block.
pub enum LexError {
    /// A character that starts no token.
    UnexpectedSymbol {
        /// The offending text.
        symbol: String,
        /// Where the symbol starts.
        coord:  Coordinate,
    },
    /// `\begin`, `\end` or `\placeholder` without a balanced `{...}`.
    ExpectedAttribute {
        /// The control word missing its attribute.
        keyword: String,
        /// Where the control word starts.
        coord:   Coordinate,
    },
    /// An identifier followed by `_\` that is not `_\text{...}`.
    ExpectedTextAttribute {
        /// Where the identifier starts.
        coord: Coordinate,
    },
}

impl LexError {
    /// Returns the coordinate the error refers to.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        match self {
            Self::UnexpectedSymbol { coord, .. }
            | Self::ExpectedAttribute { coord, .. }
            | Self::ExpectedTextAttribute { coord } => *coord,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedSymbol { symbol, coord } => {
                write!(f, "{coord}: Unexpected symbol: {symbol}.")
            },
            Self::ExpectedAttribute { keyword, coord } => {
                write!(f, "{coord}: Expected {{...}} after {keyword}.")
            },
            Self::ExpectedTextAttribute { coord } => {
                write!(f, "{coord}: Expected \\text{{...}} after '_'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
