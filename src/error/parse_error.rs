use crate::interpreter::scanner::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing tokens.
pub enum ParseError {
    /// Found a token that cannot appear here.
    UnexpectedToken {
        /// Label of the token encountered.
        token: String,
        /// What the parser was looking for.
        expected: &'static str,
        /// Where the token starts.
        coord: Coordinate,
    },
    /// Reached the end of the block inside an unfinished construct.
    UnexpectedEndOfBlock {
        /// Where the block ends.
        coord: Coordinate,
    },
    /// An argument list was not terminated by its closing token.
    ListNotClosed {
        /// Where the parser gave up.
        coord: Coordinate,
    },
    /// Rows of a matrix literal have different lengths.
    MatrixNotRectangular {
        /// Where the offending row starts.
        coord: Coordinate,
    },
    /// A matrix row starts with a separator or is empty.
    BadMatrixRow {
        /// Where the row starts.
        coord: Coordinate,
    },
    /// A case alternative does not end in `\when` or `\otherwise`.
    MalformedCase {
        /// Where the parser expected `\when` or `\otherwise`.
        coord: Coordinate,
    },
    /// A keyword form expected a delimited argument.
    ExpectedArgument {
        /// The delimiter that should open the argument.
        open:  &'static str,
        /// Where the argument should start.
        coord: Coordinate,
    },
    /// `\graphic` must name a function with a plain identifier.
    ExpectedIdentifier {
        /// Where the name should be.
        coord: Coordinate,
    },
    /// A subscript needs one or two index expressions.
    BadIndex {
        /// Number of indices found.
        count: usize,
        /// Where the identifier starts.
        coord: Coordinate,
    },
    /// `\graphic` is missing its `{...}` group of plot points.
    ExpectedPlotData {
        /// Where the group should start.
        coord: Coordinate,
    },
}

impl ParseError {
    /// Returns the coordinate the error refers to.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        match self {
            Self::UnexpectedToken { coord, .. }
            | Self::UnexpectedEndOfBlock { coord }
            | Self::ListNotClosed { coord }
            | Self::MatrixNotRectangular { coord }
            | Self::BadMatrixRow { coord }
            | Self::MalformedCase { coord }
            | Self::ExpectedArgument { coord, .. }
            | Self::ExpectedIdentifier { coord }
            | Self::BadIndex { coord, .. }
            | Self::ExpectedPlotData { coord } => *coord,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token,
                                    expected,
                                    coord, } => {
                write!(f, "{coord}: Unexpected token {token}, expected {expected}.")
            },
            Self::UnexpectedEndOfBlock { coord } => write!(f, "{coord}: Unexpected end of block."),
            Self::ListNotClosed { coord } => write!(f, "{coord}: List not closed."),
            Self::MatrixNotRectangular { coord } => {
                write!(f, "{coord}: Matrix is not rectangular.")
            },
            Self::BadMatrixRow { coord } => write!(f, "{coord}: Bad matrix row."),
            Self::MalformedCase { coord } => {
                write!(f, "{coord}: Expected \\when or \\otherwise after a case value.")
            },
            Self::ExpectedArgument { open, coord } => {
                write!(f, "{coord}: Expected an argument starting with '{open}'.")
            },
            Self::ExpectedIdentifier { coord } => {
                write!(f, "{coord}: Expected a function name.")
            },
            Self::BadIndex { count, coord } => {
                write!(f, "{coord}: Bad index: expected 1 or 2 indices, found {count}.")
            },
            Self::ExpectedPlotData { coord } => {
                write!(f, "{coord}: Expected a {{...}} group of plot points.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
