use crate::interpreter::{scanner::Coordinate, value::dimension::Dimension};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A value of one kind was found where another kind was required.
pub struct TypeError {
    /// The kind the operation needed (`scalar`, `matrix`, `function`, ...).
    pub expected: &'static str,
    /// The kind that was supplied.
    pub found:    &'static str,
    /// Where the operation happened.
    pub coord:    Coordinate,
}

impl std::fmt::Display for TypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "{}: Type error: expected a {}, found a {}.",
               self.coord, self.expected, self.found)
    }
}

impl std::error::Error for TypeError {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// Read of a name bound in neither the local nor the global table.
    UndefinedVariable {
        /// The name of the variable.
        name:  String,
        /// Where the name is used.
        coord: Coordinate,
    },
    /// A control word that is neither a constant nor a builtin function.
    UndefinedKeyword {
        /// The control word, including its backslash.
        name:  String,
        /// Where the keyword is used.
        coord: Coordinate,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// Name of the function or keyword.
        name:     String,
        /// How many arguments it takes.
        expected: usize,
        /// How many were supplied.
        found:    usize,
        /// Where the call happened.
        coord:    Coordinate,
    },
    /// Operands of `+`, `-`, a comparison or a builtin carry different
    /// physical dimensions.
    DimensionMismatch {
        /// Dimension of the left operand.
        left:  Dimension,
        /// Dimension of the right operand.
        right: Dimension,
        /// Where the operation happened.
        coord: Coordinate,
    },
    /// Two matrices have incompatible shapes.
    ShapeMismatch {
        /// `(rows, columns)` of the left operand.
        left:  (usize, usize),
        /// `(rows, columns)` of the right operand.
        right: (usize, usize),
        /// Where the operation happened.
        coord: Coordinate,
    },
    /// An index past the end of a matrix.
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The number of valid positions.
        len:   usize,
        /// Where the index was used.
        coord: Coordinate,
    },
    /// An index below zero.
    NegativeIndex {
        /// Where the index was used.
        coord: Coordinate,
    },
    /// A single index applied to a matrix that is neither a row nor a column.
    VectorIndexOnMatrix {
        /// `(rows, columns)` of the indexed matrix.
        shape: (usize, usize),
        /// Where the index was used.
        coord: Coordinate,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// Where the division happened.
        coord: Coordinate,
    },
    /// A matrix appeared as a divisor.
    DivisionByMatrix {
        /// Where the division happened.
        coord: Coordinate,
    },
    /// An exponent carrying a physical dimension.
    DimensionedExponent {
        /// Where the power happened.
        coord: Coordinate,
    },
    /// A non-integer power (or odd root) of a dimensioned quantity.
    FractionalPowerOfDimensioned {
        /// Where the power happened.
        coord: Coordinate,
    },
    /// A builtin that only accepts pure numbers received a dimensioned one.
    DimensionedArgument {
        /// The builtin's control word.
        name:  String,
        /// Where the call happened.
        coord: Coordinate,
    },
    /// A `\product` body produced a dimensioned factor.
    DimensionedProduct {
        /// Where the loop starts.
        coord: Coordinate,
    },
    /// A function definition lists the same parameter twice.
    DuplicateParameter {
        /// The repeated name.
        name:  String,
        /// Where the definition happens.
        coord: Coordinate,
    },
    /// A function definition whose parameters are not plain identifiers.
    InvalidFunctionDefinition {
        /// Where the definition happens.
        coord: Coordinate,
    },
    /// The left side of `:=` cannot be assigned to.
    InvalidAssignmentTarget {
        /// Where the assignment happens.
        coord: Coordinate,
    },
    /// A range whose end lies before its start.
    EmptyRange {
        /// Where the range is written.
        coord: Coordinate,
    },
    /// A range step that is zero or negative.
    InvalidRangeStep {
        /// Where the range is written.
        coord: Coordinate,
    },
    /// A range with more elements than allowed.
    RangeTooLong {
        /// The configured maximum length.
        limit: usize,
        /// Where the range is written.
        coord: Coordinate,
    },
    /// A `\while` or `\product` loop ran for too many iterations.
    IterationLimit {
        /// The configured maximum.
        limit: usize,
        /// Where the loop starts.
        coord: Coordinate,
    },
    /// Function calls nested too deeply.
    RecursionLimit {
        /// The configured maximum depth.
        limit: usize,
        /// Where the call happened.
        coord: Coordinate,
    },
    /// `\graphic` needs exactly one range argument.
    PlotRange {
        /// How many range arguments were found.
        found: usize,
        /// Where the graphic is written.
        coord: Coordinate,
    },
    /// No alternative of a case block matched.
    NoMatchingCase {
        /// Where the case block starts.
        coord: Coordinate,
    },
    /// A placeholder used anywhere but the right side of `=`.
    PlaceholderOutsideEquality {
        /// Where the placeholder is written.
        coord: Coordinate,
    },
    /// A builtin produced a non-finite result from finite input.
    Domain {
        /// The builtin's control word or operator.
        name:  String,
        /// Where the call happened.
        coord: Coordinate,
    },
    /// A number too large to be used as an index or count.
    Overflow {
        /// Where the number was used.
        coord: Coordinate,
    },
    /// A syntax-tree node that cannot be evaluated on its own.
    Unsupported {
        /// Label of the node.
        construct: String,
        /// Where the node starts.
        coord:     Coordinate,
    },
    /// A value had the wrong kind.
    Type(TypeError),
}

impl EvalError {
    /// Returns the coordinate the error refers to.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        match self {
            Self::UndefinedVariable { coord, .. }
            | Self::UndefinedKeyword { coord, .. }
            | Self::ArgumentCountMismatch { coord, .. }
            | Self::DimensionMismatch { coord, .. }
            | Self::ShapeMismatch { coord, .. }
            | Self::IndexOutOfRange { coord, .. }
            | Self::NegativeIndex { coord }
            | Self::VectorIndexOnMatrix { coord, .. }
            | Self::DivisionByZero { coord }
            | Self::DivisionByMatrix { coord }
            | Self::DimensionedExponent { coord }
            | Self::FractionalPowerOfDimensioned { coord }
            | Self::DimensionedArgument { coord, .. }
            | Self::DimensionedProduct { coord }
            | Self::DuplicateParameter { coord, .. }
            | Self::InvalidFunctionDefinition { coord }
            | Self::InvalidAssignmentTarget { coord }
            | Self::EmptyRange { coord }
            | Self::InvalidRangeStep { coord }
            | Self::RangeTooLong { coord, .. }
            | Self::IterationLimit { coord, .. }
            | Self::RecursionLimit { coord, .. }
            | Self::PlotRange { coord, .. }
            | Self::NoMatchingCase { coord }
            | Self::PlaceholderOutsideEquality { coord }
            | Self::Domain { coord, .. }
            | Self::Overflow { coord }
            | Self::Unsupported { coord, .. }
            | Self::Type(TypeError { coord, .. }) => *coord,
        }
    }
}

impl std::fmt::Display for EvalError {
    #[allow(clippy::too_many_lines)]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, coord } => {
                write!(f, "{coord}: Undefined variable: {name}.")
            },
            Self::UndefinedKeyword { name, coord } => {
                write!(f, "{coord}: Undefined keyword: {name}.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          coord, } => write!(f,
                                                             "{coord}: {name} takes {expected} argument(s), {found} given."),
            Self::DimensionMismatch { left, right, coord } => {
                write!(f, "{coord}: Dimension mismatch: [{left}] and [{right}].")
            },
            Self::ShapeMismatch { left, right, coord } => write!(f,
                                                                 "{coord}: Shape mismatch: {}x{} and {}x{}.",
                                                                 left.0, left.1, right.0, right.1),
            Self::IndexOutOfRange { index, len, coord } => {
                write!(f, "{coord}: Index {index} is out of range (length {len}).")
            },
            Self::NegativeIndex { coord } => write!(f, "{coord}: Negative index."),
            Self::VectorIndexOnMatrix { shape, coord } => write!(f,
                                                                 "{coord}: A {}x{} matrix needs two indices.",
                                                                 shape.0, shape.1),
            Self::DivisionByZero { coord } => write!(f, "{coord}: Division by zero."),
            Self::DivisionByMatrix { coord } => write!(f, "{coord}: Division by a matrix."),
            Self::DimensionedExponent { coord } => {
                write!(f, "{coord}: The exponent must be dimensionless.")
            },
            Self::FractionalPowerOfDimensioned { coord } => {
                write!(f, "{coord}: A dimensioned quantity needs an integer power.")
            },
            Self::DimensionedArgument { name, coord } => {
                write!(f, "{coord}: {name} expects a dimensionless argument.")
            },
            Self::DimensionedProduct { coord } => {
                write!(f, "{coord}: \\product factors must be dimensionless.")
            },
            Self::DuplicateParameter { name, coord } => {
                write!(f, "{coord}: Parameter {name} is listed twice.")
            },
            Self::InvalidFunctionDefinition { coord } => {
                write!(f, "{coord}: Function parameters must be plain identifiers.")
            },
            Self::InvalidAssignmentTarget { coord } => {
                write!(f, "{coord}: Cannot assign to this expression.")
            },
            Self::EmptyRange { coord } => write!(f, "{coord}: Empty range."),
            Self::InvalidRangeStep { coord } => write!(f, "{coord}: Range step must be positive."),
            Self::RangeTooLong { limit, coord } => {
                write!(f, "{coord}: Range has more than {limit} elements.")
            },
            Self::IterationLimit { limit, coord } => {
                write!(f, "{coord}: Loop exceeded {limit} iterations.")
            },
            Self::RecursionLimit { limit, coord } => {
                write!(f, "{coord}: Calls nested deeper than {limit} levels.")
            },
            Self::PlotRange { found, coord } => write!(f,
                                                       "{coord}: \\graphic needs exactly one \\range argument, found {found}."),
            Self::NoMatchingCase { coord } => write!(f, "{coord}: No case matched."),
            Self::PlaceholderOutsideEquality { coord } => write!(f,
                                                                 "{coord}: A placeholder must be the right side of '='."),
            Self::Domain { name, coord } => {
                write!(f, "{coord}: Result of {name} is not a finite number.")
            },
            Self::Overflow { coord } => write!(f, "{coord}: Number is too large."),
            Self::Unsupported { construct, coord } => {
                write!(f, "{coord}: {construct} cannot be evaluated here.")
            },
            Self::Type(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<TypeError> for EvalError {
    fn from(e: TypeError) -> Self {
        Self::Type(e)
    }
}
