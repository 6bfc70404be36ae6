use std::{fmt, rc::Rc};

use crate::{
    error::{EvalError, TypeError},
    interpreter::{
        evaluator::core::EvalResult,
        scanner::Coordinate,
        value::{closure::Closure, dimension::Dimension, matrix::Matrix},
    },
};

/// Represents a runtime value in the interpreter.
///
/// Matrices and closures are shared behind [`Rc`]; copying a value is cheap
/// and mutation goes through [`Rc::make_mut`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A double-precision number carrying a physical dimension.
    /// Comparisons and logical operators produce dimensionless `1` or `0`.
    Scalar(f64, Dimension),
    /// A rectangular grid of values.
    Matrix(Rc<Matrix>),
    /// A user-defined function.
    Closure(Rc<Closure>),
}

impl Default for Value {
    fn default() -> Self {
        Self::number(0.0)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::number(if v { 1.0 } else { 0.0 })
    }
}

impl From<Matrix> for Value {
    fn from(m: Matrix) -> Self {
        Self::Matrix(Rc::new(m))
    }
}

impl From<Closure> for Value {
    fn from(c: Closure) -> Self {
        Self::Closure(Rc::new(c))
    }
}

impl Value {
    /// A dimensionless scalar.
    #[must_use]
    pub const fn number(v: f64) -> Self {
        Self::Scalar(v, Dimension::NONE)
    }

    /// Name of the value's kind, as used in type errors.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(..) => "scalar",
            Self::Matrix(_) => "matrix",
            Self::Closure(_) => "function",
        }
    }

    pub(crate) fn type_error(&self, expected: &'static str, coord: Coordinate) -> EvalError {
        EvalError::Type(TypeError { expected,
                                    found: self.kind(),
                                    coord })
    }

    /// Returns the number and dimension of a scalar.
    ///
    /// # Errors
    /// A `TypeError` for matrices and closures.
    pub fn as_scalar(&self, coord: Coordinate) -> EvalResult<(f64, Dimension)> {
        match self {
            Self::Scalar(v, d) => Ok((*v, *d)),
            _ => Err(self.type_error("scalar", coord)),
        }
    }

    /// Returns the number of a dimensionless scalar.
    ///
    /// # Errors
    /// A `TypeError` for non-scalars and a `DimensionMismatch` for
    /// dimensioned scalars.
    ///
    /// # Example
    /// ```
    /// use texcalc::interpreter::{
    ///     scanner::Coordinate,
    ///     value::{core::Value, dimension::Dimension},
    /// };
    ///
    /// let at = Coordinate::new(1, 1);
    /// assert_eq!(Value::number(2.5).as_number(at).unwrap(), 2.5);
    /// assert!(Value::Scalar(2.5, Dimension::LENGTH).as_number(at).is_err());
    /// ```
    pub fn as_number(&self, coord: Coordinate) -> EvalResult<f64> {
        let (v, dim) = self.as_scalar(coord)?;
        if !dim.is_dimensionless() {
            return Err(EvalError::DimensionMismatch { left: dim,
                                                      right: Dimension::NONE,
                                                      coord });
        }
        Ok(v)
    }

    /// Returns the matrix inside the value.
    ///
    /// # Errors
    /// A `TypeError` for scalars and closures.
    pub fn as_matrix(&self, coord: Coordinate) -> EvalResult<&Rc<Matrix>> {
        match self {
            Self::Matrix(m) => Ok(m),
            _ => Err(self.type_error("matrix", coord)),
        }
    }

    /// Returns the closure inside the value.
    ///
    /// # Errors
    /// A `TypeError` for scalars and matrices.
    pub fn as_closure(&self, coord: Coordinate) -> EvalResult<&Rc<Closure>> {
        match self {
            Self::Closure(c) => Ok(c),
            _ => Err(self.type_error("function", coord)),
        }
    }

    /// Condition truth: only a scalar exactly equal to `1` is true.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Scalar(v, _) if *v == 1.0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(v, dim) => {
                // Avoid rendering negative zero as "-0".
                let v = if *v == 0.0 { 0.0 } else { *v };
                write!(f, "{v}{}", dim.unit_suffix())
            },
            Self::Matrix(m) => m.fmt(f),
            Self::Closure(_) => f.write_str("function"),
        }
    }
}
