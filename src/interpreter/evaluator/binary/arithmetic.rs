use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        scanner::Coordinate,
        tag::Tag,
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `+` or `-`.
    ///
    /// Scalars must carry the same dimension, which the result keeps.
    /// Matrices must have the same shape and are combined cell by cell.
    /// Mixing a scalar with a matrix, or using a function, is a type error.
    pub(crate) fn eval_additive(tag: Tag,
                                left: &Value,
                                right: &Value,
                                coord: Coordinate)
                                -> EvalResult<Value> {
        match (left, right) {
            (Value::Scalar(a, da), Value::Scalar(b, db)) => {
                if da != db {
                    return Err(EvalError::DimensionMismatch { left: *da,
                                                              right: *db,
                                                              coord });
                }
                let v = if tag == Tag::Add { a + b } else { a - b };
                Ok(Value::Scalar(v, *da))
            },
            (Value::Matrix(a), Value::Matrix(b)) => {
                if a.shape() != b.shape() {
                    return Err(EvalError::ShapeMismatch { left: a.shape(),
                                                          right: b.shape(),
                                                          coord });
                }
                let sum = a.try_zip(b, |x, y| Self::eval_additive(tag, x, y, coord))?;
                Ok(sum.into())
            },
            (Value::Closure(_), _) => Err(left.type_error("scalar", coord)),
            _ => Err(right.type_error(left.kind(), coord)),
        }
    }

    /// Evaluates `*`, `\cdot` and `\times`.
    ///
    /// Scalars multiply and add their dimension exponents, failing with
    /// `Overflow` if an exponent leaves the `i32` range. A scalar times a
    /// matrix scales every cell; two matrices go through
    /// [`Context::eval_matmul`].
    pub(crate) fn eval_mul(left: &Value, right: &Value, coord: Coordinate) -> EvalResult<Value> {
        match (left, right) {
            (Value::Scalar(a, da), Value::Scalar(b, db)) => {
                let dim = da.checked_mul(*db).ok_or(EvalError::Overflow { coord })?;
                Ok(Value::Scalar(a * b, dim))
            },
            (Value::Scalar(..), Value::Matrix(m)) => {
                Ok(m.try_map(|cell| Self::eval_mul(left, cell, coord))?.into())
            },
            (Value::Matrix(m), Value::Scalar(..)) => {
                Ok(m.try_map(|cell| Self::eval_mul(cell, right, coord))?.into())
            },
            (Value::Matrix(a), Value::Matrix(b)) => Self::eval_matmul(a, b, coord),
            (Value::Closure(_), _) => Err(left.type_error("scalar", coord)),
            _ => Err(right.type_error("scalar", coord)),
        }
    }

    /// Evaluates `/` and `\frac`.
    ///
    /// Scalars divide and subtract their dimension exponents; a zero divisor
    /// fails. A matrix divided by a scalar is divided cell by cell. No value
    /// may be divided by a matrix.
    pub(crate) fn eval_div(left: &Value, right: &Value, coord: Coordinate) -> EvalResult<Value> {
        match (left, right) {
            (_, Value::Matrix(_)) => Err(EvalError::DivisionByMatrix { coord }),
            (Value::Scalar(a, da), Value::Scalar(b, db)) => {
                if *b == 0.0 {
                    return Err(EvalError::DivisionByZero { coord });
                }
                let dim = da.checked_div(*db).ok_or(EvalError::Overflow { coord })?;
                Ok(Value::Scalar(a / b, dim))
            },
            (Value::Matrix(m), Value::Scalar(..)) => {
                Ok(m.try_map(|cell| Self::eval_div(cell, right, coord))?.into())
            },
            (Value::Closure(_), _) => Err(left.type_error("scalar", coord)),
            _ => Err(right.type_error("scalar", coord)),
        }
    }
}
