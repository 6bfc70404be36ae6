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
    /// Evaluates a prefix operation on a value.
    ///
    /// Supported operators:
    /// - `UAdd`: identity on scalars and matrices.
    /// - `USub`: negation of a scalar (keeping its dimension), or of every cell
    ///   of a matrix.
    /// - `Not`: `1` if the scalar is zero, else `0`.
    ///
    /// Functions are rejected with a type error.
    ///
    /// # Parameters
    /// - `tag`: Prefix operator.
    /// - `value`: Operand.
    /// - `coord`: Location of the operator for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use texcalc::interpreter::{
    ///     evaluator::core::Context,
    ///     scanner::Coordinate,
    ///     tag::Tag,
    ///     value::{core::Value, dimension::Dimension},
    /// };
    ///
    /// let at = Coordinate::default();
    ///
    /// let v = Context::eval_unary(Tag::USub, &Value::Scalar(5.0, Dimension::MASS), at).unwrap();
    /// assert_eq!(v, Value::Scalar(-5.0, Dimension::MASS));
    ///
    /// let v = Context::eval_unary(Tag::Not, &Value::number(0.0), at).unwrap();
    /// assert_eq!(v, Value::number(1.0));
    /// ```
    pub fn eval_unary(tag: Tag, value: &Value, coord: Coordinate) -> EvalResult<Value> {
        match (tag, value) {
            (_, Value::Closure(_)) => Err(value.type_error("scalar", coord)),
            (Tag::UAdd, _) => Ok(value.clone()),
            (Tag::USub, Value::Scalar(v, dim)) => Ok(Value::Scalar(-v, *dim)),
            (Tag::USub, Value::Matrix(m)) => {
                Ok(m.try_map(|cell| Self::eval_unary(Tag::USub, cell, coord))?.into())
            },
            (Tag::Not, _) => {
                let (v, _) = value.as_scalar(coord)?;
                Ok((v == 0.0).into())
            },
            _ => Err(EvalError::Unsupported { construct: tag.to_string(),
                                              coord }),
        }
    }

    /// Evaluates `\transp{m}`.
    ///
    /// # Errors
    /// A `TypeError` if the operand is not a matrix.
    pub fn eval_transpose(value: &Value, coord: Coordinate) -> EvalResult<Value> {
        Ok(value.as_matrix(coord)?.transpose().into())
    }
}
