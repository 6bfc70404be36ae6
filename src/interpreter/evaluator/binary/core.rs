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
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operator. Additive operators and division go through the
    /// arithmetic handlers, which check physical dimensions and matrix
    /// shapes. Multiplication of two matrices delegates to `eval_matmul`.
    /// Power calls `eval_pow`. Relational operators use `eval_ordering` and
    /// equality uses `values_equal`. Logical operators call `eval_logic`.
    ///
    /// # Parameters
    /// - `tag`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `coord`: Location of the operator for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
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
    /// let at = Coordinate::new(1, 3);
    /// let distance = Value::Scalar(6.0, Dimension::LENGTH);
    /// let time = Value::Scalar(2.0, Dimension::TIME);
    ///
    /// let speed = Context::eval_binary(Tag::Div, &distance, &time, at).unwrap();
    /// assert_eq!(speed, Value::Scalar(3.0, Dimension::new([1, 0, -1, 0, 0, 0, 0])));
    ///
    /// assert!(Context::eval_binary(Tag::Add, &distance, &time, at).is_err());
    /// ```
    pub fn eval_binary(tag: Tag, left: &Value, right: &Value, coord: Coordinate) -> EvalResult<Value> {
        match tag {
            Tag::Add | Tag::Sub => Self::eval_additive(tag, left, right, coord),
            Tag::Mul => Self::eval_mul(left, right, coord),
            Tag::Div => Self::eval_div(left, right, coord),
            Tag::Pow => Self::eval_pow(left, right, coord),
            Tag::Lt | Tag::Gt | Tag::Leq | Tag::Geq => Self::eval_ordering(tag, left, right, coord),
            Tag::Eq => Ok(Self::values_equal(left, right, coord)?.into()),
            Tag::Neq => Ok((!Self::values_equal(left, right, coord)?).into()),
            Tag::And | Tag::Or => Self::eval_logic(tag, left, right, coord),
            _ => Err(EvalError::Unsupported { construct: tag.to_string(),
                                              coord }),
        }
    }
}
