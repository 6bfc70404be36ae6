use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    scanner::Coordinate,
    tag::Tag,
    value::core::Value,
};

impl Context {
    /// Evaluates `\land` or `\lor` on two scalars.
    ///
    /// Any nonzero operand counts as true, whatever its dimension. Both
    /// operands are always evaluated.
    ///
    /// # Parameters
    /// - `tag`: `Tag::And` or `Tag::Or`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `coord`: Location of the operator for error reporting.
    ///
    /// # Returns
    /// A dimensionless `1` or `0`.
    ///
    /// # Example
    /// ```
    /// use texcalc::interpreter::{
    ///     evaluator::core::Context,
    ///     scanner::Coordinate,
    ///     tag::Tag,
    ///     value::core::Value,
    /// };
    ///
    /// let at = Coordinate::default();
    /// let result = Context::eval_logic(Tag::Or, &Value::number(0.0), &Value::number(-2.0), at);
    /// assert_eq!(result.unwrap(), Value::number(1.0));
    /// ```
    pub fn eval_logic(tag: Tag, left: &Value, right: &Value, coord: Coordinate) -> EvalResult<Value> {
        let (a, _) = left.as_scalar(coord)?;
        let (b, _) = right.as_scalar(coord)?;
        let (a, b) = (a != 0.0, b != 0.0);
        let holds = if tag == Tag::And { a && b } else { a || b };
        Ok(holds.into())
    }
}
