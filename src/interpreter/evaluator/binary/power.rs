use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        scanner::Coordinate,
        value::core::Value,
    },
    util::num::f64_to_i32_exact,
};

impl Context {
    /// Evaluates `^`.
    ///
    /// The exponent must be a dimensionless scalar. A dimensionless base may
    /// be raised to any power; a dimensioned base only to an integer power,
    /// which multiplies its exponents.
    ///
    /// # Errors
    /// - `DimensionedExponent` if the exponent carries a dimension.
    /// - `FractionalPowerOfDimensioned` for `2\meter ^ 0.5`.
    /// - `Domain` if finite operands give a non-finite result, as in `(-1)^0.5`.
    /// - A `TypeError` if either operand is not a scalar.
    ///
    /// # Example
    /// ```
    /// use texcalc::interpreter::{
    ///     evaluator::core::Context,
    ///     scanner::Coordinate,
    ///     value::{core::Value, dimension::Dimension},
    /// };
    ///
    /// let side = Value::Scalar(3.0, Dimension::LENGTH);
    /// let area = Context::eval_pow(&side, &Value::number(2.0), Coordinate::default()).unwrap();
    /// assert_eq!(area, Value::Scalar(9.0, Dimension::new([2, 0, 0, 0, 0, 0, 0])));
    /// ```
    pub fn eval_pow(left: &Value, right: &Value, coord: Coordinate) -> EvalResult<Value> {
        let (exponent, exponent_dim) = right.as_scalar(coord)?;
        if !exponent_dim.is_dimensionless() {
            return Err(EvalError::DimensionedExponent { coord });
        }
        let (base, base_dim) = left.as_scalar(coord)?;

        let (v, dim) = if base_dim.is_dimensionless() {
            (base.powf(exponent), base_dim)
        } else {
            let n = f64_to_i32_exact(exponent).ok_or(EvalError::FractionalPowerOfDimensioned { coord })?;
            let dim = base_dim.powi(n).ok_or(EvalError::Overflow { coord })?;
            (base.powi(n), dim)
        };

        if !v.is_finite() && base.is_finite() && exponent.is_finite() {
            return Err(EvalError::Domain { name: "^".to_string(),
                                           coord });
        }
        Ok(Value::Scalar(v, dim))
    }
}
