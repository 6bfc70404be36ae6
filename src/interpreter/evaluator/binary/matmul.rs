use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        scanner::Coordinate,
        tag::Tag,
        value::{core::Value, matrix::Matrix},
    },
};

impl Context {
    /// Multiplies two matrices.
    ///
    /// # Shape rules
    /// - `(m x n) * (n x p)` produces an `m x p` matrix, even when that is
    ///   `1 x 1`.
    /// - Two row vectors of equal length produce their dot product.
    /// - Two column vectors of equal length produce their dot product.
    ///
    /// Any other pair of shapes is a `ShapeMismatch`. Cells are combined with
    /// the scalar rules, so dimensions multiply and sums must agree.
    ///
    /// # Example
    /// ```
    /// use texcalc::interpreter::{
    ///     evaluator::core::Context,
    ///     scanner::Coordinate,
    ///     value::{core::Value, matrix::Matrix},
    /// };
    ///
    /// let row = Matrix::row(vec![Value::from(1.0), Value::from(2.0), Value::from(3.0)]).unwrap();
    ///
    /// // Row by row falls back to the dot product.
    /// let dot = Context::eval_matmul(&row, &row, Coordinate::default()).unwrap();
    /// assert_eq!(dot, Value::from(14.0));
    ///
    /// // Row by column is a true 1x1 product.
    /// let product = Context::eval_matmul(&row, &row.transpose(), Coordinate::default()).unwrap();
    /// assert_eq!(product.as_matrix(Coordinate::default()).unwrap().shape(), (1, 1));
    /// ```
    pub fn eval_matmul(left: &Matrix, right: &Matrix, coord: Coordinate) -> EvalResult<Value> {
        let (r1, c1) = left.shape();
        let (r2, c2) = right.shape();

        if c1 == r2 {
            let mut rows = Vec::with_capacity(r1);
            for i in 0..r1 {
                let mut row = Vec::with_capacity(c2);
                for j in 0..c2 {
                    let pairs = (0..c1).map(|k| (left.get(i, k), right.get(k, j)));
                    row.push(dot(pairs, coord)?);
                }
                rows.push(row);
            }
            return Matrix::from_rows(rows).map(Value::from)
                                          .ok_or(EvalError::ShapeMismatch { left:  left.shape(),
                                                                            right: right.shape(),
                                                                            coord });
        }

        if (r1 == 1 && r2 == 1 && c1 == c2) || (c1 == 1 && c2 == 1 && r1 == r2) {
            return dot(left.cells().zip(right.cells()), coord);
        }

        Err(EvalError::ShapeMismatch { left: left.shape(),
                                       right: right.shape(),
                                       coord })
    }
}

/// Sums the products of the pairs. There is always at least one pair.
fn dot<'a>(mut pairs: impl Iterator<Item = (&'a Value, &'a Value)>,
           coord: Coordinate)
           -> EvalResult<Value> {
    let Some((a, b)) = pairs.next() else {
        return Ok(Value::default());
    };
    let mut sum = Context::eval_mul(a, b, coord)?;
    for (a, b) in pairs {
        let term = Context::eval_mul(a, b, coord)?;
        sum = Context::eval_additive(Tag::Add, &sum, &term, coord)?;
    }
    Ok(sum)
}
