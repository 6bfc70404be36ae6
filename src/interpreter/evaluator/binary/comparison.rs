use std::rc::Rc;

use crate::{
    ast::{Ast, Node, NodeId},
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, child},
            environment::NameTable,
            replacement::Replacement,
        },
        scanner::Coordinate,
        tag::Tag,
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `=` and `\neq` nodes.
    ///
    /// When the right side of `=` is a placeholder, nothing is compared: the
    /// left value is recorded as the placeholder's replacement and the
    /// equality yields `1`. The right side may also be an annotated
    /// placeholder, a chain of `*` and `/` whose leftmost operand is the
    /// placeholder: `expr = \placeholder{} \cdot \meter / \second` records
    /// `expr / \meter \cdot \second`, so the placeholder shows the value in
    /// those units.
    ///
    /// # Parameters
    /// - `ast`: Arena of the node.
    /// - `node`: The `Eq` or `Neq` node.
    /// - `local`: Local table of the active call.
    ///
    /// # Returns
    /// `1` if equal (`\neq`: not equal), else `0`.
    pub(crate) fn eval_equality(&mut self,
                                ast: &Ast,
                                node: &Node,
                                mut local: Option<&mut NameTable>)
                                -> EvalResult<Value> {
        let left = self.eval(ast, child(node, node.left)?, local.as_deref_mut())?;
        let right_id = child(node, node.right)?;

        if node.tag == Tag::Eq
           && let Some((placeholder, units)) = annotated_placeholder(ast, right_id)
        {
            let mut scaled = left;
            for (op, unit) in units.into_iter().rev() {
                let unit_value = self.eval(ast, unit, local.as_deref_mut())?;
                scaled = if op.tag == Tag::Div {
                    Self::eval_mul(&scaled, &unit_value, op.coord)?
                } else {
                    Self::eval_div(&scaled, &unit_value, op.coord)?
                };
            }
            self.capture(placeholder, scaled);
            return Ok(Value::number(1.0));
        }

        let right = self.eval(ast, right_id, local)?;
        Self::eval_binary(node.tag, &left, &right, node.coord)
    }

    /// Records `value` as the replacement of a placeholder node.
    ///
    /// Placeholders inside a function body have no span: their text belongs
    /// to the block that defined the function, so nothing is recorded.
    fn capture(&mut self, placeholder: &Node, value: Value) {
        if let Some((begin, end)) = placeholder.span {
            self.replacements.insert(placeholder.coord,
                                     Replacement { tag: Tag::Placeholder,
                                                   begin,
                                                   end,
                                                   value });
        }
    }

    /// Structural equality of two values.
    ///
    /// Values of different kinds are never equal, and neither are matrices
    /// of different shapes. A function equals only itself.
    ///
    /// # Errors
    /// `DimensionMismatch` when two scalars (or matching matrix cells) carry
    /// different dimensions.
    ///
    /// # Example
    /// ```
    /// use texcalc::interpreter::{
    ///     evaluator::core::Context,
    ///     scanner::Coordinate,
    ///     value::{core::Value, matrix::Matrix},
    /// };
    ///
    /// let at = Coordinate::default();
    /// let m = Value::from(Matrix::row(vec![Value::from(1.0)]).unwrap());
    ///
    /// assert!(Context::values_equal(&Value::from(2.0), &Value::from(2.0), at).unwrap());
    /// assert!(!Context::values_equal(&Value::from(1.0), &m, at).unwrap());
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn values_equal(left: &Value, right: &Value, coord: Coordinate) -> EvalResult<bool> {
        match (left, right) {
            (Value::Scalar(a, da), Value::Scalar(b, db)) => {
                if da != db {
                    return Err(EvalError::DimensionMismatch { left: *da,
                                                              right: *db,
                                                              coord });
                }
                Ok(a == b)
            },
            (Value::Matrix(a), Value::Matrix(b)) => {
                if a.shape() != b.shape() {
                    return Ok(false);
                }
                for (x, y) in a.cells().zip(b.cells()) {
                    if !Self::values_equal(x, y, coord)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            },
            (Value::Closure(a), Value::Closure(b)) => Ok(Rc::ptr_eq(a, b)),
            _ => Ok(false),
        }
    }

    /// Evaluates `<`, `>`, `\leq` and `\geq` on scalars of equal dimension.
    pub(crate) fn eval_ordering(tag: Tag,
                                left: &Value,
                                right: &Value,
                                coord: Coordinate)
                                -> EvalResult<Value> {
        let (a, da) = left.as_scalar(coord)?;
        let (b, db) = right.as_scalar(coord)?;
        if da != db {
            return Err(EvalError::DimensionMismatch { left: da,
                                                      right: db,
                                                      coord });
        }
        let holds = match tag {
            Tag::Lt => a < b,
            Tag::Gt => a > b,
            Tag::Leq => a <= b,
            _ => a >= b,
        };
        Ok(holds.into())
    }
}

/// Splits `\placeholder{} op U1 op U2 ...` into the placeholder and its unit
/// operands, outermost operator first.
///
/// Returns `None` unless the leftmost leaf of the `*`/`/` chain is a
/// placeholder.
fn annotated_placeholder(ast: &Ast, root: NodeId) -> Option<(&Node, Vec<(&Node, NodeId)>)> {
    let mut units = Vec::new();
    let mut current = &ast[root];
    while matches!(current.tag, Tag::Mul | Tag::Div) {
        units.push((current, current.right?));
        current = &ast[current.left?];
    }
    (current.tag == Tag::Placeholder).then_some((current, units))
}
