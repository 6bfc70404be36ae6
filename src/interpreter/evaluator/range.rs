use tracing::debug;

use crate::{
    ast::{Ast, Node},
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, child},
            environment::NameTable,
            replacement::Replacement,
        },
        scanner::Coordinate,
        tag::Tag,
        value::{core::Value, dimension::Dimension, matrix::Matrix},
    },
    util::num::f64_to_index,
};

/// Slack added to the element count so that an end point reached up to
/// rounding error is still included.
const RANGE_EPSILON: f64 = 1e-9;

impl Context {
    /// Evaluates `\range[step]{from}{to}`.
    ///
    /// The bounds and the step must be scalars of one dimension; the default
    /// step (`settings.range_step`) takes the dimension of `from`.
    pub(crate) fn eval_range(&mut self,
                             ast: &Ast,
                             node: &Node,
                             mut local: Option<&mut NameTable>)
                             -> EvalResult<Value> {
        let from = self.eval(ast, child(node, node.left)?, local.as_deref_mut())?;
        let to = self.eval(ast, child(node, node.right)?, local.as_deref_mut())?;
        let (from, dim) = from.as_scalar(node.coord)?;
        let (to, to_dim) = to.as_scalar(node.coord)?;
        check_dimension(dim, to_dim, node.coord)?;

        let step = match node.cond {
            Some(step) => {
                let (step, step_dim) = self.eval(ast, step, local)?.as_scalar(node.coord)?;
                check_dimension(dim, step_dim, node.coord)?;
                step
            },
            None => self.settings.range_step,
        };

        range(from, to, step, dim, self.settings.max_range_len, node.coord).map(Value::from)
    }

    /// Evaluates `\graphic{f}{args}{points}`.
    ///
    /// Exactly one argument must be a `\range`. The function is called once
    /// per element of that range, with the other arguments held fixed, and
    /// the `n x 2` matrix of `(x, f(x))` rows replaces the points group of
    /// the source.
    ///
    /// # Errors
    /// - `PlotRange` unless exactly one argument is a range.
    /// - Any error of the calls, including `ArgumentCountMismatch`.
    pub(crate) fn eval_graphic(&mut self,
                               ast: &Ast,
                               node: &Node,
                               mut local: Option<&mut NameTable>)
                               -> EvalResult<Value> {
        let callee = self.env
                         .lookup(&node.label, local.as_deref())
                         .cloned()
                         .ok_or_else(|| EvalError::UndefinedVariable { name:  node.label.clone(),
                                                                       coord: node.coord, })?;
        let closure = callee.as_closure(node.coord)?;

        let ranges: Vec<usize> = node.fields
                                     .iter()
                                     .enumerate()
                                     .filter(|&(_, &field)| ast[field].tag == Tag::Range)
                                     .map(|(position, _)| position)
                                     .collect();
        let [position] = ranges[..] else {
            return Err(EvalError::PlotRange { found: ranges.len(),
                                              coord: node.coord, });
        };

        let mut args = Vec::with_capacity(node.fields.len());
        for &field in &node.fields {
            args.push(self.eval(ast, field, local.as_deref_mut())?);
        }
        let xs = args[position].as_matrix(node.coord)?.clone();

        let mut rows = Vec::with_capacity(xs.cols());
        for x in xs.cells() {
            let mut call_args = args.clone();
            call_args[position] = x.clone();
            let y = self.call_closure(&node.label, closure, call_args, node.coord)?;
            rows.push(vec![x.clone(), y]);
        }
        let points = Value::from(Matrix::from_rows(rows).ok_or(EvalError::EmptyRange { coord: node.coord })?);

        debug!(function = %node.label, points = xs.cols(), "sampled graphic");
        if let Some((begin, end)) = node.span {
            self.replacements.insert(node.coord,
                                     Replacement { tag: Tag::Graphic,
                                                   begin,
                                                   end,
                                                   value: points.clone() });
        }
        Ok(points)
    }
}

fn check_dimension(expected: Dimension, found: Dimension, coord: Coordinate) -> EvalResult<()> {
    if expected != found {
        return Err(EvalError::DimensionMismatch { left: expected,
                                                  right: found,
                                                  coord });
    }
    Ok(())
}

/// Builds the row vector `from, from + step, ...` up to `to` inclusive.
///
/// Element `i` is computed as `from + i * step`, so rounding errors do not
/// accumulate.
///
/// # Errors
/// - `InvalidRangeStep` if `step` is not a positive finite number.
/// - `EmptyRange` if `to < from`.
/// - `RangeTooLong` if there would be more than `limit` elements.
///
/// # Example
/// ```
/// use texcalc::interpreter::{
///     evaluator::range::range,
///     scanner::Coordinate,
///     value::{core::Value, dimension::Dimension},
/// };
///
/// let m = range(0.0, 10.0, 2.0, Dimension::NONE, 100, Coordinate::default()).unwrap();
/// let xs: Vec<Value> = m.cells().cloned().collect();
/// assert_eq!(xs, [0.0, 2.0, 4.0, 6.0, 8.0, 10.0].map(Value::number));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn range(from: f64,
             to: f64,
             step: f64,
             dim: Dimension,
             limit: usize,
             coord: Coordinate)
             -> EvalResult<Matrix> {
    if step <= 0.0 || !step.is_finite() {
        return Err(EvalError::InvalidRangeStep { coord });
    }
    if to < from {
        return Err(EvalError::EmptyRange { coord });
    }

    let last = ((to - from) / step + RANGE_EPSILON).floor();
    if !last.is_finite() || last >= limit as f64 {
        return Err(EvalError::RangeTooLong { limit, coord });
    }
    let count = f64_to_index(last, coord)? + 1;

    let cells = (0..count).map(|i| Value::Scalar(from + i as f64 * step, dim)).collect();
    Matrix::row(cells).ok_or(EvalError::EmptyRange { coord })
}
