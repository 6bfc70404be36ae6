use crate::{
    ast::{Ast, Node},
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            environment::NameTable,
        },
        scanner::Coordinate,
        value::{core::Value, matrix::Matrix},
    },
    util::num::f64_to_index,
};

impl Context {
    /// Evaluates a name, with its subscript if it has one.
    ///
    /// `x` reads the binding; `v_i` and `m_{i, j}` read one cell of a matrix
    /// binding (see [`resolve_index`]).
    ///
    /// # Errors
    /// - `UndefinedVariable` if the name is bound nowhere.
    /// - Any error of [`resolve_index`] or of the index expressions.
    pub(crate) fn eval_ident(&mut self,
                             ast: &Ast,
                             node: &Node,
                             mut local: Option<&mut NameTable>)
                             -> EvalResult<Value> {
        let value = self.env
                        .lookup(&node.label, local.as_deref())
                        .cloned()
                        .ok_or_else(|| EvalError::UndefinedVariable { name:  node.label.clone(),
                                                                      coord: node.coord, })?;
        if node.fields.is_empty() {
            return Ok(value);
        }

        let indices = self.eval_indices(ast, node, local.as_deref_mut())?;
        let matrix = value.as_matrix(node.coord)?;
        let (row, col) = resolve_index(matrix, &indices, node.coord)?;
        Ok(matrix.get(row, col).clone())
    }

    /// Evaluates the subscript expressions of `node` as indices.
    ///
    /// Each index must be a dimensionless number; it is truncated toward
    /// zero.
    pub(crate) fn eval_indices(&mut self,
                               ast: &Ast,
                               node: &Node,
                               mut local: Option<&mut NameTable>)
                               -> EvalResult<Vec<usize>> {
        let mut indices = Vec::with_capacity(node.fields.len());
        for &field in &node.fields {
            let value = self.eval(ast, field, local.as_deref_mut())?;
            let number = value.as_number(ast[field].coord)?;
            indices.push(f64_to_index(number, ast[field].coord)?);
        }
        Ok(indices)
    }
}

/// Maps 0-based subscripts to a `(row, column)` cell.
///
/// One index addresses a row or column vector along its length; two
/// indices address `(row, column)`.
///
/// # Errors
/// - `VectorIndexOnMatrix` for one index on a matrix with several rows and
///   columns.
/// - `IndexOutOfRange` for an index past the end.
///
/// # Example
/// ```
/// use texcalc::interpreter::{
///     evaluator::index::resolve_index,
///     scanner::Coordinate,
///     value::{core::Value, matrix::Matrix},
/// };
///
/// let at = Coordinate::default();
/// let column = Matrix::row(vec![Value::from(1.0), Value::from(2.0)]).unwrap().transpose();
///
/// assert_eq!(resolve_index(&column, &[1], at).unwrap(), (1, 0));
/// assert!(resolve_index(&column, &[2], at).is_err());
/// assert_eq!(resolve_index(&column, &[1, 0], at).unwrap(), (1, 0));
/// ```
pub fn resolve_index(matrix: &Matrix, indices: &[usize], coord: Coordinate) -> EvalResult<(usize, usize)> {
    let (rows, cols) = matrix.shape();
    let (row, col) = match *indices {
        [i] if rows == 1 => (0, i),
        [i] if cols == 1 => (i, 0),
        [_] => {
            return Err(EvalError::VectorIndexOnMatrix { shape: matrix.shape(),
                                                        coord });
        },
        [i, j] => (i, j),
        _ => {
            return Err(EvalError::Unsupported { construct: format!("{} indices", indices.len()),
                                                coord });
        },
    };

    if row >= rows {
        return Err(EvalError::IndexOutOfRange { index: row,
                                                len: rows,
                                                coord });
    }
    if col >= cols {
        return Err(EvalError::IndexOutOfRange { index: col,
                                                len: cols,
                                                coord });
    }
    Ok((row, col))
}
