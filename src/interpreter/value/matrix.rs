use std::fmt;

use crate::interpreter::value::core::Value;

/// A non-empty, rectangular grid of values stored in row-major order.
///
/// Cells are arbitrary values, so matrices may nest.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows:  usize,
    cols:  usize,
    cells: Vec<Value>,
}

impl Matrix {
    /// Builds a matrix from its rows.
    ///
    /// Returns `None` if there are no rows, a row is empty, or the rows have
    /// different lengths.
    ///
    /// # Example
    /// ```
    /// use texcalc::interpreter::value::{core::Value, matrix::Matrix};
    ///
    /// let m = Matrix::from_rows(vec![vec![Value::from(1.0), Value::from(2.0)],
    ///                                vec![Value::from(3.0), Value::from(4.0)]]).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    /// assert_eq!(m.get(1, 0), &Value::from(3.0));
    ///
    /// assert!(Matrix::from_rows(vec![vec![Value::from(1.0)], vec![]]).is_none());
    /// ```
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<Value>>) -> Option<Self> {
        let cols = rows.first()?.len();
        if cols == 0 || rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        Some(Self { rows: rows.len(),
                    cols,
                    cells: rows.into_iter().flatten().collect() })
    }

    /// Builds a `1 x n` matrix. Returns `None` for an empty vector.
    #[must_use]
    pub fn row(cells: Vec<Value>) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        Some(Self { rows: 1,
                    cols: cells.len(),
                    cells })
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, columns)`.
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns `true` for `1 x n` and `n x 1` matrices.
    #[must_use]
    pub const fn is_vector(&self) -> bool {
        self.rows == 1 || self.cols == 1
    }

    /// The cell at `(row, col)`. Panics when out of range; callers check
    /// against [`Matrix::shape`] first.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> &Value {
        &self.cells[row * self.cols + col]
    }

    /// Mutable access to the cell at `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut Value {
        &mut self.cells[row * self.cols + col]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Value> {
        self.cells.iter()
    }

    /// Iterates over the rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Value]> {
        self.cells.chunks(self.cols)
    }

    /// Returns the transposed matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                cells.push(self.get(row, col).clone());
            }
        }
        Self { rows: self.cols,
               cols: self.rows,
               cells }
    }

    /// Applies a fallible function to every cell, keeping the shape.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_map<E>(&self, mut f: impl FnMut(&Value) -> Result<Value, E>) -> Result<Self, E> {
        let cells = self.cells.iter().map(&mut f).collect::<Result<Vec<_>, E>>()?;
        Ok(Self { rows: self.rows,
                  cols: self.cols,
                  cells })
    }

    /// Combines two matrices of equal shape cell by cell.
    ///
    /// Shapes are checked by the caller.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_zip<E>(&self,
                      other: &Self,
                      mut f: impl FnMut(&Value, &Value) -> Result<Value, E>)
                      -> Result<Self, E> {
        let cells = self.cells
                        .iter()
                        .zip(&other.cells)
                        .map(|(a, b)| f(a, b))
                        .collect::<Result<Vec<_>, E>>()?;
        Ok(Self { rows: self.rows,
                  cols: self.cols,
                  cells })
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r"\begin{{pmatrix}}")?;
        for (i, row) in self.row_slices().enumerate() {
            if i > 0 {
                writeln!(f, r"\\")?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" & ")?;
                }
                write!(f, "{cell}")?;
            }
        }
        f.write_str(r"\end{pmatrix}")
    }
}
