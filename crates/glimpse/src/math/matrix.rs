use std::error::Error;
use std::fmt;

use crate::math::vector::Array1;

/// Row-major 2D array. Built from columns, since matrices in the inspected
/// process are stored as a sequence of column vectors.
#[derive(Clone, Debug, PartialEq)]
pub struct Array2<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Clone> Array2<T> {
    /// Transposes column-major storage: element `i` of column `j` lands at `(i, j)`.
    pub fn from_columns(columns: &[Array1<T>]) -> Result<Self, ShapeError> {
        let cols = columns.len();
        let rows = columns.first().map(Array1::len).unwrap_or(0);
        if let Some((column, found)) = columns
            .iter()
            .enumerate()
            .find(|(_, c)| c.len() != rows)
            .map(|(idx, c)| (idx, c.len()))
        {
            return Err(ShapeError {
                column,
                expected: rows,
                found,
            });
        }

        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in columns {
                data.push(col[row].clone());
            }
        }
        Ok(Self { data, rows, cols })
    }
}

impl<T> Array2<T> {
    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row-major elements.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeError {
    column: usize,
    expected: usize,
    found: usize,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "column {} has {} elements, expected {}",
            self.column, self.found, self.expected
        )
    }
}

impl Error for ShapeError {}
