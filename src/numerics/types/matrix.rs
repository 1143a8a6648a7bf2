// src/numerics/types/matrix.rs
// Dense row-major integer matrix with checked construction and access.

use core::fmt;
use core::ops::Mul;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::spiral::Spiral;
use crate::error::{GeometryError, Result};
use crate::numerics::random::RandomSource;

/// A rows × cols grid of `i32` values.
///
/// Both dimensions are at least one and never change after construction.
/// The matrix owns its storage exclusively: every constructor copies the
/// caller's data, and [`Matrix::to_grid`] hands out a fresh copy.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i32>,
}

impl Matrix {
    /// Construct a matrix by copying a rectangular grid.
    ///
    /// Fails with `InvalidArgument` when the grid has no rows, the first row
    /// is empty, or any row differs in length from the first.
    pub fn from_grid<R: AsRef<[i32]>>(grid: &[R]) -> Result<Self> {
        let first = grid
            .first()
            .ok_or_else(|| GeometryError::invalid("Data array must be non-empty."))?;
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(GeometryError::invalid("Data array must be non-empty."));
        }

        let mut data = Vec::with_capacity(grid.len() * cols);
        for row in grid {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GeometryError::invalid("All rows must have the same length."));
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: grid.len(),
            cols,
            data,
        })
    }

    /// Construct a rows × cols matrix whose cells are drawn independently
    /// from `[min_value, max_value]`, row by row.
    ///
    /// Time complexity: O(rows * cols)
    pub fn random<S>(
        rows: usize,
        cols: usize,
        min_value: i32,
        max_value: i32,
        source: &mut S,
    ) -> Result<Self>
    where
        S: RandomSource + ?Sized,
    {
        if rows == 0 || cols == 0 {
            return Err(GeometryError::invalid("Rows and columns must be positive."));
        }
        if min_value > max_value {
            return Err(GeometryError::invalid("minValue must be <= maxValue."));
        }

        let data = (0..rows * cols)
            .map(|_| source.next_in_range(min_value, max_value))
            .collect();
        debug!(rows, cols, min_value, max_value, "generated random matrix");

        Ok(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn data(&self) -> &[i32] {
        &self.data
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(GeometryError::IndexOutOfRange { row, col });
        }
        Ok(row * self.cols + col)
    }

    /// Read a single cell.
    pub fn get(&self, row: usize, col: usize) -> Result<i32> {
        let offset = self.offset(row, col)?;
        Ok(self.data[offset])
    }

    /// Overwrite a single cell in place.
    pub fn set(&mut self, row: usize, col: usize, value: i32) -> Result<()> {
        let offset = self.offset(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> Option<&[i32]> {
        if idx >= self.rows {
            return None;
        }
        let start = idx * self.cols;
        Some(&self.data[start..start + self.cols])
    }

    /// Iterate over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        self.data.chunks(self.cols)
    }

    /// Copy the cells out into a nested grid.
    pub fn to_grid(&self) -> Vec<Vec<i32>> {
        self.iter_rows().map(<[i32]>::to_vec).collect()
    }

    /// Return a new matrix with `result[j][i] = self[i][j]`.
    ///
    /// Time complexity: O(rows * cols)
    pub fn transpose(&self) -> Matrix {
        let mut data = vec![0; self.data.len()];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        debug!(rows = self.cols, cols = self.rows, "transposed matrix");
        Matrix {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Cells in clockwise spiral order from the top-left corner.
    pub fn spiral(&self) -> Spiral<'_> {
        Spiral::new(self)
    }

    /// Multiply `self` (m × n) by `other` (n × p) giving an m × p matrix.
    ///
    /// Sums use two's complement wrapping, matching 32-bit integer hardware
    /// arithmetic rather than panicking on overflow.
    ///
    /// Time complexity: O(m * n * p)
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(GeometryError::invalid(format!(
                "Incompatible matrix dimensions for multiplication: {}x{} * {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )));
        }

        let (m, n, p) = (self.rows, self.cols, other.cols);
        let mut data = Vec::with_capacity(m * p);
        for i in 0..m {
            let lhs = &self.data[i * n..(i + 1) * n];
            for j in 0..p {
                let sum = lhs.iter().enumerate().fold(0i32, |acc, (k, &a)| {
                    acc.wrapping_add(a.wrapping_mul(other.data[k * p + j]))
                });
                data.push(sum);
            }
        }
        trace!(m, n, p, "multiplied matrices");

        Ok(Matrix { rows: m, cols: p, data })
    }

    /// Write the grid followed by a blank line.
    pub fn print_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    /// Print the grid to stdout, followed by a blank line.
    pub fn print(&self) -> io::Result<()> {
        self.print_to(&mut io::stdout().lock())
    }

    /// Write the spiral order, each value followed by a space, then a newline.
    pub fn print_spiral_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for value in self.spiral() {
            write!(out, "{value} ")?;
        }
        writeln!(out)
    }

    pub fn print_spiral(&self) -> io::Result<()> {
        self.print_spiral_to(&mut io::stdout().lock())
    }
}

/// Each cell right-aligned in a 4 character field, one line per row.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for value in row {
                write!(f, "{value:4}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<i32>>> for Matrix {
    type Error = GeometryError;

    fn try_from(grid: Vec<Vec<i32>>) -> Result<Self> {
        Matrix::from_grid(&grid)
    }
}

impl From<&Matrix> for Vec<Vec<i32>> {
    fn from(m: &Matrix) -> Self {
        m.to_grid()
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: &Matrix) -> Result<Matrix> {
        self.multiply(rhs)
    }
}

// Serialized as a nested grid; deserialization re-validates the shape.
impl Serialize for Matrix {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter_rows())
    }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let grid = <Vec<Vec<i32>>>::deserialize(deserializer)?;
        Matrix::from_grid(&grid).map_err(serde::de::Error::custom)
    }
}
