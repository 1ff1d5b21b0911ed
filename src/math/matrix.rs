//! Dense rectangular matrix
//!
//! Element `(x, y)` lives in column `x` of row `y`. Storage is one owned
//! row-major buffer. Every constructor copies its input, so a matrix never
//! shares memory with caller data or with another matrix.
//!
//! Elementwise operations walk the buffer row by row (outer `y`, inner `x`)
//! and [`Matrix::multiply`] accumulates each dot product left to right, so
//! results are bit-for-bit reproducible.

use core::ops::Mul;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::vector::{Vector, dot_slices};
use crate::error::{Dims, ElementIndex, Error, Result, ShapeProblem};

/// Heap-allocated row-major matrix of `f64`, at least 1x1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    data: Vec<f64>,
    width: usize,
    height: usize,
}

/// Check that `rows` is non-empty and rectangular, returning `(width, height)`
fn validate_rows<R: AsRef<[f64]>>(rows: &[R], op: &'static str) -> Result<(usize, usize)> {
    let shape_err = |problem| Error::Shape { op, problem };

    let first = rows.first().ok_or(shape_err(ShapeProblem::Empty))?;
    let width = first.as_ref().len();
    if width == 0 {
        return Err(shape_err(ShapeProblem::EmptyRow { row: 0 }));
    }
    for (row, values) in rows.iter().enumerate().skip(1) {
        let found = values.as_ref().len();
        if found == 0 {
            return Err(shape_err(ShapeProblem::EmptyRow { row }));
        }
        if found != width {
            return Err(shape_err(ShapeProblem::Ragged {
                row,
                expected: width,
                found,
            }));
        }
    }
    Ok((width, rows.len()))
}

impl Matrix {
    /// Copy a rectangular 2D array, one inner slice per row
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let (width, height) = validate_rows(rows, "from_rows")?;
        let mut data = Vec::with_capacity(width * height);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// All-zero matrix with `width` columns and `height` rows
    pub fn zeros(width: usize, height: usize) -> Result<Self> {
        let len = Self::checked_len(width, height, "zeros")?;
        Ok(Self {
            data: vec![0.0; len],
            width,
            height,
        })
    }

    /// Build from `f(x, y)`, called in row-major order
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> f64,
    ) -> Result<Self> {
        let len = Self::checked_len(width, height, "from_fn")?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Square identity matrix
    pub fn identity(n: usize) -> Result<Self> {
        Self::from_fn(n, n, |x, y| if x == y { 1.0 } else { 0.0 })
    }

    /// Uniform samples in `[0, 1)`, drawn row-major from `rng`
    pub fn random<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Result<Self> {
        Self::from_fn(width, height, |_, _| rng.random::<f64>())
    }

    /// Element count for a `width x height` matrix
    fn checked_len(width: usize, height: usize, op: &'static str) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::Shape {
                op,
                problem: ShapeProblem::Empty,
            });
        }
        width.checked_mul(height).ok_or(Error::Shape {
            op,
            problem: ShapeProblem::TooLarge { width, height },
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dims(&self) -> Dims {
        Dims::Matrix {
            width: self.width,
            height: self.height,
        }
    }

    pub fn is_same_size(&self, other: &Matrix) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Row-major element buffer
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn cell_offset(&self, x: usize, y: usize, op: &'static str) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfRange {
                op,
                index: ElementIndex::Cell { x, y },
                dims: self.dims(),
            });
        }
        Ok(self.offset(x, y))
    }

    pub fn get(&self, x: usize, y: usize) -> Result<f64> {
        let i = self.cell_offset(x, y, "get")?;
        Ok(self.data[i])
    }

    pub fn set(&mut self, x: usize, y: usize, value: f64) -> Result<()> {
        let i = self.cell_offset(x, y, "set")?;
        self.data[i] = value;
        Ok(())
    }

    fn row_slice(&self, y: usize) -> &[f64] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    fn column_values(&self, x: usize) -> Vec<f64> {
        (0..self.height).map(|y| self.data[self.offset(x, y)]).collect()
    }

    /// Copy of row `y`, length `width`
    pub fn row(&self, y: usize) -> Result<Vector> {
        if y >= self.height {
            return Err(Error::OutOfRange {
                op: "row",
                index: ElementIndex::Row(y),
                dims: self.dims(),
            });
        }
        Ok(Vector::from_vec_unchecked(self.row_slice(y).to_vec()))
    }

    /// Copy of column `x`, length `height`
    pub fn column(&self, x: usize) -> Result<Vector> {
        if x >= self.width {
            return Err(Error::OutOfRange {
                op: "column",
                index: ElementIndex::Column(x),
                dims: self.dims(),
            });
        }
        Ok(Vector::from_vec_unchecked(self.column_values(x)))
    }

    /// Overwrite the region shared with `rows`, leaving the rest untouched.
    ///
    /// The copied region is `min(width, src_width) x min(height, src_height)`:
    /// a larger source is truncated, a smaller one only covers the top-left
    /// corner. A malformed source fails before anything is written.
    pub fn overwrite_from<R: AsRef<[f64]>>(&mut self, rows: &[R]) -> Result<()> {
        let (src_width, src_height) = validate_rows(rows, "overwrite_from")?;
        let w = self.width.min(src_width);
        let h = self.height.min(src_height);
        if (src_width, src_height) != (self.width, self.height) {
            log::debug!(
                "overwrite_from: {}x{} source into {}x{} matrix, copying {}x{}",
                src_width,
                src_height,
                self.width,
                self.height,
                w,
                h
            );
        }
        for (y, row) in rows.iter().take(h).enumerate() {
            let start = self.offset(0, y);
            self.data[start..start + w].copy_from_slice(&row.as_ref()[..w]);
        }
        Ok(())
    }

    /// Deep copy as a vector of rows
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.width).map(<[f64]>::to_vec).collect()
    }

    /// Set every element to zero in place
    pub fn zero(&mut self) {
        self.data.fill(0.0);
    }

    /// New matrix with every element multiplied by `s`
    pub fn scale(&self, s: f64) -> Matrix {
        Matrix {
            data: self.data.iter().map(|v| v * s).collect(),
            width: self.width,
            height: self.height,
        }
    }

    fn zip_with(
        &self,
        other: &Matrix,
        op: &'static str,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Matrix> {
        if !self.is_same_size(other) {
            return Err(Error::DimensionMismatch {
                op,
                left: self.dims(),
                right: other.dims(),
            });
        }
        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
            width: self.width,
            height: self.height,
        })
    }

    /// Elementwise sum; shapes must match
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Elementwise difference; shapes must match
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Standard product `self · other`.
    ///
    /// Requires `self.width() == other.height()`. The result is
    /// `other.width()` wide and `self.height()` tall; element `(x, y)` is row
    /// `y` of `self` dotted with column `x` of `other`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.width != other.height {
            return Err(Error::DimensionMismatch {
                op: "multiply",
                left: self.dims(),
                right: other.dims(),
            });
        }
        let columns: Vec<Vec<f64>> = (0..other.width).map(|x| other.column_values(x)).collect();
        let mut data = Vec::with_capacity(other.width * self.height);
        for y in 0..self.height {
            let row = self.row_slice(y);
            for column in &columns {
                data.push(dot_slices(row, column));
            }
        }
        Ok(Matrix {
            data,
            width: other.width,
            height: self.height,
        })
    }

    /// Matrix-vector product; `v.len()` must equal `width`
    pub fn mul_vector(&self, v: &Vector) -> Result<Vector> {
        if self.width != v.len() {
            return Err(Error::DimensionMismatch {
                op: "mul_vector",
                left: self.dims(),
                right: v.dims(),
            });
        }
        let out = (0..self.height)
            .map(|y| dot_slices(self.row_slice(y), v.as_slice()))
            .collect();
        Ok(Vector::from_vec_unchecked(out))
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for x in 0..self.width {
            data.extend(self.column_values(x));
        }
        Matrix {
            data,
            width: self.height,
            height: self.width,
        }
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, s: f64) -> Matrix {
        self.scale(s)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(self, s: f64) -> Matrix {
        self.scale(s)
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        m.to_rows()
    }
}
