//! Fixed-length numeric vector
//!
//! Rows and columns of a [`Matrix`](super::Matrix) come back as vectors. They
//! are always fresh copies, never views into the matrix.

use serde::{Deserialize, Serialize};

use crate::error::{Dims, ElementIndex, Error, Result, ShapeProblem};

/// Heap-allocated vector of `f64` with a fixed length of at least one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Copy a slice into a new vector
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        Self::from_vec(values.to_vec(), "from_slice")
    }

    /// Zero vector of length `len`
    pub fn zeros(len: usize) -> Result<Self> {
        Self::from_vec(vec![0.0; len], "zeros")
    }

    fn from_vec(data: Vec<f64>, op: &'static str) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::Shape {
                op,
                problem: ShapeProblem::Empty,
            });
        }
        Ok(Self { data })
    }

    /// Build from data already known to be non-empty
    pub(crate) fn from_vec_unchecked(data: Vec<f64>) -> Self {
        debug_assert!(!data.is_empty());
        Self { data }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; a vector holds at least one element
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn dims(&self) -> Dims {
        Dims::Vector(self.len())
    }

    pub fn get(&self, i: usize) -> Result<f64> {
        self.data
            .get(i)
            .copied()
            .ok_or_else(|| self.out_of_range("get", i))
    }

    pub fn set(&mut self, i: usize, value: f64) -> Result<()> {
        if i >= self.len() {
            return Err(self.out_of_range("set", i));
        }
        self.data[i] = value;
        Ok(())
    }

    /// Dot product, accumulated in index order starting from zero
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        if self.len() != other.len() {
            return Err(Error::DimensionMismatch {
                op: "dot",
                left: self.dims(),
                right: other.dims(),
            });
        }
        Ok(dot_slices(&self.data, &other.data))
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().copied()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    fn out_of_range(&self, op: &'static str, i: usize) -> Error {
        Error::OutOfRange {
            op,
            index: ElementIndex::Linear(i),
            dims: self.dims(),
        }
    }
}

/// Left-to-right dot product over equal-length slices
pub(crate) fn dot_slices(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    let mut sum = 0.0;
    for (x, y) in a.iter().zip(b) {
        sum += x * y;
    }
    sum
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = Error;

    fn try_from(data: Vec<f64>) -> Result<Self> {
        Self::from_vec(data, "try_from")
    }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Self {
        v.data
    }
}
