//! Error taxonomy for the math kernel and entity geometry
//!
//! Every precondition violation is reported at the offending call. Nothing in
//! this crate substitutes a zero matrix or a NaN for a failed operation.

use std::fmt;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Shape of an operand, as reported in errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dims {
    Vector(usize),
    Matrix { width: usize, height: usize },
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dims::Vector(len) => write!(f, "vector of length {len}"),
            Dims::Matrix { width, height } => write!(f, "{width}x{height} matrix (w x h)"),
        }
    }
}

/// Index that failed a range check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementIndex {
    Linear(usize),
    Cell { x: usize, y: usize },
    Row(usize),
    Column(usize),
}

impl fmt::Display for ElementIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementIndex::Linear(i) => write!(f, "index {i}"),
            ElementIndex::Cell { x, y } => write!(f, "cell (x={x}, y={y})"),
            ElementIndex::Row(y) => write!(f, "row {y}"),
            ElementIndex::Column(x) => write!(f, "column {x}"),
        }
    }
}

/// Why a 2D source array was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeProblem {
    /// No rows, or a requested dimension of zero
    Empty,
    /// A row with no elements
    EmptyRow { row: usize },
    /// A row whose length differs from the first row
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// `width * height` does not fit in `usize`
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for ShapeProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeProblem::Empty => write!(f, "source is empty"),
            ShapeProblem::EmptyRow { row } => write!(f, "row {row} has no elements"),
            ShapeProblem::Ragged {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} elements, expected {expected}"),
            ShapeProblem::TooLarge { width, height } => {
                write!(f, "{width}x{height} elements overflow usize")
            }
        }
    }
}

/// Structural error kinds callers can match on without caring about payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Shape,
    DimensionMismatch,
    OutOfRange,
    InvalidExtent,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("{op}: malformed source, {problem}")]
    Shape {
        op: &'static str,
        problem: ShapeProblem,
    },

    #[error("{op}: dimension mismatch between {left} and {right}")]
    DimensionMismatch {
        op: &'static str,
        left: Dims,
        right: Dims,
    },

    #[error("{op}: {index} is out of range for {dims}")]
    OutOfRange {
        op: &'static str,
        index: ElementIndex,
        dims: Dims,
    },

    #[error("invalid extent: width {width}, height {height} (must be finite and >= 0)")]
    InvalidExtent { width: f64, height: f64 },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Shape { .. } => ErrorKind::Shape,
            Error::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            Error::OutOfRange { .. } => ErrorKind::OutOfRange,
            Error::InvalidExtent { .. } => ErrorKind::InvalidExtent,
        }
    }

    /// Name of the operation that failed, if the error carries one
    pub fn op(&self) -> Option<&'static str> {
        match self {
            Error::Shape { op, .. }
            | Error::DimensionMismatch { op, .. }
            | Error::OutOfRange { op, .. } => Some(op),
            Error::InvalidExtent { .. } => None,
        }
    }
}
