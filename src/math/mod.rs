//! Dense linear algebra kernel
//!
//! - [`Vector`]: fixed-length numeric vector with a dot product
//! - [`Matrix`]: rectangular row-major matrix with elementwise arithmetic,
//!   matrix products, and row/column projection into vectors

pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
