//! Small ndarray-like containers for display values.
//!
//! `Array1` holds the widened elements of one vector and `Array2` holds a
//! matrix as rows of elements, assembled from column-major storage.
pub mod matrix;
pub mod vector;

pub use matrix::{Array2, ShapeError};
pub use vector::Array1;
