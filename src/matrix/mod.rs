//! The matrix type and the transpose kernels it is built on.
//!
//! Kernels work on flat row-major slices; [`Matrix`] owns one of those
//! buffers together with its shape.

pub mod dense;
pub mod transpose;

pub use dense::Matrix;
