//! Error types for the matrix output path

use core::fmt;

/// Error type for matrix output operations
///
/// Generic over the error of the underlying [`MatrixBus`](crate::MatrixBus),
/// which for GPIO bit-banging is the pin error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError<E> {
    /// Bus (pin) operation failed
    Bus(E),
}

impl<E: fmt::Debug> fmt::Display for MatrixError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Bus(e) => write!(f, "Bus error: {:?}", e),
        }
    }
}

impl<E> From<E> for MatrixError<E> {
    fn from(e: E) -> Self {
        MatrixError::Bus(e)
    }
}
