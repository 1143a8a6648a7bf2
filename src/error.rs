//! Error type shared by the shapes and numerics modules.

use thiserror::Error;

/// Errors raised when a shape or matrix operation is given invalid input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Index out of bounds: ({row}, {col})")]
    IndexOutOfRange { row: usize, col: usize },
}

impl GeometryError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        GeometryError::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, GeometryError>;
