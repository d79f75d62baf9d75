//! Error taxonomy for matrix files.

use std::path::PathBuf;

/// Convenience result type used across the crate.
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Everything that can go wrong while generating, parsing, encoding or
/// writing a matrix.
#[derive(thiserror::Error, Debug)]
pub enum MatrixError {
    /// Reading or writing a matrix file failed.
    #[error("i/o error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Matrix text that does not follow the fixed-width layout.
    #[error("format error on line {line}: {message}")]
    Format { line: usize, message: String },

    /// Rows of unequal length, or a flat buffer that doesn't match its shape.
    #[error("shape error: {0}")]
    Shape(String),

    /// A value with more digits than the field holds.
    #[error("value {value} does not fit in a {width}-character field")]
    Range { value: u32, width: usize },

    /// Invalid configuration (zero width, empty value range, ...).
    #[error("config error: {0}")]
    Config(String),
}

impl MatrixError {
    /// Build a [`MatrixError::Io`] value for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a [`MatrixError::Format`] value.
    pub fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }

    /// Build a [`MatrixError::Shape`] value.
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    /// Build a [`MatrixError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
