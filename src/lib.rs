//! Random integer matrices in a fixed-width text format.
//!
//! I use this to produce input files for hardware testbenches: two random
//! 16×16 matrices, plus the transpose of the second one so it can be
//! streamed column-major. The files are plain text, one row per line,
//! each value right-justified in a 3-character field.
//!
//! ## Usage
//!
//! ```
//! use matfile::{Matrix, encode, parse};
//!
//! let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
//! let text = encode(&m.transpose()).unwrap();
//! assert_eq!(text, "  1  4\n  2  5\n  3  6\n");
//! assert_eq!(parse(&text).unwrap(), m.transpose());
//! ```
//!
//! Writing the three files of a full run:
//!
//! ```no_run
//! use matfile::{Config, run};
//!
//! let config = Config { seed: Some(42), ..Config::default() };
//! run(&config).unwrap();
//! ```
//!
//! ## What's inside
//!
//! - `matrix`: row-major [`Matrix`] and the transpose kernels
//! - `codec`: the fixed-width text layout
//! - `generate`: uniform random matrices from an injected RNG
//! - `files`: atomic reads and writes of matrix files
//! - `pipeline`: the generate, generate, transpose run

pub mod codec;
pub mod config;
pub mod error;
pub mod files;
pub mod generate;
pub mod matrix;
pub mod pipeline;

pub use codec::{FixedWidth, encode, parse};
pub use config::Config;
pub use error::{MatrixError, Result};
pub use files::{generate_file, read_matrix, transpose_file, write_matrix};
pub use generate::{Generator, GeneratorConfig, generate};
pub use matrix::Matrix;
pub use pipeline::{RunOutput, run};
