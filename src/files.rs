//! Matrix files on disk.
//!
//! Writes go to a temporary file next to the destination and are renamed
//! into place once the whole matrix is on disk. New files get the usual
//! umask-derived mode; replaced files keep theirs. A failed write or a failed
//! parse leaves whatever was at the destination before untouched.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::Builder;
use tracing::{debug, info};

use crate::codec::FixedWidth;
use crate::error::{MatrixError, Result};
use crate::generate::{Generator, GeneratorConfig};
use crate::matrix::Matrix;

/// Read and parse a matrix file.
#[tracing::instrument(skip(codec), fields(width = codec.width()))]
pub fn read_matrix(path: &Path, codec: &FixedWidth) -> Result<Matrix> {
    let text = fs::read_to_string(path).map_err(|e| MatrixError::io(path, e))?;
    let matrix = codec.parse(&text)?;
    debug!(rows = matrix.rows(), cols = matrix.cols(), "parsed matrix");
    Ok(matrix)
}

/// Encode `matrix` and replace `path` with it.
#[tracing::instrument(skip(matrix, codec), fields(rows = matrix.rows(), cols = matrix.cols()))]
pub fn write_matrix(path: &Path, matrix: &Matrix, codec: &FixedWidth) -> Result<()> {
    let text = codec.encode(matrix)?;
    write_atomic(path, text.as_bytes())?;
    debug!(bytes = text.len(), "wrote matrix");
    Ok(())
}

/// Generate one matrix and write it to `path`.
///
/// The configuration is checked against the field width before any file
/// is touched.
pub fn generate_file(path: &Path, config: &GeneratorConfig, codec: &FixedWidth) -> Result<Matrix> {
    config.validate(codec)?;
    let matrix = Generator::new(config.clone()).generate()?;
    write_matrix(path, &matrix, codec)?;
    info!(
        path = %path.display(),
        rows = config.rows,
        cols = config.cols,
        "generated matrix"
    );
    Ok(matrix)
}

/// Read `input`, transpose it, write the result to `output`.
///
/// Returns the transposed matrix.
pub fn transpose_file(input: &Path, output: &Path, codec: &FixedWidth) -> Result<Matrix> {
    let matrix = read_matrix(input, codec)?;
    let transposed = matrix.transpose();
    write_matrix(output, &transposed, codec)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        rows = transposed.rows(),
        cols = transposed.cols(),
        "transposed matrix"
    );
    Ok(transposed)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    builder.prefix(".matfile");
    // 0666 before umask, the mode a plain create would get.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir).map_err(|e| MatrixError::io(dir, e))?;

    // Overwriting keeps the mode of the file being replaced.
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| MatrixError::io(tmp.path(), e))?;
    }

    tmp.write_all(bytes)
        .and_then(|()| tmp.flush())
        .map_err(|e| MatrixError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| MatrixError::io(path, e.error))?;
    Ok(())
}
