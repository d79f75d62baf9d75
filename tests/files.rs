use std::fs;

use matfile::codec::FixedWidth;
use matfile::{Config, GeneratorConfig, Matrix, MatrixError, parse, run};

// ============================================================
// Single files
// ============================================================

#[test]
fn test_generate_file_writes_encoded_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("m.txt");
    let codec = FixedWidth::default();
    let config = GeneratorConfig::default().with_shape(2, 2).with_range(5, 5);

    let m = matfile::generate_file(&path, &config, &codec).unwrap();

    assert_eq!(m, Matrix::filled(2, 2, 5));
    assert_eq!(fs::read_to_string(&path).unwrap(), "  5  5\n  5  5\n");
}

#[test]
fn test_generate_file_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("m.txt");
    fs::write(&path, "stale contents that are much longer than the new matrix\n").unwrap();

    let config = GeneratorConfig::default().with_shape(1, 2).with_range(7, 7);
    matfile::generate_file(&path, &config, &FixedWidth::default()).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "  7  7\n");
}

#[test]
fn test_generate_file_rejects_range_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("m.txt");
    let config = GeneratorConfig::default().with_range(0, 1000);

    let err = matfile::generate_file(&path, &config, &FixedWidth::default()).unwrap_err();

    assert!(matches!(err, MatrixError::Range { .. }), "{err}");
    assert!(!path.exists());
}

#[test]
fn test_generate_file_rejects_zero_rows_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("m.txt");
    let config = GeneratorConfig::default().with_shape(0, 5);

    let err = matfile::generate_file(&path, &config, &FixedWidth::default()).unwrap_err();

    assert!(matches!(err, MatrixError::Config(_)), "{err}");
    assert!(!path.exists());
}

#[cfg(unix)]
#[test]
fn test_new_file_gets_umask_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("plain.txt");
    fs::write(&plain, "").unwrap();
    let path = dir.path().join("m.txt");

    matfile::write_matrix(&path, &Matrix::filled(2, 2, 1), &FixedWidth::default()).unwrap();

    let mode = |p: &std::path::Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode(&path), mode(&plain));
}

#[cfg(unix)]
#[test]
fn test_overwrite_keeps_existing_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("m.txt");
    fs::write(&path, "old\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

    let config = GeneratorConfig::default().with_shape(2, 3);
    matfile::generate_file(&path, &config, &FixedWidth::default()).unwrap();

    assert_eq!(fs::metadata(&path).unwrap().permissions().mode() & 0o777, 0o640);
    assert_eq!(parse(&fs::read_to_string(&path).unwrap()).unwrap().shape(), (2, 3));
}

#[test]
fn test_transpose_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "  1  2  3\n  4  5  6\n").unwrap();

    let t = matfile::transpose_file(&input, &output, &FixedWidth::default()).unwrap();

    assert_eq!(t.shape(), (3, 2));
    assert_eq!(fs::read_to_string(&output).unwrap(), "  1  4\n  2  5\n  3  6\n");
}

#[test]
fn test_transpose_missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.txt");
    let output = dir.path().join("out.txt");

    let err = matfile::transpose_file(&input, &output, &FixedWidth::default()).unwrap_err();

    assert!(matches!(err, MatrixError::Io { ref path, .. } if *path == input), "{err}");
    assert!(!output.exists());
}

#[test]
fn test_failed_transpose_leaves_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "  1  2\n  3\n").unwrap();
    fs::write(&output, "previous\n").unwrap();

    let err = matfile::transpose_file(&input, &output, &FixedWidth::default()).unwrap_err();

    assert!(matches!(err, MatrixError::Format { line: 2, .. }), "{err}");
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous\n");
    // Only the two files we created; no temporaries left behind.
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[test]
fn test_write_to_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("m.txt");

    let err = matfile::write_matrix(&path, &Matrix::filled(1, 1, 1), &FixedWidth::default())
        .unwrap_err();

    assert!(matches!(err, MatrixError::Io { .. }), "{err}");
}

// ============================================================
// Full run
// ============================================================

#[test]
fn test_run_writes_three_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        seed: Some(7),
        dir: dir.path().to_path_buf(),
        ..Config::default()
    };

    let out = run(&config).unwrap();

    let a = parse(&fs::read_to_string(config.a_path()).unwrap()).unwrap();
    let b_original = parse(&fs::read_to_string(config.b_original_path()).unwrap()).unwrap();
    let b = parse(&fs::read_to_string(config.b_path()).unwrap()).unwrap();

    assert_eq!(a, out.a);
    assert_eq!(b_original, out.b_original);
    assert_eq!(b, out.b);
    assert_eq!(b, b_original.transpose());
    assert_eq!(a.shape(), (16, 16));
    assert!(a.as_slice().iter().all(|&v| v <= 20));
    assert_ne!(a, b_original);
}

#[test]
fn test_run_is_reproducible_with_seed() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let config = Config {
        rows: 4,
        cols: 6,
        seed: Some(99),
        dir: first.path().to_path_buf(),
        ..Config::default()
    };

    run(&config).unwrap();
    let again = Config {
        dir: second.path().to_path_buf(),
        ..config.clone()
    };
    run(&again).unwrap();

    for (x, y) in [
        (config.a_path(), again.a_path()),
        (config.b_original_path(), again.b_original_path()),
        (config.b_path(), again.b_path()),
    ] {
        assert_eq!(fs::read_to_string(x).unwrap(), fs::read_to_string(y).unwrap());
    }
    assert_eq!(
        parse(&fs::read_to_string(config.b_path()).unwrap()).unwrap().shape(),
        (6, 4)
    );
}

#[test]
fn test_run_rejects_zero_rows_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        rows: 0,
        cols: 5,
        seed: Some(1),
        dir: dir.path().to_path_buf(),
        ..Config::default()
    };

    assert!(matches!(run(&config), Err(MatrixError::Config(_))));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_run_rejects_bad_config_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        width: 0,
        dir: dir.path().to_path_buf(),
        ..Config::default()
    };

    assert!(matches!(run(&config), Err(MatrixError::Config(_))));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
