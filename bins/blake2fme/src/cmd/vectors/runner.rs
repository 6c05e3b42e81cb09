use crate::cmd::parse_hex;
use indicatif::{ProgressBar, ProgressDrawTarget};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// One precompile call and its expected outcome.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Vector {
    /// Name used in reports
    pub name: String,
    /// Hex encoded precompile input
    pub input: String,
    /// Hex encoded 64-byte output, if the call succeeds
    #[serde(default)]
    pub expected: Option<String>,
    /// Display form of the error, if the call fails
    #[serde(default)]
    pub error: Option<String>,
    /// Gas limit of the call, unlimited if absent
    #[serde(default)]
    pub gas: Option<u64>,
    /// Skipped unless slow vectors are requested
    #[serde(default)]
    pub slow: bool,
}

/// Error that occurs during vector execution
#[derive(Debug, Error)]
#[error("Path: {path}\nName: {name}\nError: {kind}")]
pub struct VectorError {
    /// Vector name
    pub name: String,
    /// File the vector was read from
    pub path: String,
    /// What went wrong
    pub kind: VectorErrorKind,
}

/// Specific kind of error that occurred during vector execution
#[derive(Debug, Error)]
pub enum VectorErrorKind {
    /// Precompile output differs from the expected bytes.
    #[error("unexpected output: got {got}, expected {expected}")]
    UnexpectedOutput {
        /// Hex of the produced output
        got: String,
        /// Hex of the expected output
        expected: String,
    },
    /// Call failed, or failed differently than expected.
    #[error("unexpected error: got {got:?}, expected {expected:?}")]
    UnexpectedError {
        /// Error produced, if any
        got: Option<String>,
        /// Error expected, if any
        expected: Option<String>,
    },
    /// Vector names neither an output nor an error.
    #[error("vector has neither `expected` nor `error`")]
    MissingExpectation,
    /// Hex field could not be decoded.
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
    /// File could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// File is not a JSON array of vectors.
    #[error(transparent)]
    SerdeDeserialize(#[from] serde_json::Error),
    /// Some vectors failed while running with `--keep-going`.
    #[error("{failed} of {total} vectors failed")]
    Failed {
        /// Failing vectors
        failed: usize,
        /// Vectors run
        total: usize,
    },
    /// Path does not exist.
    #[error("path does not exist")]
    InvalidPath,
    /// Path holds no `.json` files.
    #[error("no JSON test files found in path")]
    NoJsonFiles,
}

/// Find all JSON test files in the given path
/// If path is a file, returns it in a vector
/// If path is a directory, recursively finds all .json files
pub fn find_all_json_tests(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        let mut files: Vec<_> = WalkDir::new(path)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.path().extension() == Some("json".as_ref()))
            .map(DirEntry::into_path)
            .collect();
        files.sort();
        files
    }
}

/// Runs one vector through the precompile and checks its outcome.
pub fn execute_vector(vector: &Vector) -> Result<(), VectorErrorKind> {
    let input = parse_hex(&vector.input)?;
    let result = blake2f::run(&input, vector.gas.unwrap_or(u64::MAX));

    match (&vector.expected, &vector.error, result) {
        (Some(expected), None, Ok(out)) => {
            let expected = parse_hex(expected)?;
            if out.bytes[..] != expected[..] {
                return Err(VectorErrorKind::UnexpectedOutput {
                    got: hex::encode(out.bytes),
                    expected: hex::encode(expected),
                });
            }
            Ok(())
        }
        (None, Some(expected), Err(err)) if err.to_string() == *expected => Ok(()),
        (None, None, _) => Err(VectorErrorKind::MissingExpectation),
        (_, expected, result) => Err(VectorErrorKind::UnexpectedError {
            got: result.err().map(|e| e.to_string()),
            expected: expected.clone(),
        }),
    }
}

/// Reads every vector in `path` and runs it.
///
/// Returns the number of vectors run. Stops at the first failure unless
/// `keep_going` is set, in which case failures are logged and counted.
pub fn execute_vector_file(
    path: &Path,
    include_slow: bool,
    keep_going: bool,
) -> Result<usize, VectorError> {
    let file_error = |kind| VectorError {
        name: "File parsing".to_string(),
        path: path.display().to_string(),
        kind,
    };
    let s = std::fs::read_to_string(path).map_err(|e| file_error(e.into()))?;
    let vectors: Vec<Vector> = serde_json::from_str(&s).map_err(|e| file_error(e.into()))?;

    let mut total = 0;
    let mut failed = 0;
    for vector in &vectors {
        if vector.slow && !include_slow {
            debug!(name = %vector.name, "skipping slow vector");
            continue;
        }
        total += 1;
        if let Err(kind) = execute_vector(vector) {
            let err = VectorError {
                name: vector.name.clone(),
                path: path.display().to_string(),
                kind,
            };
            if !keep_going {
                return Err(err);
            }
            warn!("{err}");
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(file_error(VectorErrorKind::Failed { failed, total }));
    }
    Ok(total)
}

/// Run all vector files in sequence
///
/// # Arguments
/// * `test_files` - List of files to execute
/// * `keep_going` - Continue running files even if some fail
/// * `include_slow` - Run vectors marked as slow
pub fn run(
    test_files: Vec<PathBuf>,
    keep_going: bool,
    include_slow: bool,
) -> Result<(), VectorError> {
    let console_bar = ProgressBar::with_draw_target(
        Some(test_files.len() as u64),
        ProgressDrawTarget::stdout(),
    );

    let mut n_vectors = 0;
    let mut errors = Vec::new();
    for path in &test_files {
        let result = execute_vector_file(path, include_slow, keep_going);
        console_bar.inc(1);
        match result {
            Ok(n) => n_vectors += n,
            Err(err) if keep_going => errors.push(err),
            Err(err) => {
                console_bar.abandon();
                return Err(err);
            }
        }
    }
    console_bar.finish();

    if errors.is_empty() {
        println!("All {n_vectors} vectors passed!");
        return Ok(());
    }

    println!(
        "Encountered errors in {} out of {} files",
        errors.len(),
        test_files.len()
    );
    for error in &errors {
        println!("{error}");
    }
    Err(errors.swap_remove(0))
}
