//! `vectors` subcommand: runs JSON files of precompile test vectors.
mod runner;

pub use runner::{
    execute_vector, execute_vector_file, find_all_json_tests, run, Vector, VectorError as Error,
    VectorErrorKind,
};

use clap::Parser;
use std::path::PathBuf;

/// `vectors` subcommand
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Path to folder or file containing the vectors
    ///
    /// If multiple paths are specified they will be run in sequence.
    ///
    /// Folders will be searched recursively for files with the extension `.json`.
    #[arg(required = true, num_args = 1..)]
    paths: Vec<PathBuf>,
    /// Keep going after a vector failure
    #[arg(long, alias = "no-fail-fast")]
    keep_going: bool,
    /// Also run vectors marked as slow
    #[arg(long)]
    include_slow: bool,
}

impl Cmd {
    /// Runs `vectors` command.
    pub fn run(&self) -> Result<(), Error> {
        for path in &self.paths {
            if !path.exists() {
                return Err(Error {
                    name: "Path validation".to_string(),
                    path: path.display().to_string(),
                    kind: VectorErrorKind::InvalidPath,
                });
            }

            let test_files = find_all_json_tests(path);

            if test_files.is_empty() {
                return Err(Error {
                    name: "Path validation".to_string(),
                    path: path.display().to_string(),
                    kind: VectorErrorKind::NoJsonFiles,
                });
            }

            println!("\nRunning vectors in {}...", path.display());
            run(test_files, self.keep_going, self.include_slow)?;
        }
        Ok(())
    }
}
