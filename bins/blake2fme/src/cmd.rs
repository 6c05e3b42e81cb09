//! Subcommands of the `blake2fme` binary.
pub mod compress;
pub mod decode;
pub mod vectors;

use clap::Parser;

/// Subcommands of `blake2fme`.
#[derive(Parser, Debug)]
#[command(infer_subcommands = true, version, about)]
pub enum MainCmd {
    /// Run the precompile over a hex encoded 213-byte input
    Compress(compress::Cmd),
    /// Print the fields of a hex encoded 213-byte input
    Decode(decode::Cmd),
    /// Run JSON test vector files through the precompile
    Vectors(vectors::Cmd),
}

/// Errors returned by [`MainCmd::run`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Argument is not valid hex.
    #[error("invalid hex argument: {0}")]
    Hex(#[from] hex::FromHexError),
    /// Precompile rejected the input.
    #[error(transparent)]
    Precompile(#[from] blake2f::Error),
    /// Decoded input could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// A test vector failed.
    #[error(transparent)]
    Vectors(#[from] vectors::Error),
}

impl MainCmd {
    /// Runs the selected subcommand.
    pub fn run(&self) -> Result<(), Error> {
        match self {
            Self::Compress(cmd) => cmd.run(),
            Self::Decode(cmd) => cmd.run(),
            Self::Vectors(cmd) => cmd.run().map_err(Into::into),
        }
    }
}

/// Decodes a hex string, with or without a `0x` prefix.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let s = s.trim();
    hex::decode(s.strip_prefix("0x").unwrap_or(s))
}
