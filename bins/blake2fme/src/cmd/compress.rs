//! `compress` subcommand.
use super::{parse_hex, Error};
use blake2f::PrecompileOutput;
use clap::Parser;
use tracing::info;

/// `compress` subcommand
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex encoded precompile input, `0x` prefix optional
    input: String,
    /// Gas available to the call. One gas is charged per round
    #[arg(long, default_value_t = u64::MAX)]
    gas_limit: u64,
}

impl Cmd {
    /// Runs `compress` command and prints the output as hex.
    pub fn run(&self) -> Result<(), Error> {
        let out = self.execute()?;
        info!(gas_used = out.gas_used, "compressed");
        println!("0x{}", hex::encode(out.bytes));
        Ok(())
    }

    /// Decodes the argument and runs the precompile on it.
    pub fn execute(&self) -> Result<PrecompileOutput, Error> {
        let input = parse_hex(&self.input)?;
        Ok(blake2f::run(&input, self.gas_limit)?)
    }
}
