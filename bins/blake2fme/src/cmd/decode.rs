//! `decode` subcommand.
use super::{parse_hex, Error};
use blake2f::{decode_input, CompressArgs};
use clap::Parser;

/// `decode` subcommand
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex encoded precompile input, `0x` prefix optional
    input: String,
    /// Print the fields as JSON
    #[arg(long)]
    json: bool,
}

impl Cmd {
    /// Runs `decode` command.
    pub fn run(&self) -> Result<(), Error> {
        let args = decode_input(&parse_hex(&self.input)?)?;
        println!("{}", self.render(&args)?);
        Ok(())
    }

    /// Formats decoded arguments the way [`Cmd::run`] prints them.
    pub fn render(&self, args: &CompressArgs) -> Result<String, Error> {
        if self.json {
            return Ok(serde_json::to_string_pretty(args)?);
        }

        let h = args
            .h
            .iter()
            .map(|w| format!("{w:#018x}"))
            .collect::<Vec<_>>()
            .join(" ");
        Ok(format!(
            "rounds: {}\nh:      {h}\nm:      0x{}\nt:      [{:#x}, {:#x}]\nf:      {}",
            args.rounds,
            hex::encode(args.m),
            args.t[0],
            args.t[1],
            args.f,
        ))
    }
}
