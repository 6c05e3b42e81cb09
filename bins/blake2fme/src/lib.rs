//! Command line tools for the blake2 F precompile.
pub mod cmd;
