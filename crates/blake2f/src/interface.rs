//! Interface for the compression function. It contains the error type, the
//! precompile result and output types, and the [`Crypto`] backend trait.
use crate::constants::{MESSAGE_LENGTH, OUTPUT_LENGTH, STATE_LENGTH};
use core::fmt::{self, Debug};
use std::string::String;

/// A precompile operation result type
///
/// Returns either `Ok(PrecompileOutput)` or `Err(error)`.
pub type PrecompileResult = Result<PrecompileOutput, Error>;

/// Precompile execution output
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrecompileOutput {
    /// Gas used by the precompile
    pub gas_used: u64,
    /// Little-endian encoding of the new chaining state
    pub bytes: [u8; OUTPUT_LENGTH],
}

impl PrecompileOutput {
    /// Returns new precompile output with the given gas used and output bytes.
    pub fn new(gas_used: u64, bytes: [u8; OUTPUT_LENGTH]) -> Self {
        Self { gas_used, bytes }
    }
}

/// Compression backend used by the precompile.
///
/// [`DefaultCrypto`] runs the portable implementation in [`crate::algo`].
/// Environments with their own F implementation (zkVM syscalls, hardware
/// accelerated builds) plug in through [`crate::run_with_crypto`].
pub trait Crypto: Send + Sync + Debug {
    /// Blake2 compression function.
    ///
    /// Updates `h` in place; `m` is the raw 128-byte message block.
    fn blake2_compress(
        &self,
        rounds: u32,
        h: &mut [u64; STATE_LENGTH],
        m: &[u8; MESSAGE_LENGTH],
        t: [u64; 2],
        f: bool,
    ) -> Result<(), Error>;
}

/// Default implementation of the [`Crypto`] trait.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultCrypto;

impl Crypto for DefaultCrypto {
    fn blake2_compress(
        &self,
        rounds: u32,
        h: &mut [u64; STATE_LENGTH],
        m: &[u8; MESSAGE_LENGTH],
        t: [u64; 2],
        f: bool,
    ) -> Result<(), Error> {
        crate::algo::compress(rounds as usize, h, m, t, f);
        Ok(())
    }
}

/// Error type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// Precompile input is not exactly 213 bytes long. Holds the actual length.
    InvalidInputLength(usize),
    /// Final block indicator flag is neither `0` nor `1`. Holds the flag byte.
    InvalidFinalFlag(u8),
    /// Byte length handed to the word codec is not a whole number of words,
    /// or not the fixed width requested. Holds the offending length.
    InvalidLength(usize),
    /// Gas limit is smaller than the number of rounds requested.
    OutOfGas,
    /// Catch-all variant for backend errors
    Other(String),
}

impl Error {
    /// Returns another error with the given message.
    pub fn other(err: impl Into<String>) -> Self {
        Self::Other(err.into())
    }

    /// Returns `true` if the error is out of gas.
    pub fn is_oog(&self) -> bool {
        matches!(self, Self::OutOfGas)
    }

    /// Returns `true` if the caller supplied a malformed precompile input.
    ///
    /// [`Error::InvalidLength`] is deliberately excluded: the decoder only hands
    /// fixed-width fields to the codec, so seeing it there means a bug.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::InvalidInputLength(_) | Self::InvalidFinalFlag(_))
    }
}

impl core::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInputLength(len) => write!(
                f,
                "input length for blake2 F precompile should be exactly 213 bytes, got: {len}"
            ),
            Self::InvalidFinalFlag(flag) => write!(
                f,
                "incorrect final block indicator flag, needed 0 or 1, got: {flag}"
            ),
            Self::InvalidLength(len) => write!(
                f,
                "must send bytes in multiples of 8 to get 64-bit words, got: {len}"
            ),
            Self::OutOfGas => f.write_str("out of gas"),
            Self::Other(s) => f.write_str(s),
        }
    }
}
