//! Blake2 precompile. More details in [`run`]
use crate::{
    constants::{OUTPUT_LENGTH, STATE_LENGTH},
    input::decode_input,
    Crypto, DefaultCrypto, Error, PrecompileOutput, PrecompileResult,
};

/// Decodes `input` and compresses it, skipping gas accounting.
///
/// For callers that only ever see raw precompile input and bound the round
/// count themselves.
pub fn decode_and_compress(input: &[u8]) -> Result<[u8; OUTPUT_LENGTH], Error> {
    decode_input(input).map(|args| args.compress_to_bytes())
}

/// reference: <https://eips.ethereum.org/EIPS/eip-152>
/// input format:
/// [4 bytes for rounds][64 bytes for h][128 bytes for m][8 bytes for t_0][8 bytes for t_1][1 byte for f]
///
/// Charges one gas per round and fails with [`Error::OutOfGas`] before mixing
/// anything if `gas_limit` does not cover it.
pub fn run(input: &[u8], gas_limit: u64) -> PrecompileResult {
    run_with_crypto(input, gas_limit, &DefaultCrypto)
}

/// Same as [`run`] but compresses through the given backend.
pub fn run_with_crypto(input: &[u8], gas_limit: u64, crypto: &dyn Crypto) -> PrecompileResult {
    let args = decode_input(input).inspect_err(|_err| {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "blake2f", len = input.len(), err = %_err, "rejected input");
    })?;

    let gas_used = args.gas_cost();
    if gas_used > gas_limit {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "blake2f", rounds = args.rounds, gas_limit, "out of gas");
        return Err(Error::OutOfGas);
    }

    let mut h: [u64; STATE_LENGTH] = args.h;
    crypto.blake2_compress(args.rounds, &mut h, &args.m, args.t, args.f)?;

    let mut out = [0u8; OUTPUT_LENGTH];
    crate::codec::encode_words_into(&h, &mut out);

    #[cfg(feature = "tracing")]
    tracing::trace!(target: "blake2f", rounds = args.rounds, final_block = args.f, gas_used, "compressed");

    Ok(PrecompileOutput::new(gas_used, out))
}
