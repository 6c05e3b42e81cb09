//! Decoding of the tightly packed EIP-152 precompile input.
//!
//! reference: <https://eips.ethereum.org/EIPS/eip-152#specification>
use crate::{
    algo,
    codec::{decode_words_into, encode_words_into},
    constants::{
        COUNTER_LENGTH, COUNTER_OFFSET, FLAG_OFFSET, F_ROUND, INPUT_LENGTH, MESSAGE_LENGTH,
        MESSAGE_OFFSET, OUTPUT_LENGTH, ROUNDS_OFFSET, STATE_LENGTH, STATE_OFFSET,
    },
    Error,
};

/// The five arguments of the compression function `F`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompressArgs {
    /// Number of rounds.
    pub rounds: u32,
    /// Chaining state.
    pub h: [u64; STATE_LENGTH],
    /// Message block, read as 16 little-endian words during mixing.
    #[cfg_attr(feature = "serde", serde(with = "serde_block"))]
    pub m: [u8; MESSAGE_LENGTH],
    /// Offset counters, low word first.
    pub t: [u64; COUNTER_LENGTH],
    /// Final block indicator flag.
    pub f: bool,
}

impl CompressArgs {
    /// Runs the compression function over these arguments.
    pub fn compress(&self) -> [u64; STATE_LENGTH] {
        algo::compress_words(self.rounds as usize, &self.h, &self.m, self.t, self.f)
    }

    /// Runs the compression function and encodes the new state.
    pub fn compress_to_bytes(&self) -> [u8; OUTPUT_LENGTH] {
        algo::compress_to_bytes(self.rounds as usize, &self.h, &self.m, self.t, self.f)
    }

    /// Gas the precompile charges for these arguments.
    pub fn gas_cost(&self) -> u64 {
        self.rounds as u64 * F_ROUND
    }

    /// Packs the arguments back into the 213-byte precompile layout.
    pub fn encode(&self) -> [u8; INPUT_LENGTH] {
        let mut out = [0u8; INPUT_LENGTH];
        out[ROUNDS_OFFSET..STATE_OFFSET].copy_from_slice(&self.rounds.to_be_bytes());
        encode_words_into(&self.h, &mut out[STATE_OFFSET..MESSAGE_OFFSET]);
        out[MESSAGE_OFFSET..COUNTER_OFFSET].copy_from_slice(&self.m);
        encode_words_into(&self.t, &mut out[COUNTER_OFFSET..FLAG_OFFSET]);
        out[FLAG_OFFSET] = self.f as u8;
        out
    }
}

/// Decode blake2 precompile input parameters from the tightly packed encoding
/// in the byte sequence `input`.
///
/// input format:
/// [4 bytes for rounds][64 bytes for h][128 bytes for m][8 bytes for t_0][8 bytes for t_1][1 byte for f]
///
/// The round count is not bounded here; the caller pays for it.
pub fn decode_input(input: &[u8]) -> Result<CompressArgs, Error> {
    if input.len() != INPUT_LENGTH {
        return Err(Error::InvalidInputLength(input.len()));
    }

    let f = match input[FLAG_OFFSET] {
        1 => true,
        0 => false,
        flag => return Err(Error::InvalidFinalFlag(flag)),
    };

    // Rounds 4 bytes
    let mut rounds = [0u8; 4];
    rounds.copy_from_slice(&input[ROUNDS_OFFSET..STATE_OFFSET]);
    let rounds = u32::from_be_bytes(rounds);

    let h = decode_words_into::<STATE_LENGTH>(&input[STATE_OFFSET..MESSAGE_OFFSET])?;
    let mut m = [0u8; MESSAGE_LENGTH];
    m.copy_from_slice(&input[MESSAGE_OFFSET..COUNTER_OFFSET]);
    let t = decode_words_into::<COUNTER_LENGTH>(&input[COUNTER_OFFSET..FLAG_OFFSET])?;

    Ok(CompressArgs { rounds, h, m, t, f })
}

/// Serde does not implement its traits for arrays longer than 32 elements.
#[cfg(feature = "serde")]
mod serde_block {
    use crate::constants::MESSAGE_LENGTH;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};
    use std::vec::Vec;

    pub(super) fn serialize<S: Serializer>(
        m: &[u8; MESSAGE_LENGTH],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(m)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<[u8; MESSAGE_LENGTH], D::Error> {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        let len = bytes.len();
        bytes.try_into().map_err(|_| {
            D::Error::invalid_length(len, &"a message block of exactly 128 bytes")
        })
    }
}
