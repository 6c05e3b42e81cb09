//! BLAKE2b constants and the EIP-152 input layout.

/// Number of 64-bit words in the chaining state `h`.
pub const STATE_LENGTH: usize = 8;

/// Message block length in bytes.
pub const MESSAGE_LENGTH: usize = 128;

/// Number of 64-bit words in a message block.
pub const MESSAGE_WORDS: usize = MESSAGE_LENGTH / WORD_BYTES;

/// Number of 64-bit words in the offset counter `t`.
pub const COUNTER_LENGTH: usize = 2;

/// Bytes per word.
pub const WORD_BYTES: usize = size_of::<u64>();

/// Compression output length in bytes.
pub const OUTPUT_LENGTH: usize = STATE_LENGTH * WORD_BYTES;

/// Exact length of the precompile input.
///
/// `[4 bytes for rounds][64 bytes for h][128 bytes for m][8 bytes for t_0][8 bytes for t_1][1 byte for f]`
pub const INPUT_LENGTH: usize = 213;

/// Byte offset of the big-endian round count.
pub const ROUNDS_OFFSET: usize = 0;
/// Byte offset of the chaining state.
pub const STATE_OFFSET: usize = 4;
/// Byte offset of the message block.
pub const MESSAGE_OFFSET: usize = STATE_OFFSET + OUTPUT_LENGTH;
/// Byte offset of the offset counters.
pub const COUNTER_OFFSET: usize = MESSAGE_OFFSET + MESSAGE_LENGTH;
/// Byte offset of the final block indicator flag.
pub const FLAG_OFFSET: usize = COUNTER_OFFSET + COUNTER_LENGTH * WORD_BYTES;

/// Gas charged per round by the precompile.
pub const F_ROUND: u64 = 1;

/// SIGMA from RFC 7693: <https://datatracker.ietf.org/doc/html/rfc7693#section-2.7>
///
/// BLAKE2b runs 12 rounds, so rows 0 and 1 are reused by rounds 10 and 11.
/// The EIP-152 round count is unbounded and keeps cycling with period 10.
pub const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// BLAKE2b initialization vector, the first 64 bits of the fractional parts
/// of the square roots of the first eight primes.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc7693#section-2.6>
pub const IV: [u64; 8] = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];

// G function rotation constants.
// See: <https://datatracker.ietf.org/doc/html/rfc7693#section-2.1>
/// First G rotation.
pub const R1: u32 = 32;
/// Second G rotation.
pub const R2: u32 = 24;
/// Third G rotation.
pub const R3: u32 = 16;
/// Fourth G rotation.
pub const R4: u32 = 63;
