//! Blake2 algorithm
use crate::{
    codec::{decode_block, encode_words_into},
    constants::{
        IV, MESSAGE_LENGTH, MESSAGE_WORDS, OUTPUT_LENGTH, R1, R2, R3, R4, SIGMA, STATE_LENGTH,
    },
};

/// Message schedule row used by round `round`.
///
/// The schedule has ten rows and wraps, so round 10 reuses row 0.
#[inline(always)]
pub fn sigma(round: usize) -> &'static [usize; 16] {
    &SIGMA[round % SIGMA.len()]
}

#[inline(always)]
#[allow(clippy::many_single_char_names)]
/// G function: <https://tools.ietf.org/html/rfc7693#section-3.1>
pub fn g(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotate_right(R1);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(R2);

    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotate_right(R3);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(R4);
}

/// One full round: a column pass followed by a diagonal pass.
#[inline(always)]
pub fn round(v: &mut [u64; 16], m: &[u64; MESSAGE_WORDS], r: usize) {
    // Message word selection permutation for this round.
    let s = sigma(r);
    // columns
    g(v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
    g(v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
    g(v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
    g(v, 3, 7, 11, 15, m[s[6]], m[s[7]]);

    // diagonals
    g(v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
    g(v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
    g(v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
    g(v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
}

/// Compression function F takes as an argument the state vector "h",
/// message block vector "m" (last block is padded with zeros to full
/// block size, if required), 2w-bit offset counter "t", and final block
/// indicator flag "f".  Local vector v[0..15] is used in processing.  F
/// returns a new state vector.  The number of rounds, "r", is 12 for
/// BLAKE2b; EIP-152 lets the caller pick any value, including zero.
///
/// `h` is updated in place.
#[allow(clippy::many_single_char_names)]
pub fn compress(
    rounds: usize,
    h: &mut [u64; STATE_LENGTH],
    m: &[u8; MESSAGE_LENGTH],
    t: [u64; 2],
    f: bool,
) {
    let m = decode_block(m);

    let mut v = [0u64; 16];
    v[..STATE_LENGTH].copy_from_slice(h); // First half from state.
    v[STATE_LENGTH..].copy_from_slice(&IV); // Second half from IV.

    v[12] ^= t[0];
    v[13] ^= t[1];

    // Only lane 14 carries the final block flag. The tree hashing "last node"
    // flag on lane 15 is not part of F as used by EIP-152.
    if f {
        v[14] = !v[14];
    }

    for i in 0..rounds {
        round(&mut v, &m, i);
    }

    for (i, word) in h.iter_mut().enumerate() {
        *word ^= v[i] ^ v[i + STATE_LENGTH];
    }
}

/// Same as [`compress`] but leaves the input state untouched and returns the
/// new one.
#[inline]
pub fn compress_words(
    rounds: usize,
    h: &[u64; STATE_LENGTH],
    m: &[u8; MESSAGE_LENGTH],
    t: [u64; 2],
    f: bool,
) -> [u64; STATE_LENGTH] {
    let mut out = *h;
    compress(rounds, &mut out, m, t, f);
    out
}

/// Runs [`compress`] and returns the little-endian encoding of the new state.
#[inline]
pub fn compress_to_bytes(
    rounds: usize,
    h: &[u64; STATE_LENGTH],
    m: &[u8; MESSAGE_LENGTH],
    t: [u64; 2],
    f: bool,
) -> [u8; OUTPUT_LENGTH] {
    let mut out = [0u8; OUTPUT_LENGTH];
    encode_words_into(&compress_words(rounds, h, m, t, f), &mut out);
    out
}
