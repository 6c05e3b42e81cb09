//! Little-endian conversion between bytes and 64-bit words.
//!
//! BLAKE2b reads and writes every word least-significant byte first.
//! See: <https://datatracker.ietf.org/doc/html/rfc7693#section-2.4>
use crate::{
    constants::{MESSAGE_LENGTH, MESSAGE_WORDS, WORD_BYTES},
    Error,
};
use std::vec::Vec;

/// Decodes `bytes` into little-endian words.
///
/// Fails with [`Error::InvalidLength`] if the length is not a multiple of 8.
pub fn decode_words(bytes: &[u8]) -> Result<Vec<u64>, Error> {
    if bytes.len() % WORD_BYTES != 0 {
        return Err(Error::InvalidLength(bytes.len()));
    }
    Ok(bytes.chunks_exact(WORD_BYTES).map(read_word).collect())
}

/// Encodes `words` as little-endian bytes, 8 bytes per word.
pub fn encode_words(words: &[u64]) -> Vec<u8> {
    let mut out = vec![0u8; words.len() * WORD_BYTES];
    encode_words_into(words, &mut out);
    out
}

/// Decodes exactly `N` words from `bytes` without allocating.
///
/// Fails with [`Error::InvalidLength`] unless `bytes.len() == 8 * N`.
#[inline]
pub fn decode_words_into<const N: usize>(bytes: &[u8]) -> Result<[u64; N], Error> {
    if bytes.len() != N * WORD_BYTES {
        return Err(Error::InvalidLength(bytes.len()));
    }
    let mut words = [0u64; N];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(WORD_BYTES)) {
        *word = read_word(chunk);
    }
    Ok(words)
}

/// Writes `words` into the first `8 * words.len()` bytes of `out`.
///
/// # Panics
///
/// Panics if `out` is shorter than `8 * words.len()`.
#[inline]
pub fn encode_words_into(words: &[u64], out: &mut [u8]) {
    for (chunk, word) in out[..words.len() * WORD_BYTES]
        .chunks_exact_mut(WORD_BYTES)
        .zip(words)
    {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
}

/// Decodes a message block into its 16 words.
#[inline]
pub fn decode_block(block: &[u8; MESSAGE_LENGTH]) -> [u64; MESSAGE_WORDS] {
    let mut m = [0u64; MESSAGE_WORDS];
    for (word, chunk) in m.iter_mut().zip(block.chunks_exact(WORD_BYTES)) {
        *word = read_word(chunk);
    }
    m
}

#[inline(always)]
fn read_word(chunk: &[u8]) -> u64 {
    let mut buf = [0u8; WORD_BYTES];
    buf.copy_from_slice(chunk);
    u64::from_le_bytes(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn least_significant_byte_first() {
        let bytes = [0x08, 0xc9, 0xbc, 0xf3, 0x67, 0xe6, 0x09, 0x6a, 1, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(
            decode_words(&bytes).unwrap(),
            vec![0x6a09e667f3bcc908, 0x01]
        );
        assert_eq!(encode_words(&[0x6a09e667f3bcc908, 0x01]), bytes.to_vec());
    }

    #[test]
    fn empty_input() {
        assert_eq!(decode_words(&[]).unwrap(), Vec::<u64>::new());
        assert!(encode_words(&[]).is_empty());
    }

    #[test]
    fn rejects_partial_words() {
        for len in [1, 7, 9, 15, 63, 65, 127] {
            assert_eq!(decode_words(&vec![0; len]), Err(Error::InvalidLength(len)));
        }
    }

    #[test]
    fn fixed_width_requires_exact_length() {
        assert_eq!(
            decode_words_into::<2>(&[0xff; 16]).unwrap(),
            [u64::MAX, u64::MAX]
        );
        assert_eq!(decode_words_into::<2>(&[0; 8]), Err(Error::InvalidLength(8)));
        assert_eq!(decode_words_into::<2>(&[0; 24]), Err(Error::InvalidLength(24)));
    }

    #[test]
    #[should_panic]
    fn encode_into_short_buffer_panics() {
        let mut out = [0u8; 15];
        encode_words_into(&[1, 2], &mut out);
    }

    #[test]
    fn block_decodes_like_any_other_buffer() {
        let block: [u8; MESSAGE_LENGTH] = core::array::from_fn(|i| i as u8);
        assert_eq!(decode_block(&block).to_vec(), decode_words(&block).unwrap());
        assert_eq!(decode_block(&block)[1], 0x0f0e0d0c0b0a0908);
    }

    proptest! {
        #[test]
        fn bytes_round_trip(
            bytes in prop::collection::vec(any::<u8>(), 0..256)
                .prop_map(|mut b| { b.truncate(b.len() / 8 * 8); b })
        ) {
            prop_assert_eq!(encode_words(&decode_words(&bytes).unwrap()), bytes);
        }

        #[test]
        fn fixed_width_agrees_with_vec(bytes in prop::array::uniform32(any::<u8>())) {
            let fixed = decode_words_into::<4>(&bytes).unwrap();
            prop_assert_eq!(fixed.to_vec(), decode_words(&bytes).unwrap());
        }
    }
}
