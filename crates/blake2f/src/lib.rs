//! # blake2f
//!
//! The BLAKE2b compression function `F` ([RFC 7693 §3.2]) together with the
//! fixed 213-byte input format of the [EIP-152] precompile.
//!
//! The crate is split the same way the precompile is evaluated:
//!
//! - [`codec`] converts between little-endian bytes and 64-bit words,
//! - [`input`] decodes the precompile input into [`CompressArgs`],
//! - [`algo`] is the compression permutation itself,
//! - [`blake2`] glues the two together behind the precompile calling convention
//!   with gas accounting and a pluggable [`Crypto`] backend.
//!
//! [RFC 7693 §3.2]: https://datatracker.ietf.org/doc/html/rfc7693#section-3.2
//! [EIP-152]: https://eips.ethereum.org/EIPS/eip-152
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod algo;
pub mod blake2;
pub mod codec;
pub mod constants;
pub mod input;
pub mod interface;

pub use algo::{compress, compress_to_bytes, compress_words};
pub use blake2::{decode_and_compress, run, run_with_crypto};
pub use codec::{decode_words, encode_words};
pub use input::{decode_input, CompressArgs};
pub use interface::*;
