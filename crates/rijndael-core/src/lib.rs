//! Single-block AES-128 (Rijndael) implementation following FIPS-197.
//!
//! This crate covers exactly the block-transform level of the cipher:
//! - Key schedule expanding a 128-bit key into 11 round keys.
//! - Encryption and decryption of one 16-byte block.
//! - The individual round transformations, exposed so each step can be
//!   verified in isolation.
//!
//! No mode of operation, padding scheme, or IV handling lives here; callers
//! supply one 16-byte key and one 16-byte block per call. The implementation
//! aims for clarity and testability rather than constant-time guarantees; it
//! should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
pub mod gf;
mod key;
pub mod round;
pub mod sbox;
pub mod word;

pub use crate::cipher::{
    decrypt_block, decrypt_with_schedule, encrypt_block, encrypt_with_schedule,
};
pub use crate::key::{expand_key, Aes128Key, RoundKeys};
pub use crate::word::Word;

/// AES block of 16 bytes, viewed as a 4x4 byte matrix in column-major order:
/// the byte at linear position `i` sits in row `i % 4`, column `i / 4`.
pub type Block = [u8; 16];
