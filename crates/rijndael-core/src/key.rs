//! Key types and the AES-128 key schedule.

use crate::sbox::sub_word;
use crate::word::{rotate_left, xor_in_place, Word};
use crate::Block;

/// Number of cipher rounds for a 128-bit key.
pub(crate) const ROUNDS: usize = 10;

/// Round constants: successive doublings of 1 in GF(2^8), one per
/// key-schedule round group.
const RCON: [u8; ROUNDS] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// AES-128 cipher key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

/// The expanded key schedule: 11 round keys of 16 bytes each, owned by the
/// caller. Dropping the value is the only release path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; 11]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Flattens the schedule into its 176-byte wire form, round key 0 first.
    pub fn to_bytes(&self) -> [u8; 176] {
        let mut out = [0u8; 176];
        for (chunk, round_key) in out.chunks_exact_mut(16).zip(self.0.iter()) {
            chunk.copy_from_slice(round_key);
        }
        out
    }
}

/// Expands a 128-bit cipher key into the 11 round keys.
///
/// The schedule is 44 words; the first 4 are the cipher key verbatim. Each
/// later word is the word 4 positions back XORed with the previous word,
/// where every fourth word is first rotated, substituted through the S-box,
/// and XORed with that group's round constant.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w = [[0u8; 4]; 44];
    for (i, chunk) in key.0.chunks_exact(4).enumerate() {
        w[i].copy_from_slice(chunk);
    }

    for i in 4..44 {
        let mut t: Word = w[i - 1];
        if i % 4 == 0 {
            rotate_left(&mut t);
            sub_word(&mut t);
            t[0] ^= RCON[i / 4 - 1];
        }
        let prev = w[i - 4];
        xor_in_place(&mut t, &prev);
        w[i] = t;
    }

    let mut round_keys = [[0u8; 16]; 11];
    for (round, round_key) in round_keys.iter_mut().enumerate() {
        for word_idx in 0..4 {
            round_key[word_idx * 4..word_idx * 4 + 4].copy_from_slice(&w[round * 4 + word_idx]);
        }
    }

    RoundKeys(round_keys)
}
