//! The 10-round block encryption and decryption pipelines.

use crate::key::{expand_key, Aes128Key, RoundKeys, ROUNDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::Block;

/// Encrypts one 16-byte block under the given key, expanding the key
/// schedule internally. Returns a fresh ciphertext block; the input is left
/// untouched.
pub fn encrypt_block(block: &Block, key: &Aes128Key) -> Block {
    encrypt_with_schedule(block, &expand_key(key))
}

/// Decrypts one 16-byte block under the given key, expanding the key
/// schedule internally. Returns a fresh plaintext block; the input is left
/// untouched.
pub fn decrypt_block(block: &Block, key: &Aes128Key) -> Block {
    decrypt_with_schedule(block, &expand_key(key))
}

/// Encrypts one block with a pre-expanded schedule, for callers pushing many
/// blocks through the same key.
pub fn encrypt_with_schedule(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    // Final round omits MixColumns.
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(ROUNDS));

    state
}

/// Decrypts one block with a pre-expanded schedule: the exact mirror of
/// [`encrypt_with_schedule`], with inverse transforms in reverse order.
pub fn decrypt_with_schedule(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(ROUNDS));

    for round in (1..ROUNDS).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }

    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.get(0));

    state
}
