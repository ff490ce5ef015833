//! The four round transformations and their inverses.
//!
//! Every function here mutates a 16-byte state (or a single 4-byte column)
//! in place. The state is column-major: byte `i` sits in row `i % 4`,
//! column `i / 4`, so row `r` occupies positions `r`, `r + 4`, `r + 8`,
//! `r + 12`.

use crate::gf;
use crate::sbox::{inv_sub_byte, sub_byte};
use crate::word::Word;
use crate::Block;

/// Replaces every state byte with its forward S-box image.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sub_byte(*byte);
    }
}

/// Replaces every state byte with its inverse S-box image.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sub_byte(*byte);
    }
}

/// Rotates row `r` of the state left by `r` positions, for r = 0..3.
pub fn shift_rows(state: &mut Block) {
    for row in 1..4 {
        let mut bytes = [
            state[row],
            state[row + 4],
            state[row + 8],
            state[row + 12],
        ];
        bytes.rotate_left(row);
        state[row] = bytes[0];
        state[row + 4] = bytes[1];
        state[row + 8] = bytes[2];
        state[row + 12] = bytes[3];
    }
}

/// Rotates row `r` of the state right by `r` positions, undoing
/// [`shift_rows`].
pub fn inv_shift_rows(state: &mut Block) {
    for row in 1..4 {
        let mut bytes = [
            state[row],
            state[row + 4],
            state[row + 8],
            state[row + 12],
        ];
        bytes.rotate_right(row);
        state[row] = bytes[0];
        state[row + 4] = bytes[1];
        state[row + 8] = bytes[2];
        state[row + 12] = bytes[3];
    }
}

/// Multiplies one column by the MDS matrix
/// `[[2,3,1,1],[1,2,3,1],[1,1,2,3],[3,1,1,2]]` over GF(2^8), in place.
pub fn mix_column(col: &mut Word) {
    let [a0, a1, a2, a3] = *col;
    col[0] = gf::mul(a0, 2) ^ gf::mul(a1, 3) ^ a2 ^ a3;
    col[1] = a0 ^ gf::mul(a1, 2) ^ gf::mul(a2, 3) ^ a3;
    col[2] = a0 ^ a1 ^ gf::mul(a2, 2) ^ gf::mul(a3, 3);
    col[3] = gf::mul(a0, 3) ^ a1 ^ a2 ^ gf::mul(a3, 2);
}

/// Multiplies one column by the inverse MDS matrix
/// `[[14,11,13,9],[9,14,11,13],[13,9,14,11],[11,13,9,14]]`, undoing
/// [`mix_column`].
pub fn inv_mix_column(col: &mut Word) {
    let [a0, a1, a2, a3] = *col;
    col[0] = gf::mul(a0, 14) ^ gf::mul(a1, 11) ^ gf::mul(a2, 13) ^ gf::mul(a3, 9);
    col[1] = gf::mul(a0, 9) ^ gf::mul(a1, 14) ^ gf::mul(a2, 11) ^ gf::mul(a3, 13);
    col[2] = gf::mul(a0, 13) ^ gf::mul(a1, 9) ^ gf::mul(a2, 14) ^ gf::mul(a3, 11);
    col[3] = gf::mul(a0, 11) ^ gf::mul(a1, 13) ^ gf::mul(a2, 9) ^ gf::mul(a3, 14);
}

/// Applies [`mix_column`] to all four state columns.
pub fn mix_columns(state: &mut Block) {
    for chunk in state.chunks_exact_mut(4) {
        let mut col: Word = [chunk[0], chunk[1], chunk[2], chunk[3]];
        mix_column(&mut col);
        chunk.copy_from_slice(&col);
    }
}

/// Applies [`inv_mix_column`] to all four state columns.
pub fn inv_mix_columns(state: &mut Block) {
    for chunk in state.chunks_exact_mut(4) {
        let mut col: Word = [chunk[0], chunk[1], chunk[2], chunk[3]];
        inv_mix_column(&mut col);
        chunk.copy_from_slice(&col);
    }
}

/// XORs a round key into the state byte-for-byte.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    for (byte, key_byte) in state.iter_mut().zip(round_key.iter()) {
        *byte ^= *key_byte;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn sub_bytes_round_trips() {
        let mut state: Block = core::array::from_fn(|i| (i * 17) as u8);
        let original = state;
        sub_bytes(&mut state);
        assert_ne!(state, original);
        inv_sub_bytes(&mut state);
        assert_eq!(state, original);
    }

    #[test]
    fn shift_rows_permutes_across_columns() {
        // State with byte i == i, so positions are directly visible.
        let mut state: Block = core::array::from_fn(|i| i as u8);
        shift_rows(&mut state);
        let expected: Block = [
            0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11,
        ];
        assert_eq!(state, expected);
    }

    #[test]
    fn shift_rows_then_inverse_is_identity() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let mut state = [0u8; 16];
            rng.fill_bytes(&mut state);
            let original = state;
            shift_rows(&mut state);
            inv_shift_rows(&mut state);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn mix_column_matches_fips_example() {
        // FIPS-197 §5.1.3 worked column.
        let mut col = [0xdb, 0x13, 0x53, 0x45];
        mix_column(&mut col);
        assert_eq!(col, [0x8e, 0x4d, 0xa1, 0xbc]);
    }

    #[test]
    fn mix_column_then_inverse_is_identity() {
        let mut rng = rand::thread_rng();
        for _ in 0..256 {
            let mut col = [0u8; 4];
            rng.fill_bytes(&mut col);
            let original = col;
            mix_column(&mut col);
            inv_mix_column(&mut col);
            assert_eq!(col, original);

            // The composition commutes.
            inv_mix_column(&mut col);
            mix_column(&mut col);
            assert_eq!(col, original);
        }
    }

    #[test]
    fn mix_columns_round_trips_full_state() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let mut state = [0u8; 16];
            rng.fill_bytes(&mut state);
            let original = state;
            mix_columns(&mut state);
            inv_mix_columns(&mut state);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn add_round_key_is_an_involution() {
        let mut state: Block = core::array::from_fn(|i| i as u8);
        let round_key: Block = core::array::from_fn(|i| (0xf0 ^ i) as u8);
        let original = state;
        add_round_key(&mut state, &round_key);
        assert_ne!(state, original);
        add_round_key(&mut state, &round_key);
        assert_eq!(state, original);
    }
}
