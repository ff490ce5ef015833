//! Word-level helpers shared by the key schedule and round transforms.

/// A 4-byte word: one key-schedule unit, or one column of the state.
pub type Word = [u8; 4];

/// XORs `rhs` into `dst` byte-for-byte.
#[inline]
pub fn xor_in_place(dst: &mut Word, rhs: &Word) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Cyclically rotates a word left by one byte position: `[a, b, c, d]`
/// becomes `[b, c, d, a]`. A byte rotation, not a bit rotation.
#[inline]
pub fn rotate_left(word: &mut Word) {
    word.rotate_left(1);
}
