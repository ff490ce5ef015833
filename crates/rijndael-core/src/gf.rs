//! Arithmetic in GF(2^8) under the Rijndael reduction polynomial
//! x^8 + x^4 + x^3 + x + 1 (0x11B).

/// Multiplies a field element by `x` (doubling): shift left one bit and
/// reduce by 0x1B when the vacated high bit was set.
#[inline]
pub fn xtime(b: u8) -> u8 {
    let shifted = b << 1;
    if b & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

/// Multiplies two field elements by shift-and-add: for each bit of `b` from
/// low to high, conditionally accumulate the running product, then double it.
#[inline]
pub fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        // mask is 0xFF when the low bit of b is set, 0x00 otherwise
        let mask = (b & 1).wrapping_neg();
        product ^= a & mask;
        let hi = a & 0x80;
        a <<= 1;
        a ^= ((hi != 0) as u8) * 0x1b;
        b >>= 1;
    }
    product
}

/// Computes the multiplicative inverse as b^254, with 0 mapping to 0.
///
/// The exponentiation always runs in full; the result is masked to zero
/// afterwards for a zero input.
pub fn inv(b: u8) -> u8 {
    let b2 = mul(b, b);
    let b4 = mul(b2, b2);
    let b8 = mul(b4, b4);
    let b16 = mul(b8, b8);
    let b32 = mul(b16, b16);
    let b64 = mul(b32, b32);
    let b128 = mul(b64, b64);

    let mut y = mul(b128, b64);
    y = mul(y, b32);
    y = mul(y, b16);
    y = mul(y, b8);
    y = mul(y, b4);
    y = mul(y, b2);

    let mask = ((b != 0) as u8).wrapping_neg();
    y & mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xtime_doubles_small_values() {
        assert_eq!(xtime(0x01), 0x02);
        assert_eq!(xtime(0x40), 0x80);
    }

    #[test]
    fn xtime_reduces_on_overflow() {
        assert_eq!(xtime(0x80), 0x1b);
        assert_eq!(xtime(0xff), 0xe5);
    }

    #[test]
    fn xtime_chain_yields_round_constants() {
        // The AES-128 round constants are successive doublings of 1.
        let expected = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];
        let mut rcon = 0x01u8;
        for &want in &expected {
            assert_eq!(rcon, want);
            rcon = xtime(rcon);
        }
    }

    #[test]
    fn mul_matches_fips_worked_example() {
        // FIPS-197 §4.2: {57} * {83} = {c1}.
        assert_eq!(mul(0x57, 0x83), 0xc1);
        assert_eq!(mul(0x57, 0x13), 0xfe);
    }

    #[test]
    fn mul_identity_and_zero() {
        for b in 0..=255u8 {
            assert_eq!(mul(b, 0x01), b);
            assert_eq!(mul(b, 0x00), 0x00);
        }
    }

    #[test]
    fn mul_is_commutative() {
        for a in (0..=255u8).step_by(7) {
            for b in (0..=255u8).step_by(11) {
                assert_eq!(mul(a, b), mul(b, a));
            }
        }
    }

    #[test]
    fn mul_agrees_with_repeated_xtime() {
        for b in 0..=255u8 {
            assert_eq!(mul(b, 0x02), xtime(b));
            assert_eq!(mul(b, 0x04), xtime(xtime(b)));
        }
    }

    #[test]
    fn inv_is_multiplicative_inverse() {
        assert_eq!(inv(0x00), 0x00);
        // FIPS-197 §5.1.1: the inverse of {53} is {ca}.
        assert_eq!(inv(0x53), 0xca);
        for b in 1..=255u8 {
            assert_eq!(mul(b, inv(b)), 0x01);
        }
    }
}
