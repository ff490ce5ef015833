//! Known-answer tests against the published FIPS-197 vectors, exercised
//! through the public crate surface only.

use rijndael_core::{
    decrypt_block, decrypt_with_schedule, encrypt_block, encrypt_with_schedule, expand_key,
    Aes128Key, Block,
};

fn block_from_hex(s: &str) -> Block {
    let bytes = hex::decode(s).expect("valid hex in test vector");
    bytes.as_slice().try_into().expect("16-byte test vector")
}

#[test]
fn appendix_c_vector_encrypts_and_decrypts() {
    let key = Aes128Key::from(block_from_hex("000102030405060708090a0b0c0d0e0f"));
    let plaintext = block_from_hex("00112233445566778899aabbccddeeff");
    let ciphertext = block_from_hex("69c4e0d86a7b0430d8cdb78070b4c55a");

    assert_eq!(encrypt_block(&plaintext, &key), ciphertext);
    assert_eq!(decrypt_block(&ciphertext, &key), plaintext);
}

#[test]
fn zero_key_zero_block_vector() {
    let key = Aes128Key::from([0u8; 16]);
    let ciphertext = block_from_hex("66e94bd4ef8a2c3b884cfa59ca342b2e");

    assert_eq!(encrypt_block(&[0u8; 16], &key), ciphertext);
    assert_eq!(decrypt_block(&ciphertext, &key), [0u8; 16]);
}

#[test]
fn appendix_a_key_expansion() {
    let key = Aes128Key::from(block_from_hex("2b7e151628aed2a6abf7158809cf4f3c"));
    let schedule = expand_key(&key).to_bytes();

    assert_eq!(schedule.len(), 176);
    // Round key 0 is the cipher key verbatim.
    assert_eq!(&schedule[..16], &key.0);
    // Words w4..w7 and w40..w43 from the appendix walkthrough.
    assert_eq!(
        &schedule[16..32],
        block_from_hex("a0fafe1788542cb123a339392a6c7605").as_slice()
    );
    assert_eq!(
        &schedule[160..176],
        block_from_hex("d014f9a8c9ee2589e13f0cc8b6630ca6").as_slice()
    );
}

#[test]
fn random_round_trips_through_cached_schedule() {
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let round_keys = expand_key(&Aes128Key::from(key_bytes));

    for _ in 0..256 {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        let ct = encrypt_with_schedule(&block, &round_keys);
        assert_ne!(ct, block);
        assert_eq!(decrypt_with_schedule(&ct, &round_keys), block);
    }
}
