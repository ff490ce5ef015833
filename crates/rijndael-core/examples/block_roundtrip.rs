//! Encrypts one block, decrypts it back, and prints each stage as hex.

use rijndael_core::{decrypt_with_schedule, encrypt_with_schedule, expand_key, Aes128Key};

fn main() {
    let key = Aes128Key::from(*b"sixteen byte key");
    let plaintext = *b"one block of txt";

    let round_keys = expand_key(&key);
    let ciphertext = encrypt_with_schedule(&plaintext, &round_keys);
    let decrypted = decrypt_with_schedule(&ciphertext, &round_keys);

    println!("key:        {}", hex::encode(key.0));
    println!("plaintext:  {}", hex::encode(plaintext));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted:  {}", hex::encode(decrypted));

    assert_eq!(decrypted, plaintext);
    println!("example succeeded; round trip restored the plaintext");
}
