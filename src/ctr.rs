//! CTR-mode stream encryption built on [`Xtea`].
//!
//! The counter is a 64-bit big-endian integer starting at zero, incremented
//! once per 8-byte block enciphered. The final block is truncated to
//! whatever's left of the buffer. Encryption and decryption are the same
//! operation, since both are just XOR against the keystream.

use crate::xtea::Xtea;

/// XOR `data` in place against the XTEA-CTR keystream under `key`. The same
/// function encrypts and decrypts.
pub fn ctr_crypt(key: &[u8; 16], data: &mut [u8]) {
    let cipher = Xtea::new(key);
    let mut counter: u64 = 0;
    for chunk in data.chunks_mut(8) {
        let mut block: [u8; 8] = counter.to_be_bytes();
        cipher.encipher_block(&mut block);
        for (b, k) in chunk.iter_mut().zip(block.iter()) {
            *b ^= k;
        }
        counter = counter.wrapping_add(1);
    }
}
