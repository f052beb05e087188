//! A Davies-Meyer-shaped one-way compression function built on [`Xtea`].
//!
//! This is structurally Matyas-Meyer-Oseas rather than classical
//! Davies-Meyer — each input block rekeys the cipher directly rather than
//! being mixed with the running state first — but that's the construction
//! the original scheme uses for its KDF, and interoperability with it
//! requires preserving the construction exactly rather than "fixing" the name.

use crate::xtea::Xtea;

/// Compress `input` (which must be a whole number of 16-byte blocks) into an
/// 8-byte output.
///
/// For each 16-byte block: rekey XTEA with the block itself, encipher the
/// running 8-byte accumulator, and XOR the result back into the accumulator.
pub fn davies_meyer(input: &[u8]) -> [u8; 8] {
    debug_assert_eq!(input.len() % 16, 0, "davies_meyer input must be whole 16-byte blocks");
    let mut acc = [0u8; 8];
    for block in input.chunks_exact(16) {
        let key: [u8; 16] = block.try_into().unwrap();
        let cipher = Xtea::new(&key);
        let mut scratch = acc;
        cipher.encipher_block(&mut scratch);
        for (a, s) in acc.iter_mut().zip(scratch.iter()) {
            *a ^= s;
        }
    }
    acc
}
