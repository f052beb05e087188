use crate::{cbcmac::cbcmac, ctr::ctr_crypt, daviesmeyer::davies_meyer, xtea::Xtea};

#[test]
fn xtea_encipher_is_deterministic_and_moves_the_block() {
    let key = [0u8; 16];
    let mut block = [0u8; 8];
    let original = block;
    Xtea::new(&key).encipher_block(&mut block);
    assert_ne!(block, original, "an all-zero block shouldn't encipher to itself");

    let mut again = original;
    Xtea::new(&key).encipher_block(&mut again);
    assert_eq!(block, again);
}

#[test]
fn xtea_is_keyed() {
    let mut a = [1, 2, 3, 4, 5, 6, 7, 8];
    let mut b = a;
    Xtea::new(&[0u8; 16]).encipher_block(&mut a);
    Xtea::new(&[1u8; 16]).encipher_block(&mut b);
    assert_ne!(a, b);
}

#[test]
fn ctr_crypt_is_its_own_inverse() {
    let key = [0x42u8; 16];
    let plaintext = b"the quick brown fox jumps over a lazy dog, repeatedly".to_vec();
    let mut buf = plaintext.clone();
    ctr_crypt(&key, &mut buf);
    assert_ne!(buf, plaintext);
    ctr_crypt(&key, &mut buf);
    assert_eq!(buf, plaintext);
}

#[test]
fn ctr_crypt_handles_partial_final_block() {
    let key = [7u8; 16];
    for len in 0..20 {
        let plaintext = vec![0xabu8; len];
        let mut buf = plaintext.clone();
        ctr_crypt(&key, &mut buf);
        ctr_crypt(&key, &mut buf);
        assert_eq!(buf, plaintext, "length {len} didn't round-trip");
    }
}

#[test]
fn ctr_keystream_is_continuous_across_repeated_calls_on_the_same_buffer() {
    // Encrypting a buffer in one call must match encrypting its two halves
    // via two calls against a freshly-split buffer only if the counter
    // continues - which ctr_crypt does NOT do across separate calls (each
    // call starts its counter at zero). This pins down that a single chunk
    // must be encrypted in one `ctr_crypt` call, as `encrypt_chunk` does.
    let key = [9u8; 16];
    let whole = {
        let mut buf = vec![0u8; 16];
        ctr_crypt(&key, &mut buf);
        buf
    };
    let mut first_half = vec![0u8; 8];
    ctr_crypt(&key, &mut first_half);
    assert_eq!(&whole[..8], &first_half[..]);
}

#[test]
fn cbcmac_is_deterministic_and_length_sensitive() {
    let key = [0x11u8; 16];
    let data = b"authenticate this payload please";
    let mac1 = cbcmac(&key, data);
    let mac2 = cbcmac(&key, data);
    assert_eq!(mac1, mac2);

    let shorter = &data[..data.len() - 1];
    assert_ne!(cbcmac(&key, shorter), mac1, "length prefix should defeat truncation");
}

#[test]
fn cbcmac_detects_single_bit_flips() {
    let key = [0x22u8; 16];
    let mut data = b"integrity matters a whole lot here".to_vec();
    let original = cbcmac(&key, &data);
    data[3] ^= 0x01;
    assert_ne!(cbcmac(&key, &data), original);
}

#[test]
fn davies_meyer_output_is_eight_bytes_and_deterministic() {
    let input = [0xaau8; 48];
    let a = davies_meyer(&input);
    let b = davies_meyer(&input);
    assert_eq!(a, b);
    assert_eq!(a.len(), 8);
}

#[test]
fn davies_meyer_is_sensitive_to_every_block() {
    let mut input = [0u8; 32];
    let base = davies_meyer(&input);
    input[16] ^= 1;
    assert_ne!(davies_meyer(&input), base);
}

#[test]
#[should_panic]
fn davies_meyer_rejects_non_block_aligned_input() {
    let input = [0u8; 17];
    davies_meyer(&input);
}
