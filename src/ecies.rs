//! The ECIES envelope: key generation, public-key validation, the KDF, and
//! one-shot and streaming encrypt/decrypt.
//!
//! Data flow for encryption: draw an ephemeral scalar, multiply it into the
//! recipient's public point and into the base point, run the two resulting
//! coordinates (plus the shared secret's x-coordinate) through the KDF to get
//! two session keys, emit the ephemeral point as a prefix, then CTR-encrypt
//! and CBC-MAC each chunk. Decryption runs the same steps in reverse.

use rand_core::RngCore;

use crate::{
    bitvec::{BitVector, NUMWORDS},
    cbcmac::cbcmac,
    curve::{Point, BASE_ORDER},
    ctr::ctr_crypt,
    daviesmeyer::davies_meyer,
    error::EciesError,
    pubkey::{PrivateKey, PublicKey},
    random::draw_scalar,
    text::{Ciphertext, Plaintext},
};

/// The per-chunk authentication tag length.
pub const CHUNK_OVERHEAD: usize = 8;
/// The stream prefix length: two raw-packed field elements (`Rx`, `Ry`).
pub const START_OVERHEAD: usize = 8 * NUMWORDS;
/// Total overhead of the one-shot API: prefix plus one chunk's tag.
pub const OVERHEAD: usize = START_OVERHEAD + CHUNK_OVERHEAD;

/// Generate a fresh key pair: draw a scalar `k` in `[1, n)` and set `Q = k *
/// G`.
pub fn generate_keys(rng: &mut impl RngCore) -> (PrivateKey, PublicKey) {
    let k = draw_scalar(rng, &BASE_ORDER);
    let q = Point::BASE.mult(&k);
    (PrivateKey::from_scalar(&k), PublicKey::from_point(&q))
}

/// Accept a public key iff both coordinates fit in `DEGREE` bits, the point
/// is not the identity, it lies on the curve, and it generates a group of
/// order `n` (i.e. `n * Q` is the identity).
pub fn validate_pubkey(pubkey: &PublicKey) -> Result<(), EciesError> {
    let q = pubkey.point();
    partial_validate(&q)?;
    if !q.mult(&BASE_ORDER).is_infinity() {
        return Err(EciesError::InvalidPoint);
    }
    Ok(())
}

/// Validation steps (a)-(c) only: bit-length, non-identity, on-curve. Used
/// both by [`validate_pubkey`] and, without the order check, by
/// [`StreamState::decrypt_start`] on the ephemeral point.
fn partial_validate(q: &Point) -> Result<(), EciesError> {
    if q.x.bitvec().sizeinbits() > crate::bitvec::DEGREE
        || q.y.bitvec().sizeinbits() > crate::bitvec::DEGREE
    {
        return Err(EciesError::InvalidPoint);
    }
    if q.is_infinity() || !q.is_on_curve() {
        return Err(EciesError::InvalidPoint);
    }
    Ok(())
}

/// Derive the two 16-byte session keys from the shared secret's x-coordinate
/// and the ephemeral point.
///
/// Builds an 80-byte buffer (`Zx || Rx || Ry`, raw-packed, padded with
/// zeros), then runs the Davies-Meyer-shaped compression four times over it
/// with a one-byte domain separator (0-3) appended each time. Outputs 0 and 1
/// concatenate into `k1`; outputs 2 and 3 into `k2`.
fn kdf(zx: &BitVector, rx: &BitVector, ry: &BitVector) -> ([u8; 16], [u8; 16]) {
    const BUFSIZE: usize = ((3 * NUMWORDS * 4 + 1 + 15) / 16) * 16;
    let mut buf = [0u8; BUFSIZE];
    buf[0..NUMWORDS * 4].copy_from_slice(&zx.export_raw());
    buf[NUMWORDS * 4..2 * NUMWORDS * 4].copy_from_slice(&rx.export_raw());
    buf[2 * NUMWORDS * 4..3 * NUMWORDS * 4].copy_from_slice(&ry.export_raw());
    let sep_offset = 3 * NUMWORDS * 4;

    let mut out = |sep: u8| -> [u8; 8] {
        buf[sep_offset] = sep;
        davies_meyer(&buf)
    };
    let mut k1 = [0u8; 16];
    let mut k2 = [0u8; 16];
    k1[0..8].copy_from_slice(&out(0));
    k1[8..16].copy_from_slice(&out(1));
    k2[0..8].copy_from_slice(&out(2));
    k2[8..16].copy_from_slice(&out(3));
    (k1, k2)
}

/// The two symmetric session keys derived at the start of a stream: `k1`
/// keys CTR, `k2` keys CBC-MAC. Carries no sequence counter — each chunk's
/// MAC only ever covers its own bytes, so callers that split and reassemble
/// a stream must preserve chunk order out of band.
#[derive(Debug, Clone, Copy)]
pub struct StreamState {
    k1: [u8; 16],
    k2: [u8; 16],
}

impl StreamState {
    /// Start an encryption stream: draw a fresh ephemeral scalar, derive the
    /// shared point (retrying if cofactor multiplication collapses it to the
    /// identity), run the KDF, and return the state plus the 48-byte prefix
    /// to send ahead of the ciphertext.
    pub fn encrypt_start(
        pubkey: &PublicKey,
        rng: &mut impl RngCore,
    ) -> (Self, [u8; START_OVERHEAD]) {
        let q = pubkey.point();
        let (k, z) = loop {
            let k = draw_scalar(rng, &BASE_ORDER);
            let z = q.mult(&k).double();
            if !z.is_infinity() {
                break (k, z);
            }
        };
        let r = Point::BASE.mult(&k);
        let (k1, k2) = kdf(&z.x.bitvec(), &r.x.bitvec(), &r.y.bitvec());

        let mut prefix = [0u8; START_OVERHEAD];
        prefix[..NUMWORDS * 4].copy_from_slice(&r.x.bitvec().export_raw());
        prefix[NUMWORDS * 4..].copy_from_slice(&r.y.bitvec().export_raw());
        (Self { k1, k2 }, prefix)
    }

    /// Start a decryption stream from a 48-byte prefix. The ephemeral point
    /// is validated (on-curve, non-identity, in-range) but its order is not
    /// checked — that's only required of long-lived public keys.
    pub fn decrypt_start(
        prefix: &[u8; START_OVERHEAD],
        privkey: &PrivateKey,
    ) -> Result<Self, EciesError> {
        let rx_bytes: [u8; NUMWORDS * 4] = prefix[..NUMWORDS * 4].try_into().unwrap();
        let ry_bytes: [u8; NUMWORDS * 4] = prefix[NUMWORDS * 4..].try_into().unwrap();
        let r = Point::new(
            crate::field::FieldElement::from_bitvec(BitVector::import_raw(&rx_bytes)),
            crate::field::FieldElement::from_bitvec(BitVector::import_raw(&ry_bytes)),
        );
        partial_validate(&r)?;

        let d = privkey.scalar();
        let z = r.mult(&d).double();
        if z.is_infinity() {
            return Err(EciesError::InvalidPoint);
        }
        let (k1, k2) = kdf(&z.x.bitvec(), &r.x.bitvec(), &r.y.bitvec());
        Ok(Self { k1, k2 })
    }

    /// Encrypt one chunk in place. `buf` must be `len + CHUNK_OVERHEAD` bytes
    /// long, with the first `len` bytes holding plaintext; on return, those
    /// bytes hold ciphertext and the trailing 8 bytes hold the MAC.
    pub fn encrypt_chunk(&self, buf: &mut [u8]) {
        let len = buf.len() - CHUNK_OVERHEAD;
        let (body, tag) = buf.split_at_mut(len);
        ctr_crypt(&self.k1, body);
        tag.copy_from_slice(&cbcmac(&self.k2, body));
    }

    /// Decrypt one chunk in place. `buf` must be `len + CHUNK_OVERHEAD` bytes
    /// long, with the first `len` bytes holding ciphertext and the trailing
    /// 8 bytes the claimed MAC. On success, the first `len` bytes hold
    /// plaintext. On [`EciesError::MacFailure`], `buf` is left untouched —
    /// the caller must discard it, not treat it as partial plaintext.
    pub fn decrypt_chunk(&self, buf: &mut [u8]) -> Result<(), EciesError> {
        let len = buf.len() - CHUNK_OVERHEAD;
        let (body, tag) = buf.split_at_mut(len);
        let expected = cbcmac(&self.k2, body);
        if !constant_time_eq(&expected, tag) {
            return Err(EciesError::MacFailure);
        }
        ctr_crypt(&self.k1, body);
        Ok(())
    }
}

fn constant_time_eq(a: &[u8; CHUNK_OVERHEAD], b: &[u8]) -> bool {
    use subtle::ConstantTimeEq;
    a[..].ct_eq(b).into()
}

/// One-shot encryption: equivalent to [`StreamState::encrypt_start`] followed
/// by a single [`StreamState::encrypt_chunk`] over the whole plaintext.
/// Output layout is `prefix (48) || ciphertext (len) || mac (8)`, i.e.
/// `plaintext.len() + OVERHEAD` bytes.
pub fn encrypt(
    plaintext: Plaintext<&[u8]>,
    pubkey: &PublicKey,
    rng: &mut impl RngCore,
) -> Ciphertext<Vec<u8>> {
    let (stream, prefix) = StreamState::encrypt_start(pubkey, rng);
    let mut out = Vec::with_capacity(plaintext.0.len() + OVERHEAD);
    out.extend_from_slice(&prefix);
    out.extend_from_slice(plaintext.0);
    out.extend_from_slice(&[0u8; CHUNK_OVERHEAD]);
    stream.encrypt_chunk(&mut out[START_OVERHEAD..]);
    Ciphertext(out)
}

/// One-shot decryption, the inverse of [`encrypt`].
///
/// The MAC is verified before any plaintext is produced: on
/// [`EciesError::MacFailure`] nothing is returned and no plaintext is ever
/// materialized, which is a strictly safer variant of the reference's
/// behavior (the reference copies plaintext into the caller's output buffer
/// before checking the MAC).
pub fn decrypt(
    ciphertext: Ciphertext<&[u8]>,
    privkey: &PrivateKey,
) -> Result<Plaintext<Vec<u8>>, EciesError> {
    let data = ciphertext.0;
    if data.len() < OVERHEAD {
        return Err(EciesError::InvalidPoint);
    }
    let prefix: [u8; START_OVERHEAD] = data[..START_OVERHEAD].try_into().unwrap();
    let stream = StreamState::decrypt_start(&prefix, privkey)?;

    let mut body = data[START_OVERHEAD..].to_vec();
    stream.decrypt_chunk(&mut body)?;
    body.truncate(body.len() - CHUNK_OVERHEAD);
    Ok(Plaintext(body))
}
