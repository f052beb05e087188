//! ECIES over the NIST B-163 binary curve, keyed with XTEA.
//!
//! The public surface is [`generate_keys`] to mint a key pair, [`encrypt`]/
//! [`decrypt`] for one-shot use, and [`StreamState`] for encrypting or
//! decrypting a message in caller-provided chunks without allocating. Lower
//! layers ([`BitVector`], [`FieldElement`], [`Point`]) are re-exported at the
//! crate root for callers who need the primitives directly, but the envelope
//! built on top of them is the intended entry point.


mod bitvec;
mod cbcmac;
mod curve;
mod ctr;
mod daviesmeyer;
mod ecies;
mod error;
mod field;
mod pubkey;
mod random;
mod text;
mod xtea;

pub use {
    bitvec::{BitVector, DEGREE, KEY_SIZE},
    curve::Point,
    ecies::{
        generate_keys,
        validate_pubkey,
        StreamState,
        CHUNK_OVERHEAD,
        OVERHEAD,
        START_OVERHEAD,
    },
    error::EciesError,
    field::FieldElement,
    pubkey::{PrivateKey, PublicKey},
    text::{Ciphertext, Plaintext},
};

pub use ecies::{decrypt, encrypt};
