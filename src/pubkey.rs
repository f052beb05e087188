//! External byte layout for public and private keys.
//!
//! A [`PublicKey`] packs both coordinates of a curve point into 21 bytes each
//! (big-endian, MSB-first); a [`PrivateKey`] packs the scalar the same way.
//! This "keyed" packing is deliberately distinct from the 24-byte "raw"
//! packing ([`crate::bitvec::BitVector::import_raw`]/`export_raw`) used for
//! the ephemeral point in the stream prefix — see [`crate::bitvec`] for why
//! the two differ.

use crate::{
    bitvec::{BitVector, KEY_SIZE},
    curve::Point,
    field::FieldElement,
};

/// `x || y`, each 21 bytes, big-endian MSB-first. The top 5 bits of the first
/// byte of each coordinate are implicitly zero (`DEGREE` is 163, not a
/// multiple of 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey {
    pub x: [u8; KEY_SIZE],
    pub y: [u8; KEY_SIZE],
}

impl PublicKey {
    pub fn from_point(p: &Point) -> Self {
        Self {
            x: p.x.bitvec().dump_keyed(),
            y: p.y.bitvec().dump_keyed(),
        }
    }

    pub fn point(&self) -> Point {
        Point::new(
            FieldElement::from_bitvec(BitVector::load_keyed(&self.x)),
            FieldElement::from_bitvec(BitVector::load_keyed(&self.y)),
        )
    }

    pub fn to_bytes(&self) -> [u8; 2 * KEY_SIZE] {
        let mut out = [0u8; 2 * KEY_SIZE];
        out[..KEY_SIZE].copy_from_slice(&self.x);
        out[KEY_SIZE..].copy_from_slice(&self.y);
        out
    }

    pub fn from_bytes(bytes: &[u8; 2 * KEY_SIZE]) -> Self {
        let mut x = [0u8; KEY_SIZE];
        let mut y = [0u8; KEY_SIZE];
        x.copy_from_slice(&bytes[..KEY_SIZE]);
        y.copy_from_slice(&bytes[KEY_SIZE..]);
        Self { x, y }
    }
}

/// The scalar, packed identically to a single [`PublicKey`] coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivateKey {
    pub k: [u8; KEY_SIZE],
}

impl PrivateKey {
    pub fn from_scalar(k: &BitVector) -> Self {
        Self { k: k.dump_keyed() }
    }

    pub fn scalar(&self) -> BitVector {
        BitVector::load_keyed(&self.k)
    }

    pub fn to_bytes(&self) -> [u8; KEY_SIZE] {
        self.k
    }

    pub fn from_bytes(bytes: &[u8; KEY_SIZE]) -> Self {
        Self { k: *bytes }
    }
}
