//! Uniform scalar generation in `[1, n)`, where `n` is the base-point order.
//!
//! The reference implementation reseeds a libc PRNG from wall-clock time on
//! every call and only clears high bits above `n`'s bit-length rather than
//! fully rejecting values `>= n`. Both are inappropriate for anything but a
//! demo: this module instead draws from any [`rand_core::RngCore`] (the
//! caller's responsibility to back with a real entropy source, e.g.
//! `rand::rngs::OsRng`, as the default process-wide choice) and performs
//! full rejection sampling.

use rand_core::RngCore;

use crate::bitvec::{BitVector, NUMWORDS};

/// Draw a scalar uniformly from `[1, order)`.
///
/// Fills `NUMWORDS * 4` bytes of randomness, clears every bit at or above
/// `order`'s bit-length, and resamples while the result is zero or `>=
/// order`. Unlike the reference, the `>= order` rejection is not skipped: the
/// reference's "clear the high bits only" shortcut leaves a small bias toward
/// the lower half of `[0, 2^ceil(log2 n))`, which this implementation does
/// not reproduce.
pub fn draw_scalar(rng: &mut impl RngCore, order: &BitVector) -> BitVector {
    let bound_bits = order.sizeinbits();
    loop {
        let mut bytes = [0u8; NUMWORDS * 4];
        rng.fill_bytes(&mut bytes);
        let mut candidate = BitVector::import_raw(&bytes);
        for bit in bound_bits..NUMWORDS * 32 {
            candidate.clr_bit(bit);
        }
        if candidate.is_clear() {
            continue;
        }
        if bitvec_lt(&candidate, order) {
            return candidate;
        }
    }
}

/// Unsigned comparison of two bit vectors, most-significant word first.
fn bitvec_lt(a: &BitVector, b: &BitVector) -> bool {
    for i in (0..NUMWORDS).rev() {
        let (wa, wb) = (a.words()[i], b.words()[i]);
        if wa != wb {
            return wa < wb;
        }
    }
    false
}
