//! Group operations on the NIST B-163 binary elliptic curve
//!
//! `y^2 + x*y = x^3 + x^2 + b`
//!
//! Curve parameter `a` is fixed to 1, as it is for every NIST binary curve, so
//! only `b` (and the base point `G` and its order `n`) are hard-coded below.
//! This is deliberately not a general curve library: the coefficients are
//! compile-time constants, not a generic parameter.

use crate::{bitvec::BitVector, field::FieldElement};

const COEFF_B: FieldElement =
    FieldElement::from_words([0x4a3205fd, 0x512f7874, 0x1481eb10, 0xb8c953ca, 0x0a601907, 0x2]);
const BASE_X: FieldElement =
    FieldElement::from_words([0xe8343e36, 0xd4994637, 0xa0991168, 0x86a2d57e, 0xf0eba162, 0x3]);
const BASE_Y: FieldElement =
    FieldElement::from_words([0x797324f1, 0xb11c5c0c, 0xa2cdd545, 0x71a0094f, 0xd51fbc6c, 0x0]);

/// Order of the cyclic group generated by [`Point::BASE`].
pub const BASE_ORDER: BitVector =
    BitVector::from_words([0xa4234c33, 0x77e70c12, 0x000292fe, 0x00000000, 0x00000000, 0x4]);

/// Exposed for the test suite, which needs `b` to construct the curve's
/// unique point of order 2 (`x = 0`, `y = sqrt(b)`) as a small-order
/// counterexample for [`crate::ecies::validate_pubkey`].
#[cfg(test)]
pub(crate) fn test_coeff_b() -> FieldElement {
    COEFF_B
}

/// A point on the curve, or the point at infinity.
///
/// The point at infinity is encoded as `(0, 0)`. The curve does not pass
/// through the origin, so this sentinel is unambiguous; it is, however, an
/// implementation invariant rather than a mathematical necessity, so no code
/// outside this module should construct a `Point` except through the
/// constructors here.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: FieldElement,
    pub y: FieldElement,
}

impl Point {
    pub const INFINITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ZERO,
    };

    pub const BASE: Self = Self {
        x: BASE_X,
        y: BASE_Y,
    };

    pub fn new(x: FieldElement, y: FieldElement) -> Self {
        Self { x, y }
    }

    pub fn is_infinity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// `true` if this is the point at infinity, or if `y^2 + x*y = x^3 + x^2 +
    /// b` holds.
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity() {
            return true;
        }
        let x2 = self.x * self.x;
        let x3 = x2 * self.x;
        let lhs = self.y * self.y + self.x * self.y;
        let rhs = x3 + x2 + COEFF_B;
        lhs == rhs
    }

    /// Point doubling: `2 * (x, y)`.
    #[must_use]
    pub fn double(&self) -> Self {
        if self.x.is_zero() {
            return Self::INFINITY;
        }
        let lambda = self.y * self.x.invert() + self.x;
        let x3 = lambda * lambda + lambda + FieldElement::ONE;
        let y3 = self.x * self.x + lambda * x3 + x3;
        Self { x: x3, y: y3 }
    }

    /// Point addition. The specific evaluation order below (computing `d`
    /// before overwriting `x1`) mirrors the reference implementation, which
    /// relies on it to avoid clobbering operands it still needs.
    #[must_use]
    pub fn add(&self, rhs: &Self) -> Self {
        if rhs.is_infinity() {
            return *self;
        }
        if self.is_infinity() {
            return *rhs;
        }
        if self.x == rhs.x {
            return if self.y == rhs.y {
                self.double()
            } else {
                Self::INFINITY
            };
        }
        let a = self.y + rhs.y;
        let b = self.x + rhs.x;
        let lambda = b.invert() * a;
        let x3 = lambda * lambda + lambda + b + FieldElement::ONE;
        let x1_plus_x3 = self.x + x3;
        let y3 = x1_plus_x3 * lambda + x3 + self.y;
        Self { x: x3, y: y3 }
    }

    /// Scalar multiplication via the double-and-add ladder, most-significant
    /// bit first. Not constant-time: both the number of doublings and the
    /// conditional addition branch on the bits of `k`.
    #[must_use]
    pub fn mult(&self, k: &BitVector) -> Self {
        let mut r = Self::INFINITY;
        let bits = k.sizeinbits();
        for i in (0..bits).rev() {
            r = r.double();
            if k.get_bit(i) {
                r = r.add(self);
            }
        }
        r
    }
}
