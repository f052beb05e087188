use rand::SeedableRng;

use crate::{
    bitvec::KEY_SIZE,
    curve::Point,
    ecies::{generate_keys, validate_pubkey},
    pubkey::PublicKey,
};

fn rng() -> rand::rngs::SmallRng {
    rand::rngs::SmallRng::seed_from_u64(0xfeed_beef)
}

#[test]
fn generated_keys_validate() {
    let mut rng = rng();
    for _ in 0..10 {
        let (_priv, pub_key) = generate_keys(&mut rng);
        assert!(validate_pubkey(&pub_key).is_ok());
    }
}

#[test]
fn key_byte_layout_roundtrips() {
    let mut rng = rng();
    let (priv_key, pub_key) = generate_keys(&mut rng);

    let pub_bytes = pub_key.to_bytes();
    assert_eq!(pub_bytes.len(), 2 * KEY_SIZE);
    assert_eq!(PublicKey::from_bytes(&pub_bytes), pub_key);

    let priv_bytes = priv_key.to_bytes();
    assert_eq!(priv_bytes.len(), KEY_SIZE);
}

#[test]
fn the_identity_point_is_rejected() {
    let origin = PublicKey::from_point(&Point::INFINITY);
    assert!(validate_pubkey(&origin).is_err());
}

#[test]
fn an_off_curve_point_is_rejected() {
    // Perturb a valid point's x-coordinate by one bit; astronomically
    // unlikely to land back on the curve.
    let mut p = Point::BASE;
    p.x = p.x.add(&crate::field::FieldElement::ONE);
    assert!(!p.is_on_curve());
    let bogus = PublicKey::from_point(&p);
    assert!(validate_pubkey(&bogus).is_err());
}

#[test]
fn a_small_order_point_is_rejected() {
    // The curve's only point of order 2 has x = 0 (`double` maps exactly
    // those points to infinity) and y = sqrt(b), since the curve equation
    // collapses to y^2 = b when x = 0. Squaring is the field's Frobenius
    // endomorphism, which has order DEGREE, so sqrt(b) = b^(2^(DEGREE-1)):
    // square b that many times.
    let b = crate::curve::test_coeff_b();
    let mut y = b;
    for _ in 0..crate::bitvec::DEGREE - 1 {
        y = y.mul(&y);
    }
    let order_two_point = Point::new(crate::field::FieldElement::ZERO, y);
    assert!(order_two_point.is_on_curve());
    assert!(!order_two_point.is_infinity());
    assert!(order_two_point.double().is_infinity());

    // BASE_ORDER is odd, so order_two_point survives n * Q and the order
    // check in validate_pubkey must reject it.
    assert!(validate_pubkey(&PublicKey::from_point(&order_two_point)).is_err());
}
