use super::{from_be_padded, to_be_fixed, PrimeField};
use crypto_bigint::U512;
use gostec_api::Error;
use gostec_params::gost3410::GOST_R3410_2001_TEST;

fn fp() -> PrimeField {
    PrimeField::new(&GOST_R3410_2001_TEST.p).unwrap()
}

#[test]
fn rejects_even_modulus() {
    assert!(matches!(
        PrimeField::new(&U512::from_u64(10)),
        Err(Error::Configuration { .. })
    ));
    assert!(matches!(
        PrimeField::new(&U512::ZERO),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn add_sub_roundtrip() {
    let f = fp();
    let a = U512::from_u64(0xDEAD_BEEF);
    let b = U512::from_u64(0x1234_5678);
    let sum = f.add(&a, &b);
    assert_eq!(f.sub(&sum, &b), a);
    assert_eq!(f.add(&a, &b), f.add(&b, &a));
}

#[test]
fn sub_wraps_into_canonical_range() {
    let f = fp();
    let minus_one = f.sub(&U512::ZERO, &U512::ONE);
    assert_eq!(minus_one, f.modulus().wrapping_sub(&U512::ONE));
    assert_eq!(f.add(&minus_one, &U512::ONE), U512::ZERO);
}

#[test]
fn neg_of_zero_is_zero() {
    let f = fp();
    assert_eq!(f.neg(&U512::ZERO), U512::ZERO);
    let a = U512::from_u64(7);
    assert_eq!(f.add(&a, &f.neg(&a)), U512::ZERO);
}

#[test]
fn mul_matches_repeated_addition() {
    let f = fp();
    let a = U512::from_u64(0xABCD_EF01);
    let mut sum = U512::ZERO;
    for _ in 0..5 {
        sum = f.add(&sum, &a);
    }
    assert_eq!(f.mul_u32(&a, 5), sum);
    assert_eq!(f.mul(&a, &U512::from_u64(5)), sum);
}

#[test]
fn sqr_matches_mul() {
    let f = fp();
    let a = f.reduce_bytes(&[0x5A; 32]).unwrap();
    assert_eq!(f.sqr(&a), f.mul(&a, &a));
}

#[test]
fn inverse_roundtrip() {
    let f = fp();
    let a = f.reduce_bytes(&[0x17; 32]).unwrap();
    let inv = f.inv(&a).unwrap();
    assert_eq!(f.mul(&a, &inv), U512::ONE);
    assert_eq!(f.div(&a, &a).unwrap(), U512::ONE);
}

#[test]
fn inverse_of_zero_is_domain_error() {
    let f = fp();
    assert!(matches!(f.inv(&U512::ZERO), Err(Error::Domain { .. })));
    assert!(matches!(
        f.div(&U512::ONE, &U512::ZERO),
        Err(Error::Domain { .. })
    ));
}

#[test]
fn pow_small_cases() {
    let f = fp();
    let a = U512::from_u64(3);
    assert_eq!(f.pow(&a, &U512::from_u64(4)), U512::from_u64(81));
    assert_eq!(f.pow(&a, &U512::ZERO), U512::ONE);
}

#[test]
fn reduce_bytes_accepts_short_and_full_width() {
    let f = fp();
    assert_eq!(f.reduce_bytes(&[0x05]).unwrap(), U512::from_u64(5));
    assert_eq!(f.reduce_bytes(&[]).unwrap(), U512::ZERO);
    // A 64-byte input reduces mod the 256-bit prime.
    let wide = [0xFF; 64];
    let reduced = f.reduce_bytes(&wide).unwrap();
    assert!(reduced < *f.modulus());
}

#[test]
fn reduce_bytes_rejects_oversized_input() {
    let f = fp();
    assert!(matches!(
        f.reduce_bytes(&[0u8; 65]),
        Err(Error::Length { .. })
    ));
}

#[test]
fn fixed_width_serialization() {
    let x = from_be_padded(&[0x01, 0x02, 0x03]).unwrap();
    assert_eq!(to_be_fixed(&x, 4), vec![0x00, 0x01, 0x02, 0x03]);
    assert_eq!(to_be_fixed(&x, 32)[29..], [0x01, 0x02, 0x03]);
}
