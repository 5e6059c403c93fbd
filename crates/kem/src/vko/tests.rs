use super::{kek, kek_34102001, kek_34102012_256, kek_34102012_512, keg};
use gostec_api::Error;
use gostec_params::gost3410::{
    GOST_R3410_2001_TEST, GOST_R3410_2012_256_A, GOST_R3410_2012_512_A,
};
use gostec_sign::gost3410::{generate_keypair, public_key};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn reversed(hex_str: &str) -> Vec<u8> {
    let mut bytes = hex::decode(hex_str).unwrap();
    bytes.reverse();
    bytes
}

#[test]
fn vko_2001_known_answer() {
    let params = &GOST_R3410_2001_TEST;
    // RFC 4357 example keys are little-endian; the fixture stores them reversed.
    let ukm = reversed("5172be25f852a233");
    let prv1 = reversed("1df129e43dab345b68f6a852f4162dc69f36b2f84717d08755cc5c44150bf928");
    let prv2 = reversed("5b9356c6474f913f1e83885ea0edd5df1a43fd9d799d219093241157ac9ed473");
    let expected =
        hex::decode("ee4618a0dbb10cb31777b4b86a53d9e7ef6cb3e400101410f0c0f2af46c494a6").unwrap();

    let pub1 = public_key(params, &prv1).unwrap();
    let pub2 = public_key(params, &prv2).unwrap();
    assert_eq!(kek_34102001(params, &prv1, &pub2, &ukm).unwrap(), expected);
    assert_eq!(kek_34102001(params, &prv2, &pub1, &ukm).unwrap(), expected);
}

#[test]
fn vko_2012_known_answers() {
    let params = &GOST_R3410_2012_512_A;
    let ukm = reversed("1d80603c8544c727");
    let prv1 = reversed(
        "c990ecd972fce84ec4db022778f50fcac726f46708384b8d458304962d7147f8c2db41cef22c90b102f2968404f9b9be6d47c79692d81826b32b8daca43cb667",
    );
    let prv2 = reversed(
        "48c859f7b6f11585887cc05ec6ef1390cfea739b1a18c0d4662293ef63b79e3b8014070b44918590b4b996acfea4edfbbbcccc8c06edd8bf5bda92a51392d0db",
    );
    let pub1 = public_key(params, &prv1).unwrap();
    let pub2 = public_key(params, &prv2).unwrap();

    let expected_256 =
        hex::decode("c9a9a77320e2cc559ed72dce6f47e2192ccea95fa648670582c054c0ef36c221").unwrap();
    assert_eq!(
        kek_34102012_256(params, &prv1, &pub2, &ukm).unwrap(),
        expected_256
    );
    assert_eq!(
        kek_34102012_256(params, &prv2, &pub1, &ukm).unwrap(),
        expected_256
    );

    let expected_512 = hex::decode(
        "79f002a96940ce7bde3259a52e015297adaad84597a0d205b50e3e1719f97bfa7ee1d2661fa9979a5aa235b558a7e6d9f88f982dd63fc35a8ec0dd5e242d3bdf",
    )
    .unwrap();
    assert_eq!(
        kek_34102012_512(params, &prv1, &pub2, &ukm).unwrap(),
        expected_512
    );
    assert_eq!(
        kek_34102012_512(params, &prv2, &pub1, &ukm).unwrap(),
        expected_512
    );
}

#[test]
fn raw_shared_secret_is_symmetric() {
    let params = &GOST_R3410_2012_256_A;
    let mut rng = ChaCha20Rng::seed_from_u64(23);
    let (pub1, prv1) = generate_keypair(params, &mut rng).unwrap();
    let (pub2, prv2) = generate_keypair(params, &mut rng).unwrap();
    let ukm = [0x11u8, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88];

    let left = kek(params, &prv1, &pub2, &ukm).unwrap();
    let right = kek(params, &prv2, &pub1, &ukm).unwrap();
    assert_eq!(left, right);
    assert_eq!(left.len(), 2 * params.field_bytes);
}

#[test]
fn degenerate_ukm_encodes_the_identity_as_zeros() {
    let params = &GOST_R3410_2001_TEST;
    let mut rng = ChaCha20Rng::seed_from_u64(29);
    let (public, secret) = generate_keypair(params, &mut rng).unwrap();
    // ukm ≡ 0 mod n collapses the shared point to the identity.
    let shared = kek(params, &secret, &public, &[0u8; 8]).unwrap();
    assert_eq!(shared, vec![0u8; 64]);
}

#[test]
fn kek_validates_its_inputs() {
    let params = &GOST_R3410_2001_TEST;
    let mut rng = ChaCha20Rng::seed_from_u64(31);
    let (public, secret) = generate_keypair(params, &mut rng).unwrap();
    let ukm = [0x01u8; 8];

    assert!(matches!(
        kek(params, &[0u8; 32], &public, &ukm),
        Err(Error::Domain { .. })
    ));
    assert!(matches!(
        kek(params, &secret[..31], &public, &ukm),
        Err(Error::Length { .. })
    ));
    let mut off_curve = public.clone();
    off_curve[40] ^= 0x10;
    assert!(matches!(
        kek(params, &secret, &off_curve, &ukm),
        Err(Error::Domain { .. })
    ));
    assert!(matches!(
        kek(params, &secret, &public[..64], &ukm),
        Err(Error::Length { .. })
    ));
}

#[test]
fn keg_requires_a_32_byte_seed() {
    let params = &GOST_R3410_2012_256_A;
    let mut rng = ChaCha20Rng::seed_from_u64(37);
    let (public, secret) = generate_keypair(params, &mut rng).unwrap();
    assert!(matches!(
        keg(params, &secret, &public, &[0u8; 31]),
        Err(Error::Length { .. })
    ));
}

#[test]
fn keg_expands_to_64_bytes_on_the_256_bit_family() {
    let params = &GOST_R3410_2012_256_A;
    let mut rng = ChaCha20Rng::seed_from_u64(41);
    let (public, secret) = generate_keypair(params, &mut rng).unwrap();
    let mut seed = [0u8; 32];
    for (i, byte) in seed.iter_mut().enumerate() {
        *byte = i as u8;
    }

    let first = keg(params, &secret, &public, &seed).unwrap();
    assert_eq!(first.len(), 64);
    assert_eq!(first, keg(params, &secret, &public, &seed).unwrap());

    // Bytes 16..24 diversify the KDF step.
    let mut other_diversifier = seed;
    other_diversifier[20] ^= 0xFF;
    let second = keg(params, &secret, &public, &other_diversifier).unwrap();
    assert_ne!(first, second);

    // Bytes 24..32 are unused by the scheme.
    let mut trailing = seed;
    trailing[28] ^= 0xFF;
    assert_eq!(first, keg(params, &secret, &public, &trailing).unwrap());
}

#[test]
fn keg_on_the_512_bit_family_is_the_512_bit_kek() {
    let params = &GOST_R3410_2012_512_A;
    let mut rng = ChaCha20Rng::seed_from_u64(43);
    let (public, secret) = generate_keypair(params, &mut rng).unwrap();
    let mut seed = [0u8; 32];
    for (i, byte) in seed.iter_mut().enumerate() {
        *byte = 0xA0 ^ i as u8;
    }

    let exported = keg(params, &secret, &public, &seed).unwrap();
    assert_eq!(exported.len(), 64);
    assert_eq!(
        exported,
        kek_34102012_512(params, &secret, &public, &seed[..16]).unwrap()
    );
}
