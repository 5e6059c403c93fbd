//! GOST R 34.10 signature engine.
//!
//! Signing follows the standard's algorithm over a digest the caller has
//! already computed (GOST R 34.11-94 for the 2001 revision, Streebog for
//! 2012):
//!
//! 1. e = digest mod n, with e = 0 replaced by 1
//! 2. draw a nonce k ∈ [1, n−1]
//! 3. C = k·G; r = C.x mod n; retry on r = 0
//! 4. s = r·d + k·e mod n; retry on s = 0
//! 5. emit r ‖ s, big-endian fixed-width
//!
//! The retry conditions are part of the standard's definition of a valid
//! signature, not failure paths; the loop terminates on the first
//! iteration except with probability on the order of 1/n. Verification
//! never fails with an error on adversarial content of the correct length;
//! out-of-range components, malformed public keys and algebraically invalid
//! signatures all yield `Ok(false)`.

use crypto_bigint::U512;
use gostec_algorithms::ec::{Curve, Point};
use gostec_algorithms::field::{from_be_padded, to_be_fixed};
use gostec_api::{validate, Result};
use gostec_params::GostCurve;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;


/// Parse a private key and range-check the scalar d, 1 ≤ d < n.
fn private_scalar(curve: &Curve<'_>, private_key: &[u8]) -> Result<Zeroizing<U512>> {
    validate::length("private key", private_key.len(), curve.params().field_bytes)?;
    let d = Zeroizing::new(from_be_padded(private_key)?);
    validate::domain(
        *d != U512::ZERO && *d < curve.params().n,
        "private key",
        "scalar outside [1, n-1]",
    )?;
    Ok(d)
}

/// Compute the uncompressed public key d·G for a private key.
pub fn public_key(params: &GostCurve, private_key: &[u8]) -> Result<Vec<u8>> {
    let curve = Curve::new(params)?;
    let d = private_scalar(&curve, private_key)?;
    let q = curve.scalar_mul_base(&d)?;
    curve.encode_point(&q)
}

/// Generate a key pair with the private scalar rejection-sampled into
/// [1, n−1]. Returns (public key, private key bytes).
pub fn generate_keypair<R: CryptoRng + RngCore>(
    params: &GostCurve,
    rng: &mut R,
) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
    let curve = Curve::new(params)?;
    loop {
        let mut secret = Zeroizing::new(vec![0u8; params.field_bytes]);
        rng.fill_bytes(&mut secret);
        let d = Zeroizing::new(from_be_padded(&secret)?);
        if *d == U512::ZERO || *d >= params.n {
            continue;
        }
        let q = curve.scalar_mul_base(&d)?;
        return Ok((curve.encode_point(&q)?, secret));
    }
}

/// Sign a digest, drawing nonce bytes from the operating-system RNG.
///
/// When `seed` is given it supplies the nonce bytes for the first loop
/// iteration only (it must be exactly `field_bytes` long); any retry draws
/// fresh random bytes.
pub fn sign(
    params: &GostCurve,
    private_key: &[u8],
    digest: &[u8],
    seed: Option<&[u8]>,
) -> Result<Vec<u8>> {
    sign_with_rng(params, private_key, digest, seed, &mut rand::thread_rng())
}

/// Sign a digest with an explicit nonce RNG.
pub fn sign_with_rng<R: CryptoRng + RngCore>(
    params: &GostCurve,
    private_key: &[u8],
    digest: &[u8],
    seed: Option<&[u8]>,
    rng: &mut R,
) -> Result<Vec<u8>> {
    let curve = Curve::new(params)?;
    let len = params.field_bytes;
    if let Some(seed) = seed {
        validate::length("signing seed", seed.len(), len)?;
    }
    let d = private_scalar(&curve, private_key)?;
    let e = curve.reduce_digest(digest)?;

    let mut first_seed = seed;
    loop {
        let mut nonce_bytes = Zeroizing::new(vec![0u8; len]);
        match first_seed.take() {
            Some(seed) => nonce_bytes.copy_from_slice(seed),
            None => rng.fill_bytes(&mut nonce_bytes),
        }
        let k = Zeroizing::new(curve.fq.reduce_bytes(&nonce_bytes)?);
        // Zero or out-of-range nonces are retried, never reported.
        if *k == U512::ZERO || *k >= params.n {
            continue;
        }
        let c = curve.scalar_mul_base(&k)?;
        let r = match c {
            Point::Affine { x, .. } => curve.fq.reduce(&x),
            Point::Identity => continue,
        };
        if r == U512::ZERO {
            continue;
        }
        let s = curve.fq.add(&curve.fq.mul(&r, &d), &curve.fq.mul(&k, &e));
        if s == U512::ZERO {
            continue;
        }
        let mut out = Vec::with_capacity(2 * len);
        out.extend_from_slice(&to_be_fixed(&r, len));
        out.extend_from_slice(&to_be_fixed(&s, len));
        return Ok(out);
    }
}

/// Verify a signature over a digest.
///
/// Raises a Length error for a signature of the wrong size; every other
/// rejection, including a malformed or off-curve public key, is `Ok(false)`.
pub fn verify(
    params: &GostCurve,
    public_key: &[u8],
    digest: &[u8],
    signature: &[u8],
) -> Result<bool> {
    let curve = Curve::new(params)?;
    let len = params.field_bytes;
    validate::length("signature", signature.len(), 2 * len)?;
    let r = from_be_padded(&signature[..len])?;
    let s = from_be_padded(&signature[len..])?;
    if r == U512::ZERO || r >= params.n || s == U512::ZERO || s >= params.n {
        return Ok(false);
    }
    let e = curve.reduce_digest(digest)?;
    // e is never zero, so the inverse exists.
    let v = curve.fq.inv(&e)?;
    let z1 = curve.fq.mul(&s, &v);
    let z2 = curve.fq.neg(&curve.fq.mul(&r, &v));
    let q = match curve.decode_point(public_key) {
        Ok(q) => q,
        Err(_) => return Ok(false),
    };
    let p1 = curve.scalar_mul_base(&z1)?;
    let q1 = curve.scalar_mul(&q, &z2)?;
    let x = match curve.add(&p1, &q1) {
        Point::Affine { x, .. } => x,
        Point::Identity => return Ok(false),
    };
    Ok(bool::from(curve.fq.reduce(&x).ct_eq(&r)))
}
