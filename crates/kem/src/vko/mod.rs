//! VKO key agreement with hash-based key export.
//!
//! The raw shared secret is the point S = (d·Q)·(h·u mod n) where d is the
//! local private scalar, Q the peer's validated public point, h the curve
//! cofactor and u the user keying material reduced mod n. Both parties
//! arrive at the same S, which is serialized as x ‖ y with little-endian
//! fixed-width coordinates and consumed as hash input only.
//!
//! A degenerate u ≡ 0 collapses S to the identity; per the standard's key
//! agreement this is not special-cased and yields the all-zero coordinate
//! encoding.

use crypto_bigint::U512;
use gost94::{Digest, Gost94CryptoPro};
use gostec_algorithms::ec::{Curve, Point};
use gostec_algorithms::field::{from_be_padded, to_be_fixed};
use gostec_algorithms::kdf::kdf_tree_gostr3411_2012_256;
use gostec_api::{validate, Result};
use gostec_params::GostCurve;
use streebog::{Streebog256, Streebog512};
use zeroize::Zeroizing;

#[cfg(test)]
mod tests;

/// Label fixed by the key-export scheme.
const KEG_KDF_LABEL: &[u8; 8] = b"kdf tree";

/// Compute the raw shared secret: 2·field_bytes bytes, x ‖ y little-endian.
pub fn kek(
    params: &GostCurve,
    private_key: &[u8],
    public_key: &[u8],
    ukm: &[u8],
) -> Result<Vec<u8>> {
    let curve = Curve::new(params)?;
    let len = params.field_bytes;
    validate::length("private key", private_key.len(), len)?;
    let d = Zeroizing::new(from_be_padded(private_key)?);
    validate::domain(
        *d != U512::ZERO && *d < params.n,
        "kek",
        "private scalar outside [1, n-1]",
    )?;
    let q = curve.decode_point(public_key)?;
    let u = curve.fq.reduce_bytes(ukm)?;
    let cofactor_u = curve.fq.mul(&U512::from_u64(params.h as u64), &u);
    let shared = curve.scalar_mul(&curve.scalar_mul(&q, &d)?, &cofactor_u)?;
    let (x, y) = match shared {
        Point::Affine { x, y } => (x, y),
        Point::Identity => (U512::ZERO, U512::ZERO),
    };
    let mut out = Vec::with_capacity(2 * len);
    let mut x_le = to_be_fixed(&x, len);
    x_le.reverse();
    let mut y_le = to_be_fixed(&y, len);
    y_le.reverse();
    out.extend_from_slice(&x_le);
    out.extend_from_slice(&y_le);
    Ok(out)
}

/// Key agreement over the GOST R 34.11-94 hash (CryptoPro parameter set),
/// as used with the 2001 revision. 32-byte output.
pub fn kek_34102001(
    params: &GostCurve,
    private_key: &[u8],
    public_key: &[u8],
    ukm: &[u8],
) -> Result<Vec<u8>> {
    let shared = Zeroizing::new(kek(params, private_key, public_key, ukm)?);
    Ok(Gost94CryptoPro::digest(shared.as_slice()).to_vec())
}

/// Key agreement over Streebog-256. 32-byte output.
pub fn kek_34102012_256(
    params: &GostCurve,
    private_key: &[u8],
    public_key: &[u8],
    ukm: &[u8],
) -> Result<Vec<u8>> {
    let shared = Zeroizing::new(kek(params, private_key, public_key, ukm)?);
    Ok(Streebog256::digest(shared.as_slice()).to_vec())
}

/// Key agreement over Streebog-512. 64-byte output.
pub fn kek_34102012_512(
    params: &GostCurve,
    private_key: &[u8],
    public_key: &[u8],
    ukm: &[u8],
) -> Result<Vec<u8>> {
    let shared = Zeroizing::new(kek(params, private_key, public_key, ukm)?);
    Ok(Streebog512::digest(shared.as_slice()).to_vec())
}

/// Export-key generation. The seed must be exactly 32 bytes: the first 16
/// feed the key agreement as ukm and, for the 256-bit family, bytes 16..24
/// diversify the tree KDF that expands the agreed key to 64 bytes.
///
/// Experimental: the standard publishes no test vectors for this scheme,
/// so the output is unverified against official data.
pub fn keg(
    params: &GostCurve,
    private_key: &[u8],
    public_key: &[u8],
    seed: &[u8],
) -> Result<Vec<u8>> {
    validate::length("keg seed", seed.len(), 32)?;
    if params.field_bytes == 64 {
        return kek_34102012_512(params, private_key, public_key, &seed[..16]);
    }
    let k_exp = Zeroizing::new(kek_34102012_256(params, private_key, public_key, &seed[..16])?);
    kdf_tree_gostr3411_2012_256(&k_exp, KEG_KDF_LABEL, &seed[16..24], 2)
}
