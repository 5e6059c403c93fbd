//! Tree-mode key derivation over HMAC with the 256-bit Streebog hash
//! (KDF_TREE_GOSTR3411_2012_256).
//!
//! Block i ∈ 1..=blocks is HMAC(key, [i]₁ ‖ label ‖ 0x00 ‖ seed ‖ [L]₂)
//! where L is the total output length in bits, big-endian. The key-export
//! scheme consumes this with the fixed label `"kdf tree"`, an 8-byte
//! diversifier and a block count of 2.
//!
//! The standard publishes no vectors for the export scheme built on top of
//! this derivation; treat the output as unverified against official data.

use gostec_api::{Error, Result};
use hmac::{Hmac, Mac};
use streebog::Streebog256;

#[cfg(test)]
mod tests;

type HmacStreebog256 = Hmac<Streebog256>;

/// Derive `blocks` 32-byte keys and return them concatenated.
pub fn kdf_tree_gostr3411_2012_256(
    key: &[u8],
    label: &[u8],
    seed: &[u8],
    blocks: u8,
) -> Result<Vec<u8>> {
    if blocks == 0 {
        return Err(Error::Domain {
            context: "kdf_tree",
            message: "block count must be positive",
        });
    }
    let total_bits = (blocks as u16) * 256;
    let mut out = Vec::with_capacity(blocks as usize * 32);
    for i in 1..=blocks {
        let mut mac = HmacStreebog256::new_from_slice(key).map_err(|_| Error::Domain {
            context: "kdf_tree",
            message: "unusable key material",
        })?;
        mac.update(&[i]);
        mac.update(label);
        mac.update(&[0x00]);
        mac.update(seed);
        mac.update(&total_bits.to_be_bytes());
        out.extend_from_slice(&mac.finalize().into_bytes());
    }
    Ok(out)
}
