//! Prime-field arithmetic over runtime moduli.
//!
//! A [`PrimeField`] is an immutable context value carrying one modulus and
//! its precomputed Montgomery parameters. Each curve uses two instances:
//! one modulo the field prime p for coordinates and one modulo the group
//! order n for scalars, nonces and reduced digests. All operations return
//! canonical values in [0, m).

use crypto_bigint::modular::runtime_mod::{DynResidue, DynResidueParams};
use crypto_bigint::{nlimbs, Encoding, NonZero, U512};
use gostec_api::{Error, Result};

#[cfg(test)]
mod tests;

const LIMBS: usize = nlimbs!(512);

/// Field context: a prime modulus m with precomputed Montgomery parameters.
///
/// Construction requires an odd modulus; every modulus in the standard
/// parameter sets is an odd prime. Primality itself is a parameter-set
/// invariant and is not re-checked here, but `inv` is only meaningful for
/// prime m.
#[derive(Clone, Debug)]
pub struct PrimeField {
    modulus: U512,
    modulus_nz: NonZero<U512>,
    monty: DynResidueParams<LIMBS>,
    m_minus_2: U512,
}

impl PrimeField {
    /// Build a field context for the given modulus.
    pub fn new(modulus: &U512) -> Result<Self> {
        // An even modulus has no Montgomery form; zero is rejected here too.
        if modulus.as_words()[0] & 1 == 0 {
            return Err(Error::Configuration {
                context: "PrimeField",
                message: "modulus must be an odd prime",
            });
        }
        let modulus_nz = Option::from(NonZero::new(*modulus)).ok_or(Error::Configuration {
            context: "PrimeField",
            message: "modulus must be non-zero",
        })?;
        Ok(Self {
            modulus: *modulus,
            modulus_nz,
            monty: DynResidueParams::new(modulus),
            m_minus_2: modulus.wrapping_sub(&U512::from_u64(2)),
        })
    }

    /// The modulus m.
    pub fn modulus(&self) -> &U512 {
        &self.modulus
    }

    /// Reduce an arbitrary 512-bit value into [0, m).
    pub fn reduce(&self, x: &U512) -> U512 {
        *x % self.modulus_nz
    }

    /// Interpret up to 64 big-endian bytes as an integer and reduce mod m.
    pub fn reduce_bytes(&self, bytes: &[u8]) -> Result<U512> {
        Ok(self.reduce(&from_be_padded(bytes)?))
    }

    /// (a + b) mod m. Operands must be canonical.
    pub fn add(&self, a: &U512, b: &U512) -> U512 {
        a.add_mod(b, &self.modulus)
    }

    /// (a − b) mod m. Operands must be canonical.
    pub fn sub(&self, a: &U512, b: &U512) -> U512 {
        a.sub_mod(b, &self.modulus)
    }

    /// (−a) mod m. The operand must be canonical.
    pub fn neg(&self, a: &U512) -> U512 {
        a.neg_mod(&self.modulus)
    }

    /// (a · b) mod m.
    pub fn mul(&self, a: &U512, b: &U512) -> U512 {
        DynResidue::new(a, self.monty)
            .mul(&DynResidue::new(b, self.monty))
            .retrieve()
    }

    /// a² mod m.
    pub fn sqr(&self, a: &U512) -> U512 {
        self.mul(a, a)
    }

    /// (a · k) mod m for a small integer k.
    pub fn mul_u32(&self, a: &U512, k: u32) -> U512 {
        self.mul(a, &U512::from_u64(k as u64))
    }

    /// a^e mod m.
    pub fn pow(&self, a: &U512, e: &U512) -> U512 {
        DynResidue::new(a, self.monty).pow(e).retrieve()
    }

    /// a⁻¹ mod m via Fermat exponentiation a^(m−2); requires prime m.
    /// The inverse of zero is undefined.
    pub fn inv(&self, a: &U512) -> Result<U512> {
        if *a == U512::ZERO {
            return Err(Error::Domain {
                context: "PrimeField::inv",
                message: "inverse of zero",
            });
        }
        Ok(self.pow(a, &self.m_minus_2))
    }

    /// (a / b) mod m, i.e. a · b⁻¹.
    pub fn div(&self, a: &U512, b: &U512) -> Result<U512> {
        Ok(self.mul(a, &self.inv(b)?))
    }
}

/// Interpret up to 64 big-endian bytes as a 512-bit integer.
pub fn from_be_padded(bytes: &[u8]) -> Result<U512> {
    gostec_api::validate::max_length("big-endian integer", bytes.len(), U512::BYTES)?;
    let mut buf = [0u8; U512::BYTES];
    buf[U512::BYTES - bytes.len()..].copy_from_slice(bytes);
    Ok(U512::from_be_slice(&buf))
}

/// Serialize the low `len` bytes of x, big-endian fixed-width.
///
/// Callers guarantee x < 2^(8·len); the standard widths are 32 and 64.
pub fn to_be_fixed(x: &U512, len: usize) -> Vec<u8> {
    let bytes = x.to_be_bytes();
    bytes[bytes.len() - len..].to_vec()
}
