//! Curve parameter records.

use crypto_bigint::U512;
use std::sync::OnceLock;

/// Twisted-Edwards coefficients (e, d) for parameter sets that define the
/// alternate curve form e·u² + v² = 1 + d·u²·v².
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwistedEdwards {
    /// Coefficient e
    pub e: U512,
    /// Coefficient d
    pub d: U512,
}

/// One GOST R 34.10 parameter set.
///
/// The record is read-only for the arithmetic layers except for the (s, t)
/// memo slot, which is written at most once. Recomputing (s, t) is
/// deterministic, so a concurrent first access is harmless; `OnceLock`
/// guarantees a single stored value either way.
#[derive(Debug)]
pub struct GostCurve {
    /// Field prime p
    pub p: U512,
    /// Curve coefficient a of y² = x³ + a·x + b
    pub a: U512,
    /// Curve coefficient b
    pub b: U512,
    /// Generator x-coordinate
    pub gx: U512,
    /// Generator y-coordinate
    pub gy: U512,
    /// Order n of the generator subgroup (prime)
    pub n: U512,
    /// Cofactor h
    pub h: u32,
    /// Width of an encoded field element in bytes (32 or 64)
    pub field_bytes: usize,
    /// Twisted-Edwards form, where the parameter set defines one
    pub edwards: Option<TwistedEdwards>,
    st: OnceLock<(U512, U512)>,
}

impl GostCurve {
    /// Build a parameter set from caller-supplied values.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        p: U512,
        a: U512,
        b: U512,
        gx: U512,
        gy: U512,
        n: U512,
        h: u32,
        field_bytes: usize,
        edwards: Option<TwistedEdwards>,
    ) -> Self {
        Self {
            p,
            a,
            b,
            gx,
            gy,
            n,
            h,
            field_bytes,
            edwards,
            st: OnceLock::new(),
        }
    }

    /// Size in bytes of an uncompressed point encoding.
    pub const fn point_bytes(&self) -> usize {
        1 + 2 * self.field_bytes
    }

    /// Size in bytes of a signature (r ‖ s).
    pub const fn signature_bytes(&self) -> usize {
        2 * self.field_bytes
    }

    /// Seed the (s, t) memo of a freshly built parameter set, for external
    /// sets that supply precomputed conversion constants instead of the
    /// Edwards coefficients. A later seed of an already-populated slot is
    /// ignored.
    pub fn with_st(self, s: U512, t: U512) -> Self {
        let _ = self.st.set((s, t));
        self
    }

    /// The memoized conversion constants, if present.
    pub fn st(&self) -> Option<(U512, U512)> {
        self.st.get().copied()
    }

    /// Return the memoized Edwards conversion constants (s, t), storing the
    /// result of `init` on first access.
    pub fn st_or_init(&self, init: impl FnOnce() -> (U512, U512)) -> (U512, U512) {
        *self.st.get_or_init(init)
    }
}
