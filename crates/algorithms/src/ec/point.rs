//! Point representations.

use crypto_bigint::U512;

/// A point of the curve group: affine coordinates or the group identity
/// (the point at infinity). Values are produced by curve operations or
/// decoded from bytes and are never mutated in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Point {
    /// The point at infinity
    Identity,
    /// An affine point (x, y)
    Affine {
        /// x-coordinate, canonical mod p
        x: U512,
        /// y-coordinate, canonical mod p
        y: U512,
    },
}

impl Point {
    /// Is this the identity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }
}

/// A raw coordinate pair. Used by the Weierstrass ↔ twisted-Edwards
/// converter, whose inputs and outputs are coordinates on two different
/// curve forms rather than members of one group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AffinePoint {
    /// First coordinate (x, or u on the Edwards form)
    pub x: U512,
    /// Second coordinate (y, or v on the Edwards form)
    pub y: U512,
}

/// Jacobian coordinates (X : Y : Z), x = X/Z², y = Y/Z³, for chained
/// arithmetic without per-step inversions.
#[derive(Clone, Copy, Debug)]
pub(crate) enum ProjectivePoint {
    Identity,
    Jacobian { x: U512, y: U512, z: U512 },
}
