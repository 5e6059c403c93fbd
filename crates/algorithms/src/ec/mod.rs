//! The short-Weierstrass curve group y² = x³ + a·x + b (mod p).
//!
//! A [`Curve`] bundles one parameter set with its two field contexts and
//! exposes the group law, scalar multiplication, the on-curve check, the
//! uncompressed wire format, and digest reduction. Point arithmetic runs on
//! Jacobian projective coordinates internally and presents affine points at
//! the API boundary.

pub mod convert;
mod point;


pub use point::{AffinePoint, Point};

use crate::field::{from_be_padded, to_be_fixed, PrimeField};
use crypto_bigint::{Encoding, U512};
use gostec_api::{validate, Error, Result};
use gostec_params::GostCurve;
use point::ProjectivePoint;

/// Format byte of an uncompressed point encoding.
pub const POINT_UNCOMPRESSED_TAG: u8 = 0x04;

/// A parameter set together with its field contexts.
pub struct Curve<'a> {
    params: &'a GostCurve,
    /// Coordinate field, modulo the field prime p.
    pub fp: PrimeField,
    /// Scalar field, modulo the group order n (q in the standard's notation).
    pub fq: PrimeField,
}

impl<'a> Curve<'a> {
    /// Build the field contexts for a parameter set.
    pub fn new(params: &'a GostCurve) -> Result<Self> {
        Ok(Self {
            params,
            fp: PrimeField::new(&params.p)?,
            fq: PrimeField::new(&params.n)?,
        })
    }

    /// The underlying parameter set.
    pub fn params(&self) -> &'a GostCurve {
        self.params
    }

    /// The generator point G.
    pub fn generator(&self) -> Point {
        Point::Affine {
            x: self.params.gx,
            y: self.params.gy,
        }
    }

    /// Does the point satisfy y² ≡ x³ + a·x + b (mod p)?
    /// The identity is a group member and passes.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        let (x, y) = match point {
            Point::Identity => return true,
            Point::Affine { x, y } => (x, y),
        };
        let fp = &self.fp;
        let x_cubed = fp.mul(&fp.sqr(x), x);
        let rhs = fp.add(&fp.add(&x_cubed, &fp.mul(&self.params.a, x)), &self.params.b);
        fp.sqr(y) == rhs
    }

    /// Group addition with the chord-and-tangent law. Equal x-coordinates
    /// tie-break into doubling (equal y) or the identity (inverse points).
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Point {
        let sum = self.proj_add(&self.to_projective(lhs), &self.to_projective(rhs));
        self.to_affine(&sum)
    }

    /// Point doubling; a point with y = 0 has a vertical tangent and
    /// doubles to the identity.
    pub fn double(&self, point: &Point) -> Point {
        let doubled = self.proj_double(&self.to_projective(point));
        self.to_affine(&doubled)
    }

    /// (x, −y mod p).
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine {
                x: *x,
                y: self.fp.neg(y),
            },
        }
    }

    /// Scalar multiplication k·P by binary double-and-add.
    ///
    /// The scalar must satisfy k < n; larger values are a Domain error
    /// rather than being silently reduced. k = 0 yields the identity.
    pub fn scalar_mul(&self, point: &Point, k: &U512) -> Result<Point> {
        if k >= &self.params.n {
            return Err(Error::Domain {
                context: "scalar_mul",
                message: "scalar out of range",
            });
        }
        if *k == U512::ZERO || point.is_identity() {
            return Ok(Point::Identity);
        }
        let base = self.to_projective(point);
        let mut acc = ProjectivePoint::Identity;
        let k_bytes = k.to_be_bytes();
        for &byte in k_bytes.iter().skip_while(|&&b| b == 0) {
            for i in (0..8).rev() {
                acc = self.proj_double(&acc);
                if (byte >> i) & 1 == 1 {
                    acc = self.proj_add(&acc, &base);
                }
            }
        }
        Ok(self.to_affine(&acc))
    }

    /// Scalar multiplication with the generator: k·G.
    pub fn scalar_mul_base(&self, k: &U512) -> Result<Point> {
        self.scalar_mul(&self.generator(), k)
    }

    /// Serialize as 0x04 ‖ x ‖ y, big-endian fixed-width coordinates.
    /// The identity has no uncompressed encoding.
    pub fn encode_point(&self, point: &Point) -> Result<Vec<u8>> {
        let (x, y) = match point {
            Point::Identity => {
                return Err(Error::Domain {
                    context: "encode_point",
                    message: "the identity has no uncompressed encoding",
                })
            }
            Point::Affine { x, y } => (x, y),
        };
        let len = self.params.field_bytes;
        let mut out = Vec::with_capacity(1 + 2 * len);
        out.push(POINT_UNCOMPRESSED_TAG);
        out.extend_from_slice(&to_be_fixed(x, len));
        out.extend_from_slice(&to_be_fixed(y, len));
        Ok(out)
    }

    /// Parse an uncompressed encoding and validate the point.
    ///
    /// Wrong length and a bad format byte are encoding-level failures;
    /// non-canonical coordinates and off-curve points are Domain errors.
    pub fn decode_point(&self, bytes: &[u8]) -> Result<Point> {
        let len = self.params.field_bytes;
        validate::length("uncompressed point", bytes.len(), 1 + 2 * len)?;
        validate::encoding(
            bytes[0] == POINT_UNCOMPRESSED_TAG,
            "uncompressed point",
            "format byte must be 0x04",
        )?;
        let x = from_be_padded(&bytes[1..1 + len])?;
        let y = from_be_padded(&bytes[1 + len..])?;
        validate::domain(
            x < self.params.p && y < self.params.p,
            "uncompressed point",
            "coordinate is not a canonical field element",
        )?;
        let point = Point::Affine { x, y };
        validate::domain(
            self.is_on_curve(&point),
            "uncompressed point",
            "point is not on the curve",
        )?;
        Ok(point)
    }

    /// Interpret a digest as a big-endian integer reduced mod n; a zero
    /// reduction becomes 1 per the standard.
    pub fn reduce_digest(&self, digest: &[u8]) -> Result<U512> {
        let e = self.fq.reduce_bytes(digest)?;
        Ok(if e == U512::ZERO { U512::ONE } else { e })
    }

    fn to_projective(&self, point: &Point) -> ProjectivePoint {
        match point {
            Point::Identity => ProjectivePoint::Identity,
            Point::Affine { x, y } => ProjectivePoint::Jacobian {
                x: *x,
                y: *y,
                z: U512::ONE,
            },
        }
    }

    fn to_affine(&self, point: &ProjectivePoint) -> Point {
        let (x, y, z) = match point {
            ProjectivePoint::Identity => return Point::Identity,
            ProjectivePoint::Jacobian { x, y, z } => (x, y, z),
        };
        let fp = &self.fp;
        let z_inv = fp.inv(z).expect("nonzero Z is invertible");
        let z_inv_sq = fp.sqr(&z_inv);
        Point::Affine {
            x: fp.mul(x, &z_inv_sq),
            y: fp.mul(y, &fp.mul(&z_inv_sq, &z_inv)),
        }
    }

    /// Jacobian doubling with the general-a formula M = 3X² + a·Z⁴.
    fn proj_double(&self, point: &ProjectivePoint) -> ProjectivePoint {
        let (x, y, z) = match point {
            ProjectivePoint::Identity => return ProjectivePoint::Identity,
            ProjectivePoint::Jacobian { x, y, z } => (x, y, z),
        };
        if *y == U512::ZERO {
            return ProjectivePoint::Identity;
        }
        let fp = &self.fp;
        let y_sq = fp.sqr(y);
        let s = fp.mul_u32(&fp.mul(x, &y_sq), 4);
        let z_sq = fp.sqr(z);
        let m = fp.add(
            &fp.mul_u32(&fp.sqr(x), 3),
            &fp.mul(&self.params.a, &fp.sqr(&z_sq)),
        );
        let x3 = fp.sub(&fp.sqr(&m), &fp.add(&s, &s));
        let y3 = fp.sub(
            &fp.mul(&m, &fp.sub(&s, &x3)),
            &fp.mul_u32(&fp.sqr(&y_sq), 8),
        );
        let z3 = fp.mul_u32(&fp.mul(y, z), 2);
        ProjectivePoint::Jacobian {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    fn proj_add(&self, lhs: &ProjectivePoint, rhs: &ProjectivePoint) -> ProjectivePoint {
        let (x1, y1, z1) = match lhs {
            ProjectivePoint::Identity => return *rhs,
            ProjectivePoint::Jacobian { x, y, z } => (x, y, z),
        };
        let (x2, y2, z2) = match rhs {
            ProjectivePoint::Identity => return *lhs,
            ProjectivePoint::Jacobian { x, y, z } => (x, y, z),
        };
        let fp = &self.fp;

        let z1_sq = fp.sqr(z1);
        let z2_sq = fp.sqr(z2);
        let u1 = fp.mul(x1, &z2_sq);
        let u2 = fp.mul(x2, &z1_sq);
        let s1 = fp.mul(y1, &fp.mul(&z2_sq, z2));
        let s2 = fp.mul(y2, &fp.mul(&z1_sq, z1));

        let h = fp.sub(&u2, &u1);
        let r = fp.sub(&s2, &s1);

        // Same x: either the same point (double) or inverse points (identity).
        if h == U512::ZERO {
            return if r == U512::ZERO {
                self.proj_double(lhs)
            } else {
                ProjectivePoint::Identity
            };
        }

        let h_sq = fp.sqr(&h);
        let h_cu = fp.mul(&h_sq, &h);
        let v = fp.mul(&u1, &h_sq);

        let x3 = fp.sub(&fp.sub(&fp.sqr(&r), &h_cu), &fp.add(&v, &v));
        let y3 = fp.sub(&fp.mul(&r, &fp.sub(&v, &x3)), &fp.mul(&s1, &h_cu));
        let z3 = fp.mul(&fp.mul(z1, z2), &h);
        ProjectivePoint::Jacobian {
            x: x3,
            y: y3,
            z: z3,
        }
    }
}
