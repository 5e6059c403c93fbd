//! Conversion between the Weierstrass and twisted-Edwards forms of the
//! TC26 parameter sets that define both.
//!
//! The forms are related through the constants s = (e − d)/4 and
//! t = (e + d)/6 over the field prime. The maps are exact mutual inverses
//! away from their singular fibers (v = 1 or u = 0 on the Edwards side;
//! y = 0 or x − t = −s on the Weierstrass side), where a field division by
//! zero would occur.

use super::{AffinePoint, Curve};
use crypto_bigint::U512;
use gostec_api::{Error, Result};

/// The conversion constants (s, t) of a parameter set.
///
/// Uses the precomputed pair when the parameter set carries one; otherwise
/// derives it from the Edwards coefficients. The result is memoized on the
/// parameter set; a concurrent first call may compute the pair redundantly,
/// but the computation is deterministic and only one value is ever stored.
pub fn compute_st(curve: &Curve<'_>) -> Result<(U512, U512)> {
    let params = curve.params();
    if let Some(st) = params.st() {
        return Ok(st);
    }
    let ed = params.edwards.ok_or(Error::Configuration {
        context: "compute_st",
        message: "parameter set has neither twisted Edwards coefficients nor precomputed (s, t)",
    })?;
    let fp = &curve.fp;
    let s = fp.div(&fp.sub(&ed.e, &ed.d), &U512::from_u64(4))?;
    let t = fp.div(&fp.add(&ed.e, &ed.d), &U512::from_u64(6))?;
    Ok(params.st_or_init(|| (s, t)))
}

/// Map a twisted-Edwards point (u, v) to Weierstrass coordinates (x, y).
pub fn uv2xy(curve: &Curve<'_>, point: &AffinePoint) -> Result<AffinePoint> {
    let (s, t) = compute_st(curve)?;
    let fp = &curve.fp;
    let u = &point.x;
    let v = &point.y;
    let one_minus_v = fp.sub(&U512::ONE, v);
    if one_minus_v == U512::ZERO || *u == U512::ZERO {
        return Err(Error::Domain {
            context: "uv2xy",
            message: "division by zero in the field",
        });
    }
    let s_one_plus_v = fp.mul(&s, &fp.add(&U512::ONE, v));
    Ok(AffinePoint {
        x: fp.add(&t, &fp.div(&s_one_plus_v, &one_minus_v)?),
        y: fp.div(&s_one_plus_v, &fp.mul(u, &one_minus_v))?,
    })
}

/// Map a Weierstrass point (x, y) to twisted-Edwards coordinates (u, v).
pub fn xy2uv(curve: &Curve<'_>, point: &AffinePoint) -> Result<AffinePoint> {
    let (s, t) = compute_st(curve)?;
    let fp = &curve.fp;
    let x_minus_t = fp.sub(&point.x, &t);
    let denom = fp.add(&x_minus_t, &s);
    if point.y == U512::ZERO || denom == U512::ZERO {
        return Err(Error::Domain {
            context: "xy2uv",
            message: "division by zero in the field",
        });
    }
    Ok(AffinePoint {
        x: fp.div(&x_minus_t, &point.y)?,
        y: fp.div(&fp.sub(&x_minus_t, &s), &denom)?,
    })
}
