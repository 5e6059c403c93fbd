//! Curve parameter sets for GOST R 34.10.
//!
//! A [`GostCurve`] bundles everything the arithmetic layer needs to know
//! about one named parameter set: the field prime, the short-Weierstrass
//! coefficients, the generator, the subgroup order and cofactor, the encoded
//! field width, and (for the TC26 sets that define one) the twisted-Edwards
//! form. The standard sets are exported as statics from [`gost3410`];
//! callers with non-standard parameters can build their own record with
//! [`GostCurve::new`].
//!
//! All values are stored as 512-bit big integers regardless of family;
//! 256-bit sets simply occupy the low half. The single mutable slot on a
//! curve record is the set-once memo for the Edwards conversion constants
//! (s, t), which the conversion layer populates on first use.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod curve;
pub mod gost3410;

pub use curve::{GostCurve, TwistedEdwards};
