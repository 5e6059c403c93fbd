//! Digital signatures for the gostec library.
//!
//! One scheme lives here: GOST R 34.10, in its 2001 and 2012 revisions.
//! The two revisions share the signing and verification equations and
//! differ only in the parameter sets and digest widths they are used with,
//! so a single engine parameterized by a [`gostec_params::GostCurve`]
//! covers both.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod gost3410;
