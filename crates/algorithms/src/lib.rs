//! Cryptographic primitives for the gostec library.
//!
//! This crate carries the mathematically hard surface of the GOST R 34.10
//! suite: prime-field arithmetic over the runtime-supplied moduli of a
//! parameter set, the short-Weierstrass curve group with its wire formats,
//! the Weierstrass ↔ twisted-Edwards point conversion, and the tree-mode
//! KDF consumed by the key-export scheme.
//!
//! Arithmetic is performed on fixed-width 512-bit integers for both
//! parameter families. The implementation aims for functional correctness
//! per the standard; it is not a hardened constant-time implementation,
//! although the building blocks (Montgomery residues, fixed-width integers)
//! avoid the most obvious value-dependent branching.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod ec;
pub mod field;
pub mod kdf;

pub use gostec_api::{Error, Result};
