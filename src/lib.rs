//! # gostec
//!
//! A pure Rust implementation of the GOST R 34.10 elliptic-curve signature
//! standard (2001 and 2012 revisions, 256- and 512-bit parameter families),
//! the companion VKO key-agreement scheme with hash-based key export, and
//! the Weierstrass ↔ twisted-Edwards point conversion defined for the TC26
//! parameter sets.
//!
//! ## Crate structure
//!
//! This is a facade crate re-exporting the workspace members:
//!
//! - [`api`]: shared error taxonomy
//! - [`params`]: standard curve parameter sets
//! - [`algorithms`]: field and curve-group arithmetic, point conversion
//! - [`sign`]: signature generation and verification
//! - [`kem`]: VKO key agreement and key export
//!
//! ## Example
//!
//! Signing and verifying the example vector of GOST R 34.10-2001:
//!
//! ```
//! use gostec::params::gost3410::GOST_R3410_2001_TEST;
//! use gostec::sign::gost3410::{public_key, sign, verify};
//!
//! let private_key =
//!     hex::decode("7a929ade789bb9be10ed359dd39a72c11b60961f49397eee1d19ce9891ec3b28").unwrap();
//! let digest =
//!     hex::decode("2dfbc1b372d89a1188c09c52e0eec61fce52032ab1022e8e67ece6672b043ee5").unwrap();
//!
//! let public = public_key(&GOST_R3410_2001_TEST, &private_key).unwrap();
//! let signature = sign(&GOST_R3410_2001_TEST, &private_key, &digest, None).unwrap();
//! assert!(verify(&GOST_R3410_2001_TEST, &public, &digest, &signature).unwrap());
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub use gostec_api as api;
pub use gostec_params as params;

#[cfg(feature = "algorithms")]
pub use gostec_algorithms as algorithms;

#[cfg(feature = "sign")]
pub use gostec_sign as sign;

#[cfg(feature = "kem")]
pub use gostec_kem as kem;

/// Common imports for gostec users.
pub mod prelude {
    pub use crate::api::{Error, Result};
    pub use crate::params::{GostCurve, TwistedEdwards};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::ec::{Curve, Point};

    #[cfg(feature = "sign")]
    pub use crate::sign::gost3410::{generate_keypair, public_key, sign, verify};

    #[cfg(feature = "kem")]
    pub use crate::kem::vko::{keg, kek, kek_34102001, kek_34102012_256, kek_34102012_512};
}
