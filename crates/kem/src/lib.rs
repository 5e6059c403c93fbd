//! Key agreement for the gostec library.
//!
//! Implements VKO, the Diffie-Hellman-like scheme defined alongside
//! GOST R 34.10, in its raw form ([`vko::kek`]) and with the hash-based
//! key derivations of RFC 4357 and RFC 7836 layered on top, plus the
//! export-key generation scheme `keg`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod vko;
