//! Shared API types for the gostec workspace.
//!
//! Every crate in the workspace reports failures through the [`Error`]
//! taxonomy defined here. The split mirrors the way callers can react:
//! configuration defects, wrong-size inputs, malformed encodings, and
//! mathematical domain violations. Degenerate intermediate values inside the
//! signing loop are deliberately absent from the taxonomy; they are retried
//! internally and are never observable by callers.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;

pub use error::{validate, Error, Result};
