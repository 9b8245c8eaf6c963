//! NIST P-256 group and scalar arithmetic for the DRE-IP transcript
//! verifier.
//!
//! This crate is a thin, vetted-library-backed wrapper: all field and group
//! arithmetic comes from the RustCrypto `p256`/`elliptic-curve` crates.
//! What this crate adds is the transcript's specific vocabulary on top of
//! that arithmetic:
//!
//! - [`Point`]: SEC1 decoding, on-curve/non-infinity validation, and decimal
//!   coordinate extraction for hash inputs.
//! - [`Scalar`]: reduction of arbitrary-magnitude integers (Fiat-Shamir
//!   digests, JSON-supplied tally/randomness values) modulo the group order.
//! - [`fiat_shamir::challenge`]: the comma-joined-decimal-string,
//!   SHA-256, reduce-mod-n challenge construction shared by every proof.
//!
//! ## Quick Start
//!
//! ```rust
//! use curve::{Point, Scalar};
//!
//! let g = Point::generator();
//! let k = Scalar::from_u64(5);
//! let p = g * k;
//! assert!(p.is_valid());
//! ```

mod error;
mod fiat_shamir;
mod point;
mod scalar;

pub use error::CurveError;
pub use fiat_shamir::challenge;
pub use point::Point;
pub use scalar::Scalar;
